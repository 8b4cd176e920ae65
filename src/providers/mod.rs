//! Completion provider implementations
//!
//! - **groq**: Groq provider using the OpenAI-compatible API
//! - **openai_shared**: Shared structures and HTTP client for OpenAI-compatible providers
//!
//! Handlers only ever see the [`CompletionProvider`] trait, so tests can put
//! a stub behind the router without touching the network.

pub mod groq;
pub mod openai_shared;

pub use groq::GroqProvider;

use crate::error::LlmResult;
use crate::logging::log_warn;
use async_trait::async_trait;

/// A backend that turns one prompt into one completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Send `prompt` as a single user message and return the cleaned text.
    async fn complete(&self, prompt: &str) -> LlmResult<String>;
}

/// Run one completion and collapse the outcome to a string.
///
/// Never fails: errors come back as their [`wire_message`] text, which is
/// what the HTTP handlers put in `result`.
///
/// [`wire_message`]: crate::error::LlmError::wire_message
pub async fn call_model(provider: &dyn CompletionProvider, prompt: &str) -> String {
    match provider.complete(prompt).await {
        Ok(text) => text,
        Err(err) => {
            log_warn!(
                provider = provider.provider_name(),
                category = ?err.category(),
                error = %err,
                "Completion failed, returning error text"
            );
            err.wire_message()
        }
    }
}
