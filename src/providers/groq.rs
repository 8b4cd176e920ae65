//! Groq provider implementation
//!
//! Groq exposes an OpenAI-compatible chat completions API, so this provider
//! is a thin layer over the shared OpenAI structures.

use super::openai_shared::{OpenAICompatibleClient, OpenAIMessage, OpenAIRequest, OpenAIResponse};
use super::CompletionProvider;
use crate::config::GroqConfig;
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::markdown::strip_emphasis;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Instant;

/// Groq chat completion provider
#[derive(Debug, Clone)]
pub struct GroqProvider {
    http_client: OpenAICompatibleClient,
    headers: HeaderMap,
    url: String,
    config: GroqConfig,
}

impl GroqProvider {
    /// Create a new Groq provider instance
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if:
    /// - API key is missing or cannot be used as a header value
    /// - HTTP client initialization fails
    pub fn new(config: GroqConfig) -> LlmResult<Self> {
        log_debug!(
            provider = "groq",
            has_api_key = config.api_key.is_some(),
            base_url = %config.base_url,
            model = %config.model,
            temperature = config.temperature,
            timeout_secs = config.timeout.as_secs(),
            "Creating Groq provider"
        );

        config.validate()?;
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::configuration_error("Groq API key is required"))?;
        let headers = OpenAICompatibleClient::build_auth_headers(api_key)?;

        Ok(Self {
            http_client: OpenAICompatibleClient::with_timeout(config.timeout)?,
            headers,
            url: config.completions_url(),
            config,
        })
    }

    fn create_request(&self, prompt: &str) -> OpenAIRequest {
        OpenAIRequest {
            model: self.config.model.clone(),
            messages: vec![OpenAIMessage::user(prompt)],
            temperature: Some(self.config.temperature),
        }
    }

    /// Pull the first choice's text out of a response and clean it up.
    fn extract_completion(response: OpenAIResponse) -> LlmResult<String> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::response_parsing_error("No choices in response"))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| LlmError::response_parsing_error("No message content in response"))?;

        Ok(strip_emphasis(&content))
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn provider_name(&self) -> &'static str {
        "groq"
    }

    async fn complete(&self, prompt: &str) -> LlmResult<String> {
        let request = self.create_request(prompt);

        let start_time = Instant::now();
        let api_response = self
            .http_client
            .execute_chat_request(&self.url, &self.headers, &request)
            .await?;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        log_debug!(
            provider = "groq",
            model = %self.config.model,
            duration_ms = duration_ms,
            choices = api_response.choices.len(),
            total_tokens = api_response.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0),
            "Completion received"
        );

        Self::extract_completion(api_response)
    }
}
