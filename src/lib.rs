//! # salesgen
//!
//! Web front end that turns marketing and sales form inputs into prompts,
//! sends them to the Groq chat completion API, and returns the generated
//! text as JSON.
//!
//! ## Endpoints
//!
//! - `GET /` - static page with the three forms
//! - `POST /generate_campaign` - `product`, `audience`, `platform`
//! - `POST /generate_pitch` - `product`, `customer`
//! - `POST /score` - `name`, `budget`, `need`, `urgency`
//!
//! Bodies may be url-encoded or multipart. Each `POST` answers
//! `{"result": "<string>"}`. Provider failures are reported inside `result`,
//! never as an HTTP error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use salesgen::{AppState, GroqConfig, GroqProvider};
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GroqConfig {
//!     api_key: Some("your-api-key".to_string()),
//!     ..GroqConfig::default()
//! };
//! let provider = GroqProvider::new(config)?;
//! let app = salesgen::server::router(AppState::new(Arc::new(provider)));
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod markdown;
pub mod prompts;
pub mod providers;
pub mod server;

#[cfg(test)]
pub mod tests;

pub use config::{AppConfig, GroqConfig, ServerConfig};
pub use error::{ErrorCategory, LlmError, LlmResult};
pub use form::FormFields;
pub use markdown::strip_emphasis;
pub use prompts::{CampaignForm, LeadForm, PitchForm, PromptTemplate};
pub use providers::{call_model, CompletionProvider, GroqProvider};
pub use server::{AppState, CompletionResponse};
