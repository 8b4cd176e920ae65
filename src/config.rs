//! Process configuration.
//!
//! Built once at startup by [`AppConfig::from_env`] and handed to the
//! provider and the server; nothing reads the environment after that.

use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Groq-specific configuration
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub timeout: Duration,
}

// The API key never shows up in logs.
impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl GroqConfig {
    /// Validate provider configuration
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the API key is missing or
    /// blank, or the base URL is empty.
    pub fn validate(&self) -> LlmResult<()> {
        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {}
            _ => {
                return Err(LlmError::configuration_error(
                    "GROQ_API_KEY not found in environment or .env file",
                ))
            }
        }
        if self.base_url.is_empty() {
            return Err(LlmError::configuration_error("Groq base URL is required"));
        }
        Ok(())
    }

    /// Full chat completions endpoint for this configuration.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

/// System-wide configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub groq: GroqConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    /// This is the ONLY method that should access environment variables
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if:
    /// - `GROQ_API_KEY` is missing or empty
    /// - `GROQ_TIMEOUT_SECS` or `SALESGEN_LISTEN_ADDR` cannot be parsed
    pub fn from_env() -> LlmResult<Self> {
        let mut groq = GroqConfig::default();
        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            groq.api_key = Some(api_key);
        }
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            groq.base_url = base_url;
        }
        if let Ok(model) = std::env::var("GROQ_MODEL") {
            groq.model = model;
        }
        if let Ok(raw) = std::env::var("GROQ_TIMEOUT_SECS") {
            let secs = parse_var::<u64>("GROQ_TIMEOUT_SECS", &raw)?;
            groq.timeout = Duration::from_secs(secs);
        }
        groq.validate()?;

        let mut server = ServerConfig::default();
        if let Ok(raw) = std::env::var("SALESGEN_LISTEN_ADDR") {
            server.listen_addr = parse_var("SALESGEN_LISTEN_ADDR", &raw)?;
        }

        log_debug!(
            base_url = %groq.base_url,
            model = %groq.model,
            timeout_secs = groq.timeout.as_secs(),
            listen_addr = %server.listen_addr,
            "Configuration loaded and validated"
        );

        Ok(Self { groq, server })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> LlmResult<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| LlmError::configuration_error(format!("Invalid {name} '{raw}': {e}")))
}
