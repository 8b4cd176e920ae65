//! Error types for completion calls.
//!
//! Every failure of the "call model" path is an [`LlmError`]. Handlers never
//! surface these as HTTP errors: they are collapsed to a single string with
//! [`LlmError::wire_message`] at the JSON boundary, so a browser client sees
//! the same `{"result": ...}` shape for success and failure.
//!
//! # Example
//!
//! ```rust
//! use salesgen::LlmError;
//!
//! let err = LlmError::api_error(500, "rate limited");
//! assert_eq!(err.wire_message(), "API Error: rate limited");
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The provider or the network had an issue.
    External,

    /// The caller or operator made a mistake (configuration, credentials).
    Client,

    /// Temporary failures such as timeouts.
    Transient,
}

/// Convenient result type for completion operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while talking to the completion provider.
///
/// | Variant | Category |
/// |---------|----------|
/// | `ConfigurationError` | Client |
/// | `RequestFailed` | External |
/// | `ApiError` | External |
/// | `ResponseParsingError` | External |
/// | `Timeout` | Transient |
#[derive(Error, Debug)]
pub enum LlmError {
    /// Configuration is invalid or incomplete (missing API key, bad number).
    #[error("Configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request could not be sent or no response arrived.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying transport error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider answered with a non-success status.
    ///
    /// `body` is the raw response text, kept verbatim so the caller can see
    /// whatever the provider said (quota messages, validation errors).
    #[error("API error {status}: {body}")]
    ApiError {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The provider answered 2xx but the body was not a usable completion.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// The provider didn't respond within the configured timeout.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },
}

impl LlmError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ApiError { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
        }
    }

    /// Collapse the error into the single string returned in `result`.
    ///
    /// Provider errors embed the raw body; everything else embeds the
    /// error's display text.
    pub fn wire_message(&self) -> String {
        match self {
            Self::ApiError { body, .. } => format!("API Error: {body}"),
            other => format!("API error. Please try again. Error: {other}"),
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "Completion request failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        log_error!(
            error_type = "api_error",
            status = status,
            body = %body,
            "Completion provider returned an error status"
        );
        Self::ApiError { status, body }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "Completion response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "Completion request timed out"
        );
        Self::Timeout { timeout_seconds }
    }
}
