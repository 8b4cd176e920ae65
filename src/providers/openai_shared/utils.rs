//! HTTP client for OpenAI-compatible providers
//!
//! Sends exactly one request per call. There is no retry executor here:
//! a failed call is reported to the caller as-is.

use super::types::*;
use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// HTTP client for OpenAI-compatible chat completion endpoints
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl OpenAICompatibleClient {
    /// Create a client whose every request is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the TLS backend cannot be
    /// initialised.
    pub fn with_timeout(timeout: Duration) -> LlmResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::configuration_error(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    /// Build authentication headers for OpenAI-compatible APIs
    pub fn build_auth_headers(api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            LlmError::configuration_error(format!("Invalid API key format: {e}"))
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(headers)
    }

    /// Execute a single chat completion request
    pub async fn execute_chat_request(
        &self,
        url: &str,
        headers: &HeaderMap,
        request: &OpenAIRequest,
    ) -> LlmResult<OpenAIResponse> {
        log_debug!(
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(url)
            .headers(headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(url, e))?;

        if !response.status().is_success() {
            return Err(handle_error_response(response).await);
        }

        parse_success_response(response).await
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> LlmError {
        log_error!(
            url = %url,
            error = %e,
            "HTTP request failed"
        );
        if e.is_timeout() {
            return LlmError::timeout(self.timeout.as_secs());
        }
        LlmError::request_failed(format!("{e}"), Some(Box::new(e)))
    }
}

/// Handle non-success HTTP responses
async fn handle_error_response(response: reqwest::Response) -> LlmError {
    let status = response.status();
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    LlmError::api_error(status.as_u16(), error_text)
}

/// Parse successful HTTP response into OpenAIResponse
async fn parse_success_response(response: reqwest::Response) -> LlmResult<OpenAIResponse> {
    let raw_body = response.text().await.map_err(|e| {
        log_error!(
            error = %e,
            "Failed to read response body"
        );
        LlmError::response_parsing_error(format!("Failed to read response: {e}"))
    })?;

    serde_json::from_str(&raw_body).map_err(|e| {
        log_error!(
            error = %e,
            raw_body = %raw_body,
            "Failed to parse response"
        );
        LlmError::response_parsing_error(format!("Invalid response: {e}"))
    })
}
