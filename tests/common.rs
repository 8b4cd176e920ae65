//! Test helper utilities for salesgen integration tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use salesgen::server::router;
use salesgen::{AppState, CompletionProvider, GroqConfig, GroqProvider, LlmResult};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

/// Groq configuration pointing at a mock server.
pub fn create_test_config(base_url: String) -> GroqConfig {
    GroqConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        model: "llama-3.3-70b-versatile".to_string(),
        temperature: 0.7,
        timeout: Duration::from_secs(1),
    }
}

/// Chat completion body with a single choice.
pub fn create_success_response(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}

/// Router wired to a real Groq provider aimed at `base_url`.
pub fn groq_app(base_url: String) -> Router {
    let provider = GroqProvider::new(create_test_config(base_url)).unwrap();
    router(AppState::new(Arc::new(provider)))
}

/// Deterministic provider that echoes a fixed reply and records prompts.
#[derive(Default)]
pub struct StubProvider {
    pub reply: String,
    pub prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    fn provider_name(&self) -> &'static str {
        "stub"
    }

    async fn complete(&self, prompt: &str) -> LlmResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

pub fn stub_app(stub: Arc<StubProvider>) -> Router {
    router(AppState::new(stub))
}

/// POST a url-encoded form and decode the JSON reply.
pub async fn post_form(app: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

/// POST a raw body with an explicit content type and decode the JSON reply.
pub async fn post_body(
    app: Router,
    path: &str,
    content_type: &str,
    body: String,
) -> (StatusCode, Option<serde_json::Value>) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).ok())
}

/// Encode text fields as a multipart/form-data body.
pub fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!("--{boundary}--\r\n"));
    body
}
