//! HTTP surface: the static page and the three generator endpoints.
//!
//! Every generator answers `200 OK` with `{"result": "<string>"}`, whether
//! the provider call worked or not.

use crate::form::FormFields;
use crate::logging::log_info;
use crate::prompts::{CampaignForm, LeadForm, PitchForm, PromptTemplate};
use crate::providers::{call_model, CompletionProvider};
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

const INDEX_HTML: &str = include_str!("../templates/index.html");

/// Shared state passed to all request handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}

/// Body returned by every generator endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub result: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/generate_campaign", post(generate::<CampaignForm>))
        .route("/generate_pitch", post(generate::<PitchForm>))
        .route("/score", post(generate::<LeadForm>))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_http_request))
                .layer(cors),
        )
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health() -> &'static str {
    "ok"
}

async fn generate<F>(
    State(state): State<AppState>,
    fields: FormFields,
) -> Json<CompletionResponse>
where
    F: PromptTemplate + 'static,
{
    let prompt = F::from_fields(&fields).render();

    let started = Instant::now();
    let result = call_model(state.provider.as_ref(), &prompt).await;
    log_info!(
        kind = F::KIND,
        fields = fields.len(),
        prompt_chars = prompt.len(),
        result_chars = result.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generation finished"
    );

    Json(CompletionResponse { result })
}

async fn log_http_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    let status = response.status();
    log_info!(
        method = %method,
        uri = %uri,
        status = %status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "http request"
    );
    response
}
