use anyhow::Context;
use salesgen::config::AppConfig;
use salesgen::logging::init_tracing;
use salesgen::server::{router, AppState};
use salesgen::GroqProvider;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_path = dotenv::dotenv().ok();
    init_tracing();

    if let Some(path) = dotenv_path {
        info!(path = %path.display(), "loaded environment file");
    }

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let provider = GroqProvider::new(config.groq.clone()).context("failed to create Groq provider")?;
    let app = router(AppState::new(Arc::new(provider)));

    let listener = TcpListener::bind(config.server.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.listen_addr))?;
    info!(
        addr = %config.server.listen_addr,
        model = %config.groq.model,
        "salesgen listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown())
        .await?;
    info!("salesgen shutting down");
    Ok(())
}

async fn wait_for_shutdown() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
