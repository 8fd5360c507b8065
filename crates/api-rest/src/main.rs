//! Gaze Insight API server binary.

use anyhow::Context;
use gaze_insight_api_rest::{app::create_app, config::ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config)?;

    let app = create_app(config.clone());
    let addr = config.server_address();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Gaze Insight API listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing/logging
fn init_tracing(config: &ApiConfig) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
