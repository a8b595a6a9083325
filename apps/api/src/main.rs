mod config;
mod errors;
mod generation;
mod llm_client;
mod manuscript;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; only malformed values abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Reader API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize upstream client
    let gemini = GeminiClient::from_config(&config)?;
    if gemini.has_credential() {
        info!("Gemini client initialized (model: {})", gemini.model());
    } else {
        warn!("GEMINI_API_KEY is not set; generation requests will fail until it is configured");
    }
    match config.upstream_timeout {
        Some(timeout) => info!("Upstream timeout: {}s", timeout.as_secs()),
        None => info!("Upstream timeout: none"),
    }

    let state = AppState::new(Arc::new(gemini), config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
