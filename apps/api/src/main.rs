mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod report;
mod routes;
mod state;
mod zoning;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_directive(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting teian-api v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone(), config.llm_timeout_secs);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // The font is loaded per render so a late font install needs no restart,
    // but a missing file at startup is almost always a deployment mistake.
    if !std::path::Path::new(&config.font_path).exists() {
        warn!(
            "Report font '{}' not found — PDF downloads will fail until it is installed",
            config.font_path
        );
    }

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default EnvFilter directive when RUST_LOG is unset. Tracing targets use
/// the crate name with underscores, not the hyphenated package name.
fn default_log_directive(level: &str) -> String {
    format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
}
