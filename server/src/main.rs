//! Keywatch Server - Main Entry Point
//!
//! Self-hosted web viewer for EVE Online API keys.

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use kw_server::{api, config, eveapi};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kw_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Keywatch Server"
    );

    // Construct the API client once and inject it through application state.
    // The cache handler is owned by the client; swapping the store means
    // swapping this constructor argument.
    let cache = Arc::new(eveapi::MemoryCache::new());
    let eve = eveapi::EveClient::new(&config, cache)?;
    info!(base_url = %config.api_base_url, "API client initialized");

    // Build application state
    let state = api::AppState::new(config.clone(), eve)?;

    // Build router
    let app = api::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(address = %config.bind_address, "Server listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
