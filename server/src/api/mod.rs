//! Application State and Router
//!
//! Central routing configuration and shared state.

use std::sync::Arc;

use anyhow::Context;
use axum::extract::FromRef;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::cookie::Key;
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::config::Config;
use crate::eveapi::EveClient;
use crate::pages;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<Config>,
    /// Account API client (service-level; credential-bound sessions are
    /// minted per request)
    pub eve: EveClient,
    /// Private-cookie encryption key
    cookie_key: Key,
}

impl AppState {
    /// Create new application state.
    ///
    /// Fails when the configured cookie key does not decode to exactly
    /// 64 bytes.
    pub fn new(config: Config, eve: EveClient) -> anyhow::Result<Self> {
        let key_bytes = hex::decode(&config.cookie_key).context("COOKIE_KEY must be hex")?;
        anyhow::ensure!(
            key_bytes.len() == 64,
            "COOKIE_KEY must decode to exactly 64 bytes"
        );

        Ok(Self {
            config: Arc::new(config),
            eve,
            cookie_key: Key::from(&key_bytes),
        })
    }
}

// The private cookie jar extractor pulls its key out of application state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Portal pages
        .merge(pages::router())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        // State
        .with_state(state)
}

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    /// Service status
    status: &'static str,
}

/// Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
