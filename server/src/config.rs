//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Base URL of the account API
    pub api_base_url: String,

    /// Private-cookie encryption key (128 hex chars = 64 bytes)
    pub cookie_key: String,

    /// Response cache TTL in seconds (default: 900 = 15 min)
    pub cache_ttl_secs: u64,

    /// Outbound HTTP timeout in seconds (default: 30)
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "https://api.eveonline.com".into()),
            cookie_key: env::var("COOKIE_KEY").context("COOKIE_KEY must be set")?,
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900), // 15 minutes
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Create a default configuration for testing.
    ///
    /// Tests that talk to a stub upstream override `api_base_url` with the
    /// stub's ephemeral address.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            api_base_url: "http://127.0.0.1:9".into(),
            cookie_key: "42".repeat(64),
            cache_ttl_secs: 900,
            http_timeout_secs: 5,
        }
    }
}
