//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! The only domain state is the [`SizeCatalog`]. It is created once from
//! [`AppConfig::pack_sizes`] and shared by every handler; clones of
//! [`AppState`] point at the same catalog.

use std::time::Duration;

use axum::http::HeaderValue;
use packcalc_core::{PackError, SizeCatalog, DEFAULT_PACK_SIZES};

use crate::middleware::rate_limit::RateLimitConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Sizes the catalog starts with. Validated when the state is built.
    pub pack_sizes: Vec<i64>,
    /// Per-client request limits.
    pub rate_limit: RateLimitConfig,
    /// Origins allowed by CORS. Empty means no cross-origin access.
    pub cors_origins: Vec<HeaderValue>,
    /// Where `GET /api/v1/docs` redirects to.
    pub docs_url: String,
    /// Longest a single request may run before it is answered with 408.
    pub request_timeout: Duration,
    /// How long shutdown waits for in-flight requests.
    pub shutdown_grace: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            pack_sizes: DEFAULT_PACK_SIZES.to_vec(),
            rate_limit: RateLimitConfig::default(),
            cors_origins: Vec::new(),
            docs_url: "/openapi.json".to_string(),
            request_timeout: Duration::from_secs(30),
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

/// Shared application state accessible to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: SizeCatalog,
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with the default configuration.
    pub fn new() -> Self {
        Self {
            catalog: SizeCatalog::default(),
            config: AppConfig::default(),
        }
    }

    /// Create application state, seeding the catalog from `config.pack_sizes`.
    pub fn with_config(config: AppConfig) -> Result<Self, PackError> {
        let catalog = SizeCatalog::new(&config.pack_sizes)?;
        Ok(Self { catalog, config })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
