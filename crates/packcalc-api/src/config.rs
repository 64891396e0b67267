//! # Command-Line & Environment Configuration
//!
//! Every setting can come from a flag or from the environment variable named
//! next to it; flags win. [`Cli::into_config`] validates everything that can
//! be checked before the server starts.

use std::time::Duration;

use axum::http::HeaderValue;
use clap::{Parser, ValueEnum};
use packcalc_core::{PackError, SizeCatalog, DEFAULT_PACK_SIZES};
use thiserror::Error;

use crate::middleware::rate_limit::RateLimitConfig;
use crate::state::AppConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// packcalc API server
///
/// Serves the pack-size catalog and pack plan computation over HTTP.
#[derive(Parser, Debug)]
#[command(name = "packcalc-api", version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Initial pack sizes, comma separated.
    #[arg(
        long,
        env = "PACK_SIZES",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_PACK_SIZES
    )]
    pub pack_sizes: Vec<i64>,

    /// Requests allowed per client per window. 0 disables rate limiting.
    #[arg(long, env = "RATE_LIMIT_REQUESTS", default_value_t = 1000)]
    pub rate_limit_requests: u64,

    /// Rate limit window length in seconds.
    #[arg(long, env = "RATE_LIMIT_WINDOW_SECS", default_value_t = 60)]
    pub rate_limit_window_secs: u64,

    /// Key rate limits on the first X-Forwarded-For hop. Only safe behind a
    /// proxy that sets that header.
    #[arg(long, env = "TRUST_FORWARDED_FOR")]
    pub trust_forwarded_for: bool,

    /// Seconds a request may take before it is answered with 408.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Seconds in-flight requests get to finish after a shutdown signal.
    #[arg(long, env = "SHUTDOWN_GRACE_SECS", default_value_t = 5)]
    pub shutdown_grace_secs: u64,

    /// Origin allowed to call the API cross-origin. Repeatable.
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Target of the documentation redirect.
    #[arg(long, env = "DOCS_URL", default_value = "/openapi.json")]
    pub docs_url: String,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Configuration rejected at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The initial pack sizes would not make a valid catalog.
    #[error("invalid pack sizes: {0}")]
    PackSizes(#[from] PackError),

    /// A CORS origin is not a valid header value.
    #[error("invalid CORS origin: {0:?}")]
    CorsOrigin(String),

    /// The rate limit window must be at least one second.
    #[error("rate limit window must be at least 1 second")]
    RateLimitWindow,

    /// The request timeout must be at least one second.
    #[error("request timeout must be at least 1 second")]
    RequestTimeout,
}

impl Cli {
    /// Validate the parsed arguments into an [`AppConfig`].
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        // Fail at startup rather than on first request.
        SizeCatalog::new(&self.pack_sizes)?;

        let cors_origins = self
            .cors_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| ConfigError::CorsOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.rate_limit_window_secs == 0 {
            return Err(ConfigError::RateLimitWindow);
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::RequestTimeout);
        }

        Ok(AppConfig {
            port: self.port,
            pack_sizes: self.pack_sizes,
            rate_limit: RateLimitConfig {
                max_requests: self.rate_limit_requests,
                window: Duration::from_secs(self.rate_limit_window_secs),
                trust_forwarded_for: self.trust_forwarded_for,
            },
            cors_origins,
            docs_url: self.docs_url,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            shutdown_grace: Duration::from_secs(self.shutdown_grace_secs),
        })
    }
}
