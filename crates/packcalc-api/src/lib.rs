//! # packcalc-api — Axum API Service
//!
//! HTTP surface over the pack-size catalog and the packer in
//! `packcalc-core`. Handlers validate request shape and fields, delegate to
//! the core, and map [`PackError`](packcalc_core::PackError) to structured
//! responses via [`AppError`].
//!
//! ## API Surface
//!
//! | Route                          | Module                 |
//! |--------------------------------|------------------------|
//! | `GET/POST/PUT /api/v1/sizes`   | [`routes::sizes`]      |
//! | `DELETE /api/v1/sizes/:size`   | [`routes::sizes`]      |
//! | `POST /api/v1/packets`         | [`routes::packets`]    |
//! | `GET /api/v1/healthcheck`      | [`routes::health`]     |
//! | `GET /api/v1/metrics`          | [`routes::health`]     |
//! | `GET /api/v1/docs`             | [`routes::docs`]       |
//! | `GET /openapi.json`            | [`openapi`]            |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CatchPanic → Cors → TraceLayer → Metrics → RateLimit → Envelope → Timeout → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::{AppConfig, AppState};

use axum::middleware::from_fn;
use axum::{Extension, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::middleware::rate_limit::RateLimiter;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();
    let limiter = RateLimiter::new(state.config.rate_limit.clone());
    let cors = middleware::cors_layer(&state.config.cors_origins);

    Router::new()
        .merge(routes::sizes::router())
        .merge(routes::packets::router())
        .merge(routes::health::router())
        .merge(routes::docs::router())
        .merge(openapi::router())
        .fallback(routes::not_found)
        .layer(TimeoutLayer::new(state.config.request_timeout))
        .layer(from_fn(middleware::envelope::envelope_middleware))
        .layer(from_fn(middleware::rate_limit::rate_limit_middleware))
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(Extension(metrics))
        .layer(Extension(limiter))
        .layer(cors)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}
