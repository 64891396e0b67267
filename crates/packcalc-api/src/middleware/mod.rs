//! # Middleware Modules
//!
//! Tower middleware layers for the API service.

pub mod envelope;
pub mod metrics;
pub mod rate_limit;
pub mod tracing_layer;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer allowing exactly `origins`.
///
/// With no origins configured no CORS headers are emitted, so browsers keep
/// their same-origin default.
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.iter().cloned()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
