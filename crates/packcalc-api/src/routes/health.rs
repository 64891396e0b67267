//! # Operational Endpoints
//!
//! - `GET /api/v1/healthcheck` — liveness plus build version
//! - `GET /api/v1/metrics` — request counters

use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::middleware::metrics::{ApiMetrics, MetricsSnapshot};
use crate::state::AppState;

/// Healthcheck response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"available"` while the process serves requests.
    pub status: String,
    pub system_info: SystemInfo,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SystemInfo {
    pub version: String,
}

/// Build the operational router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/healthcheck", get(healthcheck))
        .route("/api/v1/metrics", get(metrics))
}

/// GET /api/v1/healthcheck — Report availability.
#[utoipa::path(
    get,
    path = "/api/v1/healthcheck",
    responses((status = 200, description = "Service available", body = HealthResponse)),
    tag = "operations"
)]
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "available".to_string(),
        system_info: SystemInfo {
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    })
}

/// GET /api/v1/metrics — Request counters since start.
#[utoipa::path(
    get,
    path = "/api/v1/metrics",
    responses((status = 200, description = "Counters", body = MetricsSnapshot)),
    tag = "operations"
)]
pub async fn metrics(Extension(metrics): Extension<ApiMetrics>) -> Json<MetricsSnapshot> {
    Json(metrics.snapshot())
}
