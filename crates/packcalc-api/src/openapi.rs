//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "packcalc API",
        description = "Pack-size catalog maintenance and pack plan computation.",
        license(name = "AGPL-3.0-or-later")
    ),
    paths(
        // Sizes
        crate::routes::sizes::list_sizes,
        crate::routes::sizes::add_size,
        crate::routes::sizes::replace_sizes,
        crate::routes::sizes::delete_size,
        // Packets
        crate::routes::packets::compute_packets,
        // Operations
        crate::routes::health::healthcheck,
        crate::routes::health::metrics,
        crate::routes::docs::docs,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::sizes::AddSizeRequest,
        crate::routes::sizes::ReplaceSizesRequest,
        crate::routes::sizes::ListSizesResponse,
        crate::routes::sizes::SortedSizesResponse,
        crate::routes::packets::ComputePacketsRequest,
        crate::routes::packets::ComputePacketsResponse,
        crate::routes::health::HealthResponse,
        crate::routes::health::SystemInfo,
        crate::middleware::metrics::MetricsSnapshot,
    )),
    tags(
        (name = "sizes", description = "Pack-size catalog"),
        (name = "packets", description = "Pack plan computation"),
        (name = "operations", description = "Health, metrics, and documentation"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
