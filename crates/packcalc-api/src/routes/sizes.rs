//! # Pack-Size Catalog API
//!
//! Operator maintenance of the shared pack-size catalog.
//!
//! ## Endpoints
//!
//! - `GET /api/v1/sizes` — list sizes, ascending
//! - `POST /api/v1/sizes` — add one size
//! - `PUT /api/v1/sizes` — replace the whole catalog
//! - `DELETE /api/v1/sizes/:size` — remove one size

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use packcalc_core::PackSize;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, require_positive, Validate};
use crate::state::AppState;

// ── Request/Response DTOs ───────────────────────────────────────────

/// Request to add a single pack size.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddSizeRequest {
    pub size: i64,
}

impl Validate for AddSizeRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_positive("size", self.size)
    }
}

/// Request to replace every pack size at once.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplaceSizesRequest {
    pub sizes: Vec<i64>,
}

impl Validate for ReplaceSizesRequest {
    fn validate(&self) -> Result<(), AppError> {
        // An empty list is the catalog's call (400), not a field error.
        self.sizes
            .iter()
            .try_for_each(|&size| require_positive("size", size))
    }
}

/// Current catalog contents.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListSizesResponse {
    #[schema(value_type = Vec<u64>)]
    pub sizes: Vec<PackSize>,
}

/// Catalog contents after a successful mutation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SortedSizesResponse {
    #[schema(value_type = Vec<u64>)]
    pub sorted_sizes: Vec<PackSize>,
}

// ── Router ──────────────────────────────────────────────────────────

/// Build the sizes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/sizes",
            get(list_sizes).post(add_size).put(replace_sizes),
        )
        .route("/api/v1/sizes/:size", delete(delete_size))
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /api/v1/sizes — List pack sizes.
#[utoipa::path(
    get,
    path = "/api/v1/sizes",
    responses(
        (status = 200, description = "Current sizes, ascending", body = ListSizesResponse),
    ),
    tag = "sizes"
)]
pub async fn list_sizes(State(state): State<AppState>) -> Json<ListSizesResponse> {
    Json(ListSizesResponse {
        sizes: state.catalog.list(),
    })
}

/// POST /api/v1/sizes — Add a pack size.
#[utoipa::path(
    post,
    path = "/api/v1/sizes",
    request_body = AddSizeRequest,
    responses(
        (status = 200, description = "Size added", body = SortedSizesResponse),
        (status = 400, description = "Size already exists", body = crate::error::ErrorBody),
        (status = 422, description = "Size is not positive", body = crate::error::ErrorBody),
    ),
    tag = "sizes"
)]
pub async fn add_size(
    State(state): State<AppState>,
    body: Result<Json<AddSizeRequest>, JsonRejection>,
) -> Result<Json<SortedSizesResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let sorted_sizes = state.catalog.add(req.size)?;
    tracing::info!(size = req.size, count = sorted_sizes.len(), "pack size added");
    Ok(Json(SortedSizesResponse { sorted_sizes }))
}

/// PUT /api/v1/sizes — Replace all pack sizes.
#[utoipa::path(
    put,
    path = "/api/v1/sizes",
    request_body = ReplaceSizesRequest,
    responses(
        (status = 200, description = "Catalog replaced", body = SortedSizesResponse),
        (status = 400, description = "Empty or duplicated sizes", body = crate::error::ErrorBody),
        (status = 422, description = "A size is not positive", body = crate::error::ErrorBody),
    ),
    tag = "sizes"
)]
pub async fn replace_sizes(
    State(state): State<AppState>,
    body: Result<Json<ReplaceSizesRequest>, JsonRejection>,
) -> Result<Json<SortedSizesResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let sorted_sizes = state.catalog.replace_all(&req.sizes)?;
    tracing::info!(count = sorted_sizes.len(), "pack sizes replaced");
    Ok(Json(SortedSizesResponse { sorted_sizes }))
}

/// DELETE /api/v1/sizes/:size — Remove a pack size.
#[utoipa::path(
    delete,
    path = "/api/v1/sizes/{size}",
    params(("size" = i64, Path, description = "Pack size to remove")),
    responses(
        (status = 200, description = "Size removed", body = SortedSizesResponse),
        (status = 404, description = "Size not in catalog", body = crate::error::ErrorBody),
        (status = 422, description = "Size is not positive", body = crate::error::ErrorBody),
    ),
    tag = "sizes"
)]
pub async fn delete_size(
    State(state): State<AppState>,
    size: Result<Path<i64>, PathRejection>,
) -> Result<Json<SortedSizesResponse>, AppError> {
    let Path(size) = size.map_err(|_| {
        AppError::NotFound("the requested resource could not be found".to_string())
    })?;
    require_positive("size", size)?;
    let sorted_sizes = state.catalog.delete(size)?;
    tracing::info!(size, count = sorted_sizes.len(), "pack size deleted");
    Ok(Json(SortedSizesResponse { sorted_sizes }))
}
