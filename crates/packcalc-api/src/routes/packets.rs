//! # Pack Plan API
//!
//! - `POST /api/v1/packets` — compute the packs for an order

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use packcalc_core::{packer, PackPlan};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, require_positive, Validate};
use crate::state::AppState;

/// Request to pack an order.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ComputePacketsRequest {
    /// Number of items ordered.
    pub items: i64,
}

impl Validate for ComputePacketsRequest {
    fn validate(&self) -> Result<(), AppError> {
        require_positive("items", self.items)
    }
}

/// Packs to dispatch, keyed by size.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComputePacketsResponse {
    /// Object mapping pack size to pack count.
    #[schema(value_type = Object)]
    pub packets: PackPlan,
}

/// Build the packets router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/packets", post(compute_packets))
}

/// POST /api/v1/packets — Compute packs for an order.
#[utoipa::path(
    post,
    path = "/api/v1/packets",
    request_body = ComputePacketsRequest,
    responses(
        (status = 200, description = "Pack plan", body = ComputePacketsResponse),
        (status = 409, description = "Catalog has no sizes", body = crate::error::ErrorBody),
        (status = 422, description = "Items is not positive", body = crate::error::ErrorBody),
    ),
    tag = "packets"
)]
pub async fn compute_packets(
    State(state): State<AppState>,
    body: Result<Json<ComputePacketsRequest>, JsonRejection>,
) -> Result<Json<ComputePacketsResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let sizes = state.catalog.list();
    let packets = packer::compute(req.items, &sizes)?;
    tracing::debug!(
        items = req.items,
        packs = packets.total_packs(),
        shipped = packets.total_items(),
        "pack plan computed"
    );
    Ok(Json(ComputePacketsResponse { packets }))
}
