//! # API Route Modules
//!
//! - `sizes` — pack-size catalog maintenance (list, add, replace, delete).
//! - `packets` — pack plan computation for an order quantity.
//! - `health` — healthcheck and request metrics.
//! - `docs` — redirect to the API documentation.

pub mod docs;
pub mod health;
pub mod packets;
pub mod sizes;

use crate::error::AppError;

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("the requested resource could not be found".to_string())
}
