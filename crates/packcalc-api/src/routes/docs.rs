//! # Documentation Redirect
//!
//! - `GET /api/v1/docs` — 302 to the configured documentation URL

use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/docs", get(docs))
}

/// GET /api/v1/docs — Redirect to the API documentation.
#[utoipa::path(
    get,
    path = "/api/v1/docs",
    responses((status = 302, description = "Redirect to documentation")),
    tag = "operations"
)]
pub async fn docs(State(state): State<AppState>) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(&state.config.docs_url)
        .map_err(|e| AppError::Internal(format!("docs URL is not a valid header: {e}")))?;
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
