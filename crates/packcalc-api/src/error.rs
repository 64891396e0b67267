//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps [`PackError`] from packcalc-core to HTTP status codes and returns
//! JSON error bodies with error code, message, and optional field details.
//! Internal error details are never exposed in responses.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use packcalc_core::PackError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-level messages, present only for validation errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// A request field failed validation (422).
    #[error("validation error: {field} {message}")]
    Validation {
        /// Name of the offending request field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },

    /// Request body could not be parsed or was rejected by the catalog (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The request conflicts with the current catalog state (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The path exists but not for this HTTP method (405).
    #[error("the {0} method is not supported for this resource")]
    MethodNotAllowed(String),

    /// The request did not finish within the configured timeout (408).
    #[error("the request took too long to process")]
    Timeout,

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Validation { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            Self::MethodNotAllowed(_) => (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED"),
            Self::Timeout => (StatusCode::REQUEST_TIMEOUT, "REQUEST_TIMEOUT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "the server encountered a problem and could not process your request"
                .to_string(),
            other => other.to_string(),
        };

        let details = match &self {
            Self::Validation { field, message } => {
                let mut fields = serde_json::Map::new();
                fields.insert(field.to_string(), message.clone().into());
                Some(serde_json::Value::Object(fields))
            }
            _ => None,
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert catalog and packer errors to API errors.
impl From<PackError> for AppError {
    fn from(err: PackError) -> Self {
        match err {
            PackError::InvalidSize(value) => Self::Validation {
                field: "size",
                message: format!("must be a positive number, got {value}"),
            },
            PackError::InvalidQuantity(value) => Self::Validation {
                field: "items",
                message: format!("must be a positive number, got {value}"),
            },
            PackError::DuplicateSize(_) | PackError::EmptyInput => {
                Self::BadRequest(err.to_string())
            }
            PackError::NotFound(_) => Self::NotFound(err.to_string()),
            PackError::EmptyCatalog => Self::Conflict(err.to_string()),
        }
    }
}

/// Response for a handler that panicked. Used by `CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_one_status_and_code() {
        let cases = [
            (AppError::NotFound("size 7".into()), 404, "NOT_FOUND"),
            (
                AppError::Validation {
                    field: "size",
                    message: "must be a positive number".into(),
                },
                422,
                "VALIDATION_ERROR",
            ),
            (AppError::BadRequest("malformed JSON".into()), 400, "BAD_REQUEST"),
            (AppError::Conflict("empty".into()), 409, "CONFLICT"),
            (AppError::MethodNotAllowed("PATCH".into()), 405, "METHOD_NOT_ALLOWED"),
            (AppError::Timeout, 408, "REQUEST_TIMEOUT"),
            (AppError::Internal("boom".into()), 500, "INTERNAL_ERROR"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_and_code(), (StatusCode::from_u16(status).unwrap(), code));
        }
    }

    #[test]
    fn pack_errors_map_to_expected_statuses() {
        let cases = [
            (PackError::InvalidSize(0), StatusCode::UNPROCESSABLE_ENTITY),
            (PackError::InvalidQuantity(-5), StatusCode::UNPROCESSABLE_ENTITY),
            (PackError::DuplicateSize(500), StatusCode::BAD_REQUEST),
            (PackError::EmptyInput, StatusCode::BAD_REQUEST),
            (PackError::NotFound(7), StatusCode::NOT_FOUND),
            (PackError::EmptyCatalog, StatusCode::CONFLICT),
        ];
        for (err, expected) in cases {
            let (status, _) = AppError::from(err.clone()).status_and_code();
            assert_eq!(status, expected, "for {err:?}");
        }
    }

    #[test]
    fn invalid_quantity_names_items_field() {
        match AppError::from(PackError::InvalidQuantity(0)) {
            AppError::Validation { field, .. } => assert_eq!(field, "items"),
            other => panic!("expected Validation, got: {other:?}"),
        }
    }

    // ── into_response tests ──────────────────────────────────────

    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_validation_carries_field_details() {
        let (status, body) = response_parts(AppError::from(PackError::InvalidSize(-1))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        let details = body.error.details.unwrap();
        assert!(details["size"].as_str().unwrap().contains("positive"));
    }

    #[tokio::test]
    async fn into_response_bad_request_has_no_details() {
        let (status, body) = response_parts(AppError::from(PackError::DuplicateSize(500))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.message.contains("500"));
        assert!(body.error.details.is_none());
    }

    #[tokio::test]
    async fn into_response_internal_hides_details() {
        let (status, body) = response_parts(AppError::Internal("lock exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(
            !body.error.message.contains("lock exploded"),
            "internal error details must not leak: {}",
            body.error.message
        );
    }

    #[tokio::test]
    async fn panic_response_is_structured_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "INTERNAL_ERROR");
        assert!(!body.error.message.contains("boom"));
    }
}
