//! # Error Envelope for Framework Responses
//!
//! Axum answers a known path called with the wrong method, and `TimeoutLayer`
//! answers a slow request, with an empty body. This middleware rewrites both
//! into the structured [`AppError`] body so every error a client sees has the
//! same shape. The `Allow` header of a 405 is kept.

use axum::extract::Request;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Middleware that puts empty 405 and 408 responses into the error envelope.
pub async fn envelope_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let response = next.run(request).await;

    match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            let allow = response.headers().get(header::ALLOW).cloned();
            let mut enveloped = AppError::MethodNotAllowed(method.to_string()).into_response();
            if let Some(allow) = allow {
                enveloped.headers_mut().insert(header::ALLOW, allow);
            }
            enveloped
        }
        StatusCode::REQUEST_TIMEOUT => AppError::Timeout.into_response(),
        _ => response,
    }
}
