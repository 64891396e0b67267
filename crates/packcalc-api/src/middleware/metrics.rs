//! # Request Metrics
//!
//! In-process request counters, served as JSON at `GET /api/v1/metrics`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use parking_lot::Mutex;
use serde::Serialize;
use utoipa::ToSchema;

/// Shared metrics state.
#[derive(Debug, Clone)]
pub struct ApiMetrics {
    requests_received: Arc<AtomicU64>,
    responses_sent: Arc<AtomicU64>,
    error_responses: Arc<AtomicU64>,
    processing_time_us: Arc<AtomicU64>,
    responses_by_status: Arc<Mutex<BTreeMap<u16, u64>>>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetricsSnapshot {
    pub requests_received: u64,
    pub responses_sent: u64,
    /// Responses with a 4xx or 5xx status.
    pub error_responses: u64,
    /// Cumulative handler time in microseconds.
    pub processing_time_us: u64,
    pub responses_by_status: BTreeMap<u16, u64>,
}

impl ApiMetrics {
    /// Create a new metrics instance.
    pub fn new() -> Self {
        Self {
            requests_received: Arc::new(AtomicU64::new(0)),
            responses_sent: Arc::new(AtomicU64::new(0)),
            error_responses: Arc::new(AtomicU64::new(0)),
            processing_time_us: Arc::new(AtomicU64::new(0)),
            responses_by_status: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }

    fn record_response(&self, status: u16, elapsed_us: u64) {
        self.responses_sent.fetch_add(1, Ordering::Relaxed);
        self.processing_time_us.fetch_add(elapsed_us, Ordering::Relaxed);
        if status >= 400 {
            self.error_responses.fetch_add(1, Ordering::Relaxed);
        }
        *self.responses_by_status.lock().entry(status).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_received: self.requests_received.load(Ordering::Relaxed),
            responses_sent: self.responses_sent.load(Ordering::Relaxed),
            error_responses: self.error_responses.load(Ordering::Relaxed),
            processing_time_us: self.processing_time_us.load(Ordering::Relaxed),
            responses_by_status: self.responses_by_status.lock().clone(),
        }
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Middleware that counts requests, responses, and handler time.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();
    if let Some(m) = &metrics {
        m.requests_received.fetch_add(1, Ordering::Relaxed);
    }

    let started = Instant::now();
    let response = next.run(request).await;

    if let Some(m) = metrics {
        let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        m.record_response(response.status().as_u16(), elapsed_us);
    }

    response
}
