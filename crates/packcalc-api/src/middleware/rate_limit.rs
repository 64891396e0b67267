//! # Per-Client Rate Limiting
//!
//! Fixed-window request counter keyed by client. The client is the peer IP
//! address from [`ConnectInfo`]. The first hop of `X-Forwarded-For` replaces
//! it only when [`RateLimitConfig::trust_forwarded_for`] is set, i.e. when
//! the service runs behind a proxy that overwrites that header. Requests with
//! neither share the `"anonymous"` bucket.
//!
//! Buckets whose window has closed are swept at most once per window, so the
//! table holds only clients seen during the last two windows.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use parking_lot::Mutex;

use crate::error::{ErrorBody, ErrorDetail};

/// Rate limiter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    /// Maximum requests per window. Zero disables limiting.
    pub max_requests: u64,
    /// Window length.
    pub window: Duration,
    /// Key clients by `X-Forwarded-For` instead of the peer address.
    pub trust_forwarded_for: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 1000,
            window: Duration::from_secs(60),
            trust_forwarded_for: false,
        }
    }
}

#[derive(Debug, Clone)]
struct BucketState {
    count: u64,
    window_start: Instant,
}

#[derive(Debug)]
struct Buckets {
    by_client: HashMap<String, BucketState>,
    last_sweep: Instant,
}

/// Shared rate limiter state.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    config: RateLimitConfig,
    buckets: Arc<Mutex<Buckets>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the given config.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            buckets: Arc::new(Mutex::new(Buckets {
                by_client: HashMap::new(),
                last_sweep: Instant::now(),
            })),
        }
    }

    /// Record one request from `key` at `now`; false when over the limit.
    fn check_at(&self, key: &str, now: Instant) -> bool {
        if self.config.max_requests == 0 {
            return true;
        }
        let window = self.config.window;

        let mut buckets = self.buckets.lock();
        if now.duration_since(buckets.last_sweep) >= window {
            buckets
                .by_client
                .retain(|_, bucket| now.duration_since(bucket.window_start) < window);
            buckets.last_sweep = now;
        }

        let bucket = buckets
            .by_client
            .entry(key.to_string())
            .or_insert(BucketState {
                count: 0,
                window_start: now,
            });

        if now.duration_since(bucket.window_start) >= window {
            bucket.count = 0;
            bucket.window_start = now;
        }

        if bucket.count >= self.config.max_requests {
            false
        } else {
            bucket.count += 1;
            true
        }
    }

    fn check(&self, key: &str) -> bool {
        self.check_at(key, Instant::now())
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.buckets.lock().by_client.len()
    }
}

fn forwarded_client(request: &Request) -> Option<String> {
    request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn client_key(request: &Request, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        if let Some(client) = forwarded_client(request) {
            return client;
        }
    }
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Middleware that enforces per-client rate limits.
pub async fn rate_limit_middleware(request: Request, next: Next) -> Response {
    let limiter = request.extensions().get::<RateLimiter>().cloned();

    if let Some(limiter) = limiter {
        let key = client_key(&request, limiter.config.trust_forwarded_for);
        if !limiter.check(&key) {
            tracing::warn!(client = %key, "rate limit exceeded");
            let body = ErrorBody {
                error: ErrorDetail {
                    code: "RATE_LIMITED".to_string(),
                    message: "rate limit exceeded".to_string(),
                    details: None,
                },
            };
            return (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
        }
    }

    next.run(request).await
}
