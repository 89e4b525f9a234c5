//! # Middleware Module
//!
//! Request throttling for the Pitwall HTTP API.
//!
//! One process-wide limiter guards every route. The budget comes from
//! `PITWALL_RATE_LIMIT` (requests per second, default 100); setting it
//! to 0 disables throttling entirely. A throttled request is answered
//! with the same JSON error envelope the handlers speak.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;

use super::types::ErrorEnvelope;

/// Default rate limit: 100 requests per second.
const DEFAULT_RPS: NonZeroU32 = NonZeroU32::new(100).unwrap();

// =============================================================================
// RATE LIMITER
// =============================================================================

/// Process-wide rate limiter shared across all routes.
pub type GlobalRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Build a limiter with the given budget.
///
/// A zero budget is unusable and falls back to the default.
pub fn create_rate_limiter(requests_per_second: u32) -> GlobalRateLimiter {
    let rps = NonZeroU32::new(requests_per_second).unwrap_or(DEFAULT_RPS);
    Arc::new(RateLimiter::direct(Quota::per_second(rps)))
}

/// Read `PITWALL_RATE_LIMIT` and build the limiter it asks for.
///
/// Returns `None` when the variable is set to 0, which disables
/// throttling. Unset or unparsable values use the default budget.
pub fn rate_limiter_from_env() -> Option<GlobalRateLimiter> {
    let rps = std::env::var("PITWALL_RATE_LIMIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RPS.get());

    if rps == 0 {
        tracing::info!("Rate limiting disabled");
        return None;
    }
    tracing::info!("Rate limiting enabled: {} requests/second", rps);
    Some(create_rate_limiter(rps))
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Throttling middleware.
///
/// Requests over budget are answered with 429 and never reach a handler.
pub async fn rate_limit_middleware(
    State(limiter): State<GlobalRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if limiter.check().is_err() {
        tracing::warn!(path = %request.uri().path(), "request throttled");
        return throttled_response();
    }
    next.run(request).await
}

fn throttled_response() -> Response {
    let envelope = ErrorEnvelope::new("RATE_LIMITED", "Too many requests");
    (StatusCode::TOO_MANY_REQUESTS, axum::Json(envelope)).into_response()
}

// =============================================================================
// TESTS
// =============================================================================
