//! # Pitwall HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET  /health` - Health check
//! - `POST /teams` - Create a team
//! - `GET  /teams` - List teams
//! - `GET  /teams/{teamId}` - Get one team
//! - `POST /teams/{teamId}/weekends` - Create a weekend
//! - `GET  /teams/{teamId}/weekends` - List a team's weekends
//! - `GET  /teams/{teamId}/weekends/{weekendId}` - Get one weekend
//! - `POST /teams/{teamId}/weekends/{weekendId}/transition` - Move a weekend
//!
//! ## Security Configuration (Environment Variables)
//!
//! - `PITWALL_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)
//! - `PITWALL_RATE_LIMIT`: Requests per second (default: 100, 0 to disable)

mod error;
mod handlers;
mod middleware;
mod types;

// Re-exports for external use
pub use error::ApiError;
// Re-export handlers and types for integration tests (via `pitwall::api::*`)
#[allow(unused_imports)]
pub use handlers::{
    create_team_handler, create_weekend_handler, get_team_handler, get_weekend_handler,
    health_handler, list_teams_handler, list_weekends_handler, transition_weekend_handler,
};
#[allow(unused_imports)]
pub use types::{ErrorBody, ErrorEnvelope, HealthResponse, TeamDto, WeekendDto};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use pitwall_core::Paddock;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state containing the paddock registry.
#[derive(Clone)]
pub struct AppState {
    /// The registry of teams, weekends, and audit history.
    pub paddock: Arc<RwLock<Paddock>>,
}

impl AppState {
    /// Create new app state around a registry.
    #[must_use]
    pub fn new(paddock: Paddock) -> Self {
        Self {
            paddock: Arc::new(RwLock::new(paddock)),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from `PITWALL_CORS_ORIGINS`.
///
/// A literal `*` admits every origin. Otherwise the variable is a
/// comma-separated origin list. Unset, or set to nothing parseable, the
/// layer admits the usual localhost development origins only.
fn build_cors_layer() -> CorsLayer {
    match std::env::var("PITWALL_CORS_ORIGINS").ok().as_deref() {
        Some("*") => {
            tracing::warn!("CORS: every origin admitted (PITWALL_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(list) => {
            let origins = parse_origin_list(list);
            if origins.is_empty() {
                tracing::warn!(
                    "CORS: no usable origin in PITWALL_CORS_ORIGINS, admitting localhost only"
                );
                localhost_cors()
            } else {
                restricted_cors(origins)
            }
        }
        None => {
            tracing::info!("CORS: PITWALL_CORS_ORIGINS not set, admitting localhost only");
            localhost_cors()
        }
    }
}

/// Parse a comma-separated origin list, dropping entries that are not
/// valid header values.
fn parse_origin_list(list: &str) -> Vec<HeaderValue> {
    list.split(',')
        .filter_map(|entry| {
            let trimmed = entry.trim();
            match trimmed.parse::<HeaderValue>() {
                Ok(origin) => {
                    tracing::info!("CORS: admitting origin {}", trimmed);
                    Some(origin)
                }
                Err(err) => {
                    tracing::warn!("CORS: skipping invalid origin {:?}: {}", trimmed, err);
                    None
                }
            }
        })
        .collect()
}

/// The development default: localhost on the common ports.
fn localhost_cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = [
        "http://localhost:3000",
        "http://localhost:8080",
        "http://127.0.0.1:3000",
        "http://127.0.0.1:8080",
    ]
    .into_iter()
    .filter_map(|origin| origin.parse().ok())
    .collect();
    restricted_cors(origins)
}

fn restricted_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit - caps request bodies at 2 MB
/// 4. Rate Limiting - protects against floods (if enabled)
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();
    let rate_limiter = middleware::rate_limiter_from_env();

    let mut router = Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/teams",
            get(handlers::list_teams_handler).post(handlers::create_team_handler),
        )
        .route("/teams/{team_id}", get(handlers::get_team_handler))
        .route(
            "/teams/{team_id}/weekends",
            get(handlers::list_weekends_handler).post(handlers::create_weekend_handler),
        )
        .route(
            "/teams/{team_id}/weekends/{weekend_id}",
            get(handlers::get_weekend_handler),
        )
        .route(
            "/teams/{team_id}/weekends/{weekend_id}/transition",
            post(handlers::transition_weekend_handler),
        );

    // Apply rate limiting middleware (innermost - runs last on request)
    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    // Apply CORS, body limit, and tracing (outermost layers)
    router
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, paddock: Paddock) -> Result<(), ApiError> {
    let state = AppState::new(paddock);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::Server(format!("Bind failed: {}", e)))?;

    tracing::info!("Pitwall HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| ApiError::Server(format!("Server error: {}", e)))
}
