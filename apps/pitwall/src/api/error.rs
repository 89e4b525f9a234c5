//! # API Error Handling
//!
//! Application-level error type for the HTTP layer. Wraps the core
//! workflow error and maps its transport-agnostic code to an HTTP status
//! and the JSON error envelope; adds the few variants the server itself
//! can produce outside a request.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pitwall_core::{ErrorCode, PitwallError};
use thiserror::Error;

use super::types::ErrorEnvelope;

/// Application-level error for HTTP handlers and server startup.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A workflow or registry rejection from the core.
    #[error(transparent)]
    Workflow(#[from] PitwallError),

    /// Listener or serve failure.
    #[error("server error: {0}")]
    Server(String),

    /// Configuration file failure.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

/// Map a core error code to its HTTP status.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Duplicate | ErrorCode::InvalidTransition => StatusCode::CONFLICT,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Workflow(err) => {
                let code = err.code();
                let envelope = ErrorEnvelope::new(code.as_str(), err.to_string());
                (status_for(code), axum::Json(envelope)).into_response()
            }
            ApiError::Server(msg) | ApiError::Config(msg) => {
                tracing::error!(error = %msg, "internal error");
                let envelope = ErrorEnvelope::new("INTERNAL", "An internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(envelope)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitwall_core::{Role, Stage, TeamId};

    fn respond(err: PitwallError) -> Response {
        ApiError::from(err).into_response()
    }

    #[test]
    fn workflow_errors_map_to_contract_statuses() {
        let cases = [
            (
                respond(PitwallError::Validation("Team name is required".into())),
                StatusCode::BAD_REQUEST,
            ),
            (
                respond(PitwallError::TeamNotFound(TeamId(7))),
                StatusCode::NOT_FOUND,
            ),
            (
                respond(PitwallError::DuplicateTeam("Ferrari".into())),
                StatusCode::CONFLICT,
            ),
            (
                respond(PitwallError::TransitionNotAllowed {
                    from: Stage::Practice,
                    to: Stage::Race,
                }),
                StatusCode::CONFLICT,
            ),
            (
                respond(PitwallError::NotAuthorized(Role::Engineer)),
                StatusCode::FORBIDDEN,
            ),
        ];
        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn server_errors_are_sanitized_500s() {
        let response = ApiError::Server("bind failed".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
