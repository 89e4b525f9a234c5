//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Resource bodies use camelCase field names and ISO 8601 timestamps.
//! Errors always travel in the same envelope:
//!
//! ```json
//! { "error": { "code": "NOT_FOUND", "message": "team 7 not found" } }
//! ```

use chrono::{DateTime, Utc};
use pitwall_core::{Segment, Stage, Team, Weekend};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// TEAM RESOURCE
// =============================================================================

/// A team as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamDto {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().0,
            name: team.name().to_string(),
            created_at: team.created_at(),
        }
    }
}

// =============================================================================
// WEEKEND RESOURCE
// =============================================================================

/// A weekend as it appears on the wire.
///
/// `segment` serializes as `null` whenever the weekend holds none, which
/// includes every weekend in Race or Review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendDto {
    pub id: u64,
    pub team_id: u64,
    pub name: String,
    pub stage: Stage,
    pub segment: Option<Segment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Weekend> for WeekendDto {
    fn from(weekend: &Weekend) -> Self {
        Self {
            id: weekend.id().0,
            team_id: weekend.team_id().0,
            name: weekend.name().to_string(),
            stage: weekend.stage(),
            segment: weekend.segment(),
            created_at: weekend.created_at(),
            updated_at: weekend.updated_at(),
        }
    }
}

// =============================================================================
// ERROR ENVELOPE
// =============================================================================

/// The `error` object inside the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Error envelope wrapping every non-2xx response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}
