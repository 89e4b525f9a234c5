//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Request bodies are taken as raw JSON values and validated by hand so
//! that every malformed input - wrong type, missing field, unknown label -
//! comes back as a 400 inside the standard error envelope rather than an
//! extractor rejection. Path ids are parsed the same way.

use super::{
    AppState,
    error::{ApiError, ApiResult},
    types::{HealthResponse, TeamDto, WeekendDto},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use pitwall_core::{
    Actor, PitwallError, Role, SegmentOutcome, SegmentRequest, Stage, TeamId, TransitionRequest,
    WeekendId,
};
use serde_json::Value as JsonValue;

// =============================================================================
// INPUT PARSING
// =============================================================================

/// Parse a path id, requiring a positive integer.
fn parse_id(raw: &str, what: &'static str) -> Result<u64, ApiError> {
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PitwallError::Validation(format!("{what} id must be a positive integer")).into()),
    }
}

/// Extract a string field from a JSON body.
///
/// A missing or non-string value reads as empty, which downstream name
/// validation rejects with its own message.
fn body_str<'a>(body: &'a JsonValue, field: &str) -> &'a str {
    body.get(field).and_then(JsonValue::as_str).unwrap_or("")
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// TEAM HANDLERS
// =============================================================================

/// Create a team.
pub async fn create_team_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> ApiResult<impl IntoResponse> {
    let mut paddock = state.paddock.write().await;
    let team = paddock.create_team(body_str(&body, "name"), Utc::now())?;
    Ok((StatusCode::CREATED, Json(TeamDto::from(&team))))
}

/// List all teams.
pub async fn list_teams_handler(State(state): State<AppState>) -> impl IntoResponse {
    let paddock = state.paddock.read().await;
    let teams: Vec<TeamDto> = paddock.teams().map(TeamDto::from).collect();
    (StatusCode::OK, Json(teams))
}

/// Get one team.
pub async fn get_team_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let team_id = TeamId(parse_id(&team_id, "Team")?);
    let paddock = state.paddock.read().await;
    let team = paddock.team(team_id)?;
    Ok((StatusCode::OK, Json(TeamDto::from(team))))
}

// =============================================================================
// WEEKEND HANDLERS
// =============================================================================

/// Create a weekend under a team.
pub async fn create_weekend_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(body): Json<JsonValue>,
) -> ApiResult<impl IntoResponse> {
    let team_id = TeamId(parse_id(&team_id, "Team")?);
    let mut paddock = state.paddock.write().await;
    let weekend = paddock.create_weekend(team_id, body_str(&body, "name"), Utc::now())?;
    Ok((StatusCode::CREATED, Json(WeekendDto::from(&weekend))))
}

/// List a team's weekends.
pub async fn list_weekends_handler(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let team_id = TeamId(parse_id(&team_id, "Team")?);
    let paddock = state.paddock.read().await;
    let weekends: Vec<WeekendDto> = paddock.weekends_for(team_id)?.map(WeekendDto::from).collect();
    Ok((StatusCode::OK, Json(weekends)))
}

/// Get one weekend.
pub async fn get_weekend_handler(
    State(state): State<AppState>,
    Path((team_id, weekend_id)): Path<(String, String)>,
) -> ApiResult<impl IntoResponse> {
    let team_id = TeamId(parse_id(&team_id, "Team")?);
    let weekend_id = WeekendId(parse_id(&weekend_id, "Weekend")?);
    let paddock = state.paddock.read().await;
    let weekend = paddock.weekend(team_id, weekend_id)?;
    Ok((StatusCode::OK, Json(WeekendDto::from(weekend))))
}

// =============================================================================
// TRANSITION HANDLER
// =============================================================================

/// Transition a weekend's workflow position.
///
/// Body: `{ "toStage": "...", "toSegment": "...", "actorName": "...",
/// "actorRole": "..." }` where `toSegment` may be omitted or `null`.
pub async fn transition_weekend_handler(
    State(state): State<AppState>,
    Path((team_id, weekend_id)): Path<(String, String)>,
    Json(body): Json<JsonValue>,
) -> ApiResult<impl IntoResponse> {
    let team_id = TeamId(parse_id(&team_id, "Team")?);
    let weekend_id = WeekendId(parse_id(&weekend_id, "Weekend")?);

    let stage_label = body
        .get("toStage")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| PitwallError::Validation("Target stage is required".to_string()))?;
    let stage = Stage::parse(stage_label)
        .ok_or_else(|| PitwallError::UnknownStage(stage_label.to_string()))?;

    // A JSON null reads the same as an omitted segment.
    let segment = match body.get("toSegment") {
        None | Some(JsonValue::Null) => SegmentRequest::Unchanged,
        Some(JsonValue::String(label)) => SegmentRequest::parse(Some(label.as_str()))?,
        Some(_) => {
            return Err(
                PitwallError::Validation("Target segment must be a string".to_string()).into(),
            );
        }
    };

    let role_label = body
        .get("actorRole")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| PitwallError::Validation("Actor role is required".to_string()))?;
    let role = Role::parse(role_label)
        .ok_or_else(|| PitwallError::Validation(format!("unknown actor role: {role_label}")))?;
    let actor = Actor::new(body_str(&body, "actorName"), role)?;

    let request = TransitionRequest { stage, segment };
    let mut paddock = state.paddock.write().await;
    let applied = paddock.transition_weekend(team_id, weekend_id, &request, &actor, Utc::now())?;

    if applied.event.segment_outcome == SegmentOutcome::Ignored {
        tracing::warn!(
            weekend_id = applied.weekend.id().0,
            stage = %applied.weekend.stage(),
            held_segment = ?applied.weekend.segment(),
            "segment request ignored; stage change committed"
        );
    } else if applied.event.is_no_op() {
        tracing::debug!(
            weekend_id = applied.weekend.id().0,
            "accepted transition changed nothing"
        );
    }

    Ok((StatusCode::CREATED, Json(WeekendDto::from(&applied.weekend))))
}
