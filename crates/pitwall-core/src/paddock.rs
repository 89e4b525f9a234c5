//! # Paddock Registry
//!
//! The in-memory home of all teams and weekends, and the single place
//! where accepted transitions are applied. The registry owns the id
//! sequences and the audit trail; timestamps are injected by the caller
//! so the registry itself stays deterministic and clock-free.
//!
//! Failed operations leave the registry untouched: validation runs before
//! any id is allocated, and a rejected transition never reaches
//! [`Weekend::apply`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::actor::Actor;
use crate::audit::AuditEvent;
use crate::team::Team;
use crate::transition::{self, TransitionRequest};
use crate::types::{AuditId, IdSequence, PitwallError, TeamId, WeekendId};
use crate::weekend::Weekend;

// =============================================================================
// APPLIED TRANSITION
// =============================================================================

/// The result of an applied transition: the updated weekend plus the
/// audit record describing what moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTransition {
    /// The weekend after the move.
    pub weekend: Weekend,
    /// The audit record, as appended to the trail.
    pub event: AuditEvent,
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Registry of teams, weekends, and the transitions applied to them.
#[derive(Debug, Clone, Default)]
pub struct Paddock {
    teams: BTreeMap<TeamId, Team>,
    weekends: BTreeMap<WeekendId, Weekend>,
    audit: Vec<AuditEvent>,
    team_ids: IdSequence,
    weekend_ids: IdSequence,
    audit_ids: IdSequence,
}

impl Paddock {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // TEAMS
    // -------------------------------------------------------------------------

    /// Create a team.
    ///
    /// The name is trimmed; a blank name is rejected, and so is a name
    /// already taken by another team when compared case-insensitively.
    pub fn create_team(&mut self, name: &str, now: DateTime<Utc>) -> Result<Team, PitwallError> {
        let name = required_name(name, "Team name is required")?;

        let folded = name.to_lowercase();
        if self.teams.values().any(|t| t.name().to_lowercase() == folded) {
            return Err(PitwallError::DuplicateTeam(name));
        }

        let team = Team::new(TeamId(self.team_ids.allocate()), name, now);
        self.teams.insert(team.id(), team.clone());
        Ok(team)
    }

    /// All teams, in creation (id) order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    /// Look up one team.
    pub fn team(&self, team_id: TeamId) -> Result<&Team, PitwallError> {
        self.teams
            .get(&team_id)
            .ok_or(PitwallError::TeamNotFound(team_id))
    }

    // -------------------------------------------------------------------------
    // WEEKENDS
    // -------------------------------------------------------------------------

    /// Create a weekend under a team.
    ///
    /// The name is trimmed and must be unused within that team; other
    /// teams may hold a weekend of the same name. Name validation runs
    /// before the team lookup, so a blank name reports as invalid input
    /// even when the team does not exist.
    pub fn create_weekend(
        &mut self,
        team_id: TeamId,
        name: &str,
        now: DateTime<Utc>,
    ) -> Result<Weekend, PitwallError> {
        let name = required_name(name, "Weekend name is required")?;

        if !self.teams.contains_key(&team_id) {
            return Err(PitwallError::TeamNotFound(team_id));
        }
        if self
            .weekends
            .values()
            .any(|w| w.team_id() == team_id && w.name() == name)
        {
            return Err(PitwallError::DuplicateWeekend(name));
        }

        let weekend = Weekend::new(WeekendId(self.weekend_ids.allocate()), team_id, name, now);
        self.weekends.insert(weekend.id(), weekend.clone());
        Ok(weekend)
    }

    /// All weekends belonging to a team, in creation (id) order.
    pub fn weekends_for(
        &self,
        team_id: TeamId,
    ) -> Result<impl Iterator<Item = &Weekend>, PitwallError> {
        if !self.teams.contains_key(&team_id) {
            return Err(PitwallError::TeamNotFound(team_id));
        }
        Ok(self
            .weekends
            .values()
            .filter(move |w| w.team_id() == team_id))
    }

    /// Look up one weekend under a team.
    ///
    /// A weekend that exists but belongs to a different team is reported
    /// as not found, not as someone else's.
    pub fn weekend(
        &self,
        team_id: TeamId,
        weekend_id: WeekendId,
    ) -> Result<&Weekend, PitwallError> {
        if !self.teams.contains_key(&team_id) {
            return Err(PitwallError::TeamNotFound(team_id));
        }
        self.weekends
            .get(&weekend_id)
            .filter(|w| w.team_id() == team_id)
            .ok_or(PitwallError::WeekendNotFound(weekend_id))
    }

    // -------------------------------------------------------------------------
    // TRANSITIONS
    // -------------------------------------------------------------------------

    /// Run a transition request through the engine and, if accepted,
    /// apply it and append an audit record.
    ///
    /// On rejection the weekend is untouched and nothing is recorded.
    pub fn transition_weekend(
        &mut self,
        team_id: TeamId,
        weekend_id: WeekendId,
        request: &TransitionRequest,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<AppliedTransition, PitwallError> {
        if !self.teams.contains_key(&team_id) {
            return Err(PitwallError::TeamNotFound(team_id));
        }
        let weekend = self
            .weekends
            .get_mut(&weekend_id)
            .filter(|w| w.team_id() == team_id)
            .ok_or(PitwallError::WeekendNotFound(weekend_id))?;

        let from_stage = weekend.stage();
        let from_segment = weekend.segment();
        let outcome = transition::decide(from_stage, from_segment, request, actor)?;

        weekend.apply(&outcome, now);
        let weekend = weekend.clone();

        let event = AuditEvent {
            id: AuditId(self.audit_ids.allocate()),
            team_id,
            weekend_id,
            actor_name: actor.name().to_string(),
            actor_role: actor.role(),
            from_stage,
            from_segment,
            to_stage: weekend.stage(),
            to_segment: weekend.segment(),
            segment_outcome: outcome.segment_outcome,
            recorded_at: now,
        };
        self.audit.push(event.clone());

        Ok(AppliedTransition { weekend, event })
    }

    /// The audit trail, oldest first.
    #[must_use]
    pub fn audit(&self) -> &[AuditEvent] {
        &self.audit
    }
}

/// Trim a submitted name, rejecting blank input with the given message.
fn required_name(raw: &str, missing: &'static str) -> Result<String, PitwallError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PitwallError::Validation(missing.to_string()));
    }
    Ok(trimmed.to_string())
}

// =============================================================================
// TESTS
// =============================================================================
