//! # Audit Trail
//!
//! A record of every accepted transition: who moved which weekend, from
//! where to where, and when. Rejected requests leave no trace here; they
//! never changed anything.

use chrono::{DateTime, Utc};

use crate::actor::Role;
use crate::catalog::{Segment, Stage};
use crate::transition::SegmentOutcome;
use crate::types::{AuditId, TeamId, WeekendId};

/// One accepted transition, as applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// Unique event id.
    pub id: AuditId,
    /// Team owning the weekend.
    pub team_id: TeamId,
    /// The weekend that moved.
    pub weekend_id: WeekendId,
    /// Name of the actor who requested the move.
    pub actor_name: String,
    /// Role the actor held.
    pub actor_role: Role,
    /// Stage before the move.
    pub from_stage: Stage,
    /// Segment before the move.
    pub from_segment: Option<Segment>,
    /// Stage after the move.
    pub to_stage: Stage,
    /// Segment after the move.
    pub to_segment: Option<Segment>,
    /// What happened to the segment component.
    pub segment_outcome: SegmentOutcome,
    /// When the move was applied.
    pub recorded_at: DateTime<Utc>,
}

impl AuditEvent {
    /// True when the applied move changed neither stage nor segment.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.from_stage == self.to_stage && self.from_segment == self.to_segment
    }
}
