//! # Weekend
//!
//! A race weekend owned by a team, carrying the workflow position the
//! transition engine operates on. A fresh weekend always starts at
//! `(Practice, none)`; from there the only way its position moves is an
//! accepted [`TransitionOutcome`] applied through [`Weekend::apply`].

use chrono::{DateTime, Utc};

use crate::catalog::{Segment, Stage};
use crate::transition::TransitionOutcome;
use crate::types::{TeamId, WeekendId};

/// A race weekend and its current workflow position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weekend {
    id: WeekendId,
    team_id: TeamId,
    name: String,
    stage: Stage,
    segment: Option<Segment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Weekend {
    /// Create a weekend at the start of the workflow: Practice, no segment.
    #[must_use]
    pub fn new(id: WeekendId, team_id: TeamId, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            team_id,
            name,
            stage: Stage::Practice,
            segment: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> WeekendId {
        self.id
    }

    #[must_use]
    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn segment(&self) -> Option<Segment> {
        self.segment
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Apply an accepted transition outcome.
    ///
    /// Refreshes `updated_at` even when the resulting position equals the
    /// current one: an accepted request is recorded activity.
    pub fn apply(&mut self, outcome: &TransitionOutcome, now: DateTime<Utc>) {
        self.stage = outcome.stage;
        self.segment = outcome.segment;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::SegmentOutcome;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn fresh_weekend_starts_in_practice_with_no_segment() {
        let weekend = Weekend::new(WeekendId(7), TeamId(2), "Monaco GP".to_string(), at(9));

        assert_eq!(weekend.id(), WeekendId(7));
        assert_eq!(weekend.team_id(), TeamId(2));
        assert_eq!(weekend.name(), "Monaco GP");
        assert_eq!(weekend.stage(), Stage::Practice);
        assert_eq!(weekend.segment(), None);
        assert_eq!(weekend.created_at(), weekend.updated_at());
    }

    #[test]
    fn apply_moves_position_and_refreshes_updated_at() {
        let mut weekend = Weekend::new(WeekendId(1), TeamId(1), "Monza GP".to_string(), at(9));
        let outcome = TransitionOutcome {
            stage: Stage::Practice,
            segment: Some(Segment::P1),
            segment_outcome: SegmentOutcome::Applied,
        };

        weekend.apply(&outcome, at(10));

        assert_eq!(weekend.stage(), Stage::Practice);
        assert_eq!(weekend.segment(), Some(Segment::P1));
        assert_eq!(weekend.created_at(), at(9));
        assert_eq!(weekend.updated_at(), at(10));
    }

    #[test]
    fn apply_refreshes_updated_at_even_when_position_is_unchanged() {
        let mut weekend = Weekend::new(WeekendId(1), TeamId(1), "Suzuka GP".to_string(), at(9));
        let outcome = TransitionOutcome {
            stage: Stage::Practice,
            segment: None,
            segment_outcome: SegmentOutcome::Carried,
        };

        weekend.apply(&outcome, at(11));

        assert_eq!(weekend.stage(), Stage::Practice);
        assert_eq!(weekend.segment(), None);
        assert_eq!(weekend.updated_at(), at(11));
    }
}
