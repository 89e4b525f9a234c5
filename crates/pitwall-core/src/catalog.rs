//! # Stage & Segment Catalog
//!
//! Static ordered enumerations of the race-weekend workflow:
//! - Stages: `Practice → Qualifying → Race → Review`
//! - Segments: `P1 → P2 → P3` within Practice, `Q1 → Q2 → Q3` within
//!   Qualifying; Race and Review carry no segment.
//!
//! The catalog answers two questions only: "is this label well-formed?"
//! (parsing) and "what segments does this stage hold, in what order?".
//! Whether a specific *move* between two states is legal is the transition
//! engine's concern, not the catalog's — a label can be well-formed yet
//! illegal for the transition requested.

use crate::types::PitwallError;
use serde::{Deserialize, Serialize};

// =============================================================================
// WIRE LABELS
// =============================================================================

/// Wire label requesting "no segment" on a transition.
///
/// Sent as the segment value when a weekend leaves its final Practice
/// segment without yet changing stage ("ready to leave Practice").
pub const CLEAR_SEGMENT_LABEL: &str = "NULL";

// =============================================================================
// STAGE
// =============================================================================

/// A top-level workflow stage, in canonical forward order.
///
/// The enum is closed: every transition rule matches exhaustively over
/// these four variants, so adding a stage forces a review of every rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Free practice, segmented P1 through P3.
    Practice,
    /// Qualifying, segmented Q1 through Q3.
    Qualifying,
    /// The race itself. No segments.
    Race,
    /// Post-race review. Terminal stage, no segments.
    Review,
}

impl Stage {
    /// All stages in canonical forward order.
    pub const ORDER: [Stage; 4] = [Stage::Practice, Stage::Qualifying, Stage::Race, Stage::Review];

    /// Get the canonical wire label for this stage.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Practice => "Practice",
            Stage::Qualifying => "Qualifying",
            Stage::Race => "Race",
            Stage::Review => "Review",
        }
    }

    /// Get this stage's position in the canonical order.
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Stage::Practice => 0,
            Stage::Qualifying => 1,
            Stage::Race => 2,
            Stage::Review => 3,
        }
    }

    /// Get the next stage in the canonical order, if any.
    #[must_use]
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::Practice => Some(Stage::Qualifying),
            Stage::Qualifying => Some(Stage::Race),
            Stage::Race => Some(Stage::Review),
            Stage::Review => None,
        }
    }

    /// Get the ordered segment list for this stage.
    ///
    /// Empty for Race and Review: those stages never carry a segment.
    #[must_use]
    pub fn segments(&self) -> &'static [Segment] {
        match self {
            Stage::Practice => &PRACTICE_SEGMENTS,
            Stage::Qualifying => &QUALIFYING_SEGMENTS,
            Stage::Race | Stage::Review => &[],
        }
    }

    /// Check whether this stage carries segments at all.
    #[must_use]
    pub fn holds_segments(&self) -> bool {
        matches!(self, Stage::Practice | Stage::Qualifying)
    }

    /// Parse a wire label into a stage.
    ///
    /// Returns `None` for anything that is not one of the four canonical
    /// labels. Labels are case-sensitive.
    #[must_use]
    pub fn parse(label: &str) -> Option<Stage> {
        Stage::ORDER.iter().copied().find(|s| s.name() == label)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// SEGMENT
// =============================================================================

/// Ordered segment list for the Practice stage.
pub const PRACTICE_SEGMENTS: [Segment; 3] = [Segment::P1, Segment::P2, Segment::P3];

/// Ordered segment list for the Qualifying stage.
pub const QUALIFYING_SEGMENTS: [Segment; 3] = [Segment::Q1, Segment::Q2, Segment::Q3];

/// A sub-state within a segmented stage.
///
/// The two families are independent orderings; P-segments never appear in
/// Qualifying and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Segment {
    P1,
    P2,
    P3,
    Q1,
    Q2,
    Q3,
}

impl Segment {
    /// Get the canonical wire label for this segment.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Segment::P1 => "P1",
            Segment::P2 => "P2",
            Segment::P3 => "P3",
            Segment::Q1 => "Q1",
            Segment::Q2 => "Q2",
            Segment::Q3 => "Q3",
        }
    }

    /// Get the family this segment belongs to.
    #[must_use]
    pub fn family(&self) -> SegmentFamily {
        match self {
            Segment::P1 | Segment::P2 | Segment::P3 => SegmentFamily::Practice,
            Segment::Q1 | Segment::Q2 | Segment::Q3 => SegmentFamily::Qualifying,
        }
    }

    /// Parse a wire label into a segment.
    ///
    /// Membership is checked against both families regardless of any
    /// current stage; context-dependent legality is the engine's job.
    #[must_use]
    pub fn parse(label: &str) -> Option<Segment> {
        PRACTICE_SEGMENTS
            .iter()
            .chain(QUALIFYING_SEGMENTS.iter())
            .copied()
            .find(|s| s.name() == label)
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The two independent segment orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SegmentFamily {
    Practice,
    Qualifying,
}

impl SegmentFamily {
    /// Get the ordered segment list for this family.
    #[must_use]
    pub fn ordered(&self) -> &'static [Segment] {
        match self {
            SegmentFamily::Practice => &PRACTICE_SEGMENTS,
            SegmentFamily::Qualifying => &QUALIFYING_SEGMENTS,
        }
    }
}

// =============================================================================
// SEGMENT REQUEST
// =============================================================================

/// How a transition request addresses the segment component.
///
/// An absent wire field means "leave the segment alone"; the
/// [`CLEAR_SEGMENT_LABEL`] marker means "drop the segment"; any other
/// well-formed label names a concrete target segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentRequest {
    /// No segment field supplied; keep the current segment.
    Unchanged,
    /// The clear marker; request a segment of none.
    Clear,
    /// A concrete target segment.
    To(Segment),
}

impl SegmentRequest {
    /// Parse an optional wire label into a segment request.
    ///
    /// Accepts an absent field, the clear marker, or a member of either
    /// segment family. Anything else is an unknown-segment error carrying
    /// the offending label.
    pub fn parse(label: Option<&str>) -> Result<SegmentRequest, PitwallError> {
        match label {
            None => Ok(SegmentRequest::Unchanged),
            Some(CLEAR_SEGMENT_LABEL) => Ok(SegmentRequest::Clear),
            Some(other) => Segment::parse(other)
                .map(SegmentRequest::To)
                .ok_or_else(|| PitwallError::UnknownSegment(other.to_string())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_order_is_canonical() {
        let labels: Vec<_> = Stage::ORDER.iter().map(|s| s.name()).collect();
        assert_eq!(labels, vec!["Practice", "Qualifying", "Race", "Review"]);
        for (i, stage) in Stage::ORDER.iter().enumerate() {
            assert_eq!(stage.position(), i);
        }
    }

    #[test]
    fn stage_next_walks_forward() {
        assert_eq!(Stage::Practice.next(), Some(Stage::Qualifying));
        assert_eq!(Stage::Qualifying.next(), Some(Stage::Race));
        assert_eq!(Stage::Race.next(), Some(Stage::Review));
        assert_eq!(Stage::Review.next(), None);
    }

    #[test]
    fn stage_parse_round_trips_labels() {
        for stage in Stage::ORDER {
            assert_eq!(Stage::parse(stage.name()), Some(stage));
        }
        assert_eq!(Stage::parse("NotAStage"), None);
        assert_eq!(Stage::parse("practice"), None);
    }

    #[test]
    fn segments_per_stage() {
        assert_eq!(Stage::Practice.segments(), &PRACTICE_SEGMENTS);
        assert_eq!(Stage::Qualifying.segments(), &QUALIFYING_SEGMENTS);
        assert!(Stage::Race.segments().is_empty());
        assert!(Stage::Review.segments().is_empty());
    }

    #[test]
    fn segment_parse_crosses_families() {
        assert_eq!(Segment::parse("P2"), Some(Segment::P2));
        assert_eq!(Segment::parse("Q3"), Some(Segment::Q3));
        assert_eq!(Segment::parse("P9"), None);
        assert_eq!(Segment::parse("q1"), None);
    }

    #[test]
    fn segment_families() {
        assert_eq!(Segment::P1.family(), SegmentFamily::Practice);
        assert_eq!(Segment::Q2.family(), SegmentFamily::Qualifying);
        assert_eq!(SegmentFamily::Practice.ordered(), &PRACTICE_SEGMENTS);
    }

    #[test]
    fn segment_request_parsing() {
        assert_eq!(
            SegmentRequest::parse(None).expect("absent is valid"),
            SegmentRequest::Unchanged
        );
        assert_eq!(
            SegmentRequest::parse(Some("NULL")).expect("marker is valid"),
            SegmentRequest::Clear
        );
        assert_eq!(
            SegmentRequest::parse(Some("Q1")).expect("Q1 is valid"),
            SegmentRequest::To(Segment::Q1)
        );
        assert!(matches!(
            SegmentRequest::parse(Some("P9")),
            Err(PitwallError::UnknownSegment(label)) if label == "P9"
        ));
    }

    #[test]
    fn serde_labels_match_wire_contract() {
        let json = serde_json::to_string(&Stage::Qualifying).expect("serialize");
        assert_eq!(json, "\"Qualifying\"");
        let json = serde_json::to_string(&Segment::P3).expect("serialize");
        assert_eq!(json, "\"P3\"");
        let stage: Stage = serde_json::from_str("\"Race\"").expect("deserialize");
        assert_eq!(stage, Stage::Race);
    }
}
