//! # Transition Engine
//!
//! Pure decision logic for weekend workflow moves: given the current
//! `(stage, segment)` pair, a requested target, and the requesting actor,
//! decide legality and compute the resulting pair. No clock, no I/O, no
//! mutation — the registry applies an accepted outcome, the engine only
//! decides.
//!
//! ## Rule summary
//!
//! Stage moves walk the canonical order one step at a time. Two moves are
//! gated on the final segment of the stage being left: Qualifying may only
//! advance to Race from Q3, and Practice may only advance to Qualifying per
//! [`PRACTICE_EXIT_GATE`]. Same-stage "moves" are legal for the segmented
//! stages (they exist to advance the segment) and illegal for Race and
//! Review. Everything else — skips, backward moves, unmet gates — is
//! rejected.
//!
//! Segments advance one step within the resulting stage's family. A segment
//! that is absent or foreign to that family sits before the family's first
//! element, so entering Qualifying at Q1 (or starting Practice at P1) is one
//! step forward. The clear marker is legal only from P3. When the resulting
//! stage is Race or Review the segment is always forced to none.
//!
//! An illegal segment request riding a legal stage move does not reject the
//! transition: the stage commits and the segment stays as it was, surfaced
//! as [`SegmentOutcome::Ignored`]. Callers that want to treat this as a
//! failure can match on the outcome.

use crate::actor::Actor;
use crate::catalog::{Segment, SegmentRequest, Stage};
use crate::types::PitwallError;

// =============================================================================
// GATING POLICY
// =============================================================================

/// Gating policy for the Practice → Qualifying stage move.
///
/// The rule changed across revisions of the workflow; both variants stay
/// compiled so the active choice is a one-line, reviewable switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeExitGate {
    /// Any Practice state may advance to Qualifying.
    Open,
    /// Practice may advance only from its final segment (P3).
    AfterFinalSegment,
}

/// Active gate for Practice → Qualifying.
pub const PRACTICE_EXIT_GATE: PracticeExitGate = PracticeExitGate::AfterFinalSegment;

// =============================================================================
// REQUEST & OUTCOME
// =============================================================================

/// A parsed, structurally valid transition request.
///
/// Label parsing happens at the boundary (`Stage::parse`,
/// `SegmentRequest::parse`); by the time a request reaches the engine both
/// components are well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    /// The requested target stage.
    pub stage: Stage,
    /// How the request addresses the segment.
    pub segment: SegmentRequest,
}

/// What happened to the segment component of an accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOutcome {
    /// The requested segment move was legal and took effect.
    Applied,
    /// No segment was requested; the current segment rides along.
    Carried,
    /// The resulting stage holds no segments; the segment was forced to
    /// none regardless of the request.
    Stripped,
    /// The requested segment move was illegal; the stage change stands
    /// and the segment was left as it was.
    Ignored,
}

/// The computed result of an accepted transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionOutcome {
    /// The resulting stage.
    pub stage: Stage,
    /// The resulting segment.
    pub segment: Option<Segment>,
    /// What happened to the segment component.
    pub segment_outcome: SegmentOutcome,
}

// =============================================================================
// DECISION
// =============================================================================

/// Decide a transition request.
///
/// Evaluation order: actor authorization, then stage legality, then segment
/// resolution against the resulting stage. Rejections name their specific
/// reason; an `Ok` outcome is ready to be applied by the caller.
pub fn decide(
    current_stage: Stage,
    current_segment: Option<Segment>,
    request: &TransitionRequest,
    actor: &Actor,
) -> Result<TransitionOutcome, PitwallError> {
    if !actor.is_lead() {
        return Err(PitwallError::NotAuthorized(actor.role()));
    }

    if !stage_move_allowed(current_stage, request.stage, current_segment) {
        return Err(PitwallError::TransitionNotAllowed {
            from: current_stage,
            to: request.stage,
        });
    }

    let (segment, segment_outcome) =
        resolve_segment(request.stage, current_segment, request.segment);

    Ok(TransitionOutcome {
        stage: request.stage,
        segment,
        segment_outcome,
    })
}

/// Stage-move legality, enumerated pair by pair.
///
/// Every `(from, to)` combination is written out so that a new stage
/// variant fails to compile until each rule here has been revisited.
fn stage_move_allowed(from: Stage, to: Stage, segment: Option<Segment>) -> bool {
    match (from, to) {
        // Same-stage moves exist to advance a segment.
        (Stage::Practice, Stage::Practice) | (Stage::Qualifying, Stage::Qualifying) => true,

        // Gated forward moves.
        (Stage::Practice, Stage::Qualifying) => match PRACTICE_EXIT_GATE {
            PracticeExitGate::Open => true,
            PracticeExitGate::AfterFinalSegment => segment == Some(Segment::P3),
        },
        (Stage::Qualifying, Stage::Race) => segment == Some(Segment::Q3),

        // Ungated forward move.
        (Stage::Race, Stage::Review) => true,

        // Skips, backward moves, and same-stage moves for the
        // segment-free stages.
        (Stage::Practice, Stage::Race | Stage::Review)
        | (Stage::Qualifying, Stage::Practice | Stage::Review)
        | (Stage::Race, Stage::Practice | Stage::Qualifying | Stage::Race)
        | (Stage::Review, Stage::Practice | Stage::Qualifying | Stage::Race | Stage::Review) => {
            false
        }
    }
}

/// Resolve the segment component against the resulting stage.
fn resolve_segment(
    resulting_stage: Stage,
    current: Option<Segment>,
    request: SegmentRequest,
) -> (Option<Segment>, SegmentOutcome) {
    if !resulting_stage.holds_segments() {
        return (None, SegmentOutcome::Stripped);
    }

    match request {
        SegmentRequest::Unchanged => (current, SegmentOutcome::Carried),

        // The clear marker means "done with Practice": legal only from P3.
        SegmentRequest::Clear => {
            if current == Some(Segment::P3) {
                (None, SegmentOutcome::Applied)
            } else {
                (current, SegmentOutcome::Ignored)
            }
        }

        SegmentRequest::To(target) => {
            if is_next_in_family(resulting_stage, current, target) {
                (Some(target), SegmentOutcome::Applied)
            } else {
                (current, SegmentOutcome::Ignored)
            }
        }
    }
}

/// Check that `target` occupies the position immediately after `current`
/// within the resulting stage's ordered family.
///
/// A current segment that is absent, or that belongs to the other family,
/// has no position here and sits before the first element — which makes
/// the family's first segment the one legal target. That is how a fresh
/// weekend enters P1 and how a P3 weekend enters Qualifying at Q1.
fn is_next_in_family(resulting_stage: Stage, current: Option<Segment>, target: Segment) -> bool {
    let family = resulting_stage.segments();
    let next_position = current
        .and_then(|seg| family.iter().position(|s| *s == seg))
        .map_or(0, |pos| pos + 1);

    family.get(next_position) == Some(&target)
}

// =============================================================================
// TESTS
// =============================================================================
