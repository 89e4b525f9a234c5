//! # pitwall-core
//!
//! The deterministic race-weekend workflow engine for Pitwall - THE LOGIC.
//!
//! This crate implements the workflow substrate: the stage/segment catalog,
//! the transition rules between positions, and the in-memory paddock
//! registry that teams and weekends live in.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where workflow state exists (stateful)
//! - Is closed: stages, segments, and roles are closed enums, every rule
//!   an exhaustive match
//! - Is deterministic: ids come from injected sequences, timestamps from
//!   the caller; nothing here reads a clock or rolls dice
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod actor;
pub mod audit;
pub mod catalog;
pub mod paddock;
pub mod team;
pub mod transition;
pub mod types;
pub mod weekend;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{AuditId, ErrorCode, IdSequence, PitwallError, TeamId, WeekendId};

// =============================================================================
// RE-EXPORTS: Workflow Catalog
// =============================================================================

pub use catalog::{
    CLEAR_SEGMENT_LABEL, PRACTICE_SEGMENTS, QUALIFYING_SEGMENTS, Segment, SegmentFamily,
    SegmentRequest, Stage,
};

// =============================================================================
// RE-EXPORTS: Transition Engine
// =============================================================================

pub use transition::{
    PRACTICE_EXIT_GATE, PracticeExitGate, SegmentOutcome, TransitionOutcome, TransitionRequest,
    decide,
};

// =============================================================================
// RE-EXPORTS: Paddock Registry
// =============================================================================

pub use actor::{Actor, Role};
pub use audit::AuditEvent;
pub use paddock::{AppliedTransition, Paddock};
pub use team::Team;
pub use weekend::Weekend;
