//! # Core Type Definitions
//!
//! Shared types for the Pitwall workflow engine:
//! - Entity identifiers (`TeamId`, `WeekendId`, `AuditId`)
//! - Id allocation (`IdSequence`)
//! - Error types (`PitwallError`, `ErrorCode`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Use saturating arithmetic for counters to prevent overflow

use crate::actor::Role;
use crate::catalog::Stage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// ENTITY IDENTIFIERS
// =============================================================================

/// Unique identifier for a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u64);

/// Unique identifier for a weekend within the registry.
///
/// Weekend ids are registry-global, not per-team; a weekend is still
/// addressed through its owning team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekendId(pub u64);

/// Unique identifier for a recorded audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AuditId(pub u64);

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for WeekendId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for AuditId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// ID SEQUENCE
// =============================================================================

/// Monotonic id allocator, owned by the registry and threaded into entity
/// constructors.
///
/// Ids start at 1 so that 0 stays free as an always-invalid value at the
/// API boundary. Allocation saturates instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Create a sequence starting at 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ERROR CODES
// =============================================================================

/// Transport-agnostic error codes carried alongside each error.
///
/// These are the stable machine-readable identifiers clients switch on;
/// human-readable messages may change freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Malformed or missing input fields.
    BadRequest,
    /// Referenced team or weekend does not exist.
    NotFound,
    /// Duplicate resource name.
    Duplicate,
    /// The workflow state machine rejected the move.
    InvalidTransition,
    /// Actor role lacks the permission to transition.
    Forbidden,
}

impl ErrorCode {
    /// Get the wire label for this code.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Duplicate => "DUPLICATE",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
            ErrorCode::Forbidden => "FORBIDDEN",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced by the Pitwall engine and registry.
///
/// - No silent failures
/// - Use `Result<T, PitwallError>` for fallible operations
/// - The core never panics; every rejection carries its specific reason
#[derive(Debug, Error)]
pub enum PitwallError {
    /// A structurally invalid input field (missing, empty, wrong shape).
    #[error("{0}")]
    Validation(String),

    /// The stage label is not one of the four canonical labels.
    #[error("unknown stage: {0}")]
    UnknownStage(String),

    /// The segment label is neither a family member nor the clear marker.
    #[error("unknown segment: {0}")]
    UnknownSegment(String),

    /// The referenced team does not exist.
    #[error("team {0} not found")]
    TeamNotFound(TeamId),

    /// The referenced weekend does not exist under the given team.
    #[error("weekend {0} not found")]
    WeekendNotFound(WeekendId),

    /// A team with the same name (case-insensitive) already exists.
    #[error("a team named {0:?} already exists")]
    DuplicateTeam(String),

    /// A weekend with the same name already exists for this team.
    #[error("a weekend named {0:?} already exists for this team")]
    DuplicateWeekend(String),

    /// The workflow state machine rejected the stage move.
    #[error("cannot transition from {from} to {to}")]
    TransitionNotAllowed { from: Stage, to: Stage },

    /// The actor's role may not request transitions.
    #[error("role {0} is not allowed to transition a weekend")]
    NotAuthorized(Role),
}

impl PitwallError {
    /// Get the transport-agnostic code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            PitwallError::Validation(_)
            | PitwallError::UnknownStage(_)
            | PitwallError::UnknownSegment(_) => ErrorCode::BadRequest,
            PitwallError::TeamNotFound(_) | PitwallError::WeekendNotFound(_) => ErrorCode::NotFound,
            PitwallError::DuplicateTeam(_) | PitwallError::DuplicateWeekend(_) => {
                ErrorCode::Duplicate
            }
            PitwallError::TransitionNotAllowed { .. } => ErrorCode::InvalidTransition,
            PitwallError::NotAuthorized(_) => ErrorCode::Forbidden,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
