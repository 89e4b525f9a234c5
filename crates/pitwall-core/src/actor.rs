//! # Actors & Roles
//!
//! Who is asking for a transition. Every transition request names an actor;
//! only the lead engineer role may move a weekend through the workflow.
//! An actor with a blank name never reaches the engine at all — that is a
//! structural validation failure, distinct from the role check.

use crate::types::PitwallError;
use serde::{Deserialize, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// Pit-wall roles recognized by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// May request weekend transitions.
    LeadEngineer,
    /// May observe; transition requests are forbidden.
    Engineer,
}

impl Role {
    /// Get the canonical wire label for this role.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Role::LeadEngineer => "LEAD_ENGINEER",
            Role::Engineer => "ENGINEER",
        }
    }

    /// Parse a wire label into a role.
    #[must_use]
    pub fn parse(label: &str) -> Option<Role> {
        match label {
            "LEAD_ENGINEER" => Some(Role::LeadEngineer),
            "ENGINEER" => Some(Role::Engineer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// ACTOR
// =============================================================================

/// A named actor with a role, as supplied on a transition request.
///
/// Construction validates the name; an `Actor` in hand is always
/// structurally sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    name: String,
    role: Role,
}

impl Actor {
    /// Create an actor, trimming the name.
    ///
    /// Returns a validation error when the name trims to empty.
    pub fn new(name: &str, role: Role) -> Result<Actor, PitwallError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(PitwallError::Validation("Actor name is required".to_string()));
        }
        Ok(Self {
            name: trimmed.to_string(),
            role,
        })
    }

    /// Get the actor's trimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the actor's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Check whether this actor may request transitions.
    #[must_use]
    pub fn is_lead(&self) -> bool {
        matches!(self.role, Role::LeadEngineer)
    }
}

// =============================================================================
// TESTS
// =============================================================================
