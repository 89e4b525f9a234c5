//! # Team
//!
//! A racing team, the owner of weekends. Teams are created once and never
//! renamed; name normalization and uniqueness live in the
//! [`Paddock`](crate::paddock::Paddock), which hands this constructor an
//! already validated name.

use chrono::{DateTime, Utc};

use crate::types::TeamId;

/// A racing team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: TeamId,
    name: String,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Create a team with the given id and normalized name.
    #[must_use]
    pub fn new(id: TeamId, name: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
