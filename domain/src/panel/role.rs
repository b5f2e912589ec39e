//! Role entity - a fixed persona on the panel

use serde::{Deserialize, Serialize};

/// A fixed persona with immutable instructions (Entity)
///
/// Roles are process-wide constants: defined when the taxonomy is built,
/// never mutated afterwards. The `closer` flag marks the single role
/// whose final-position occurrence synthesizes the round's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    name: String,
    instructions: String,
    closer: bool,
}

impl Role {
    /// Create a regular panel role
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            closer: false,
        }
    }

    /// Create the closing/synthesis role
    pub fn closer(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            closer: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn is_closer(&self) -> bool {
        self.closer
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
