//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid taxonomy configuration: {0}")]
    Configuration(String),

    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

impl DomainError {
    /// Build a configuration error from anything displayable
    pub fn configuration(msg: impl Into<String>) -> Self {
        DomainError::Configuration(msg.into())
    }
}
