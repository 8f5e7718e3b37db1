//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please provide a question")]
    EmptyQuestion,

    #[error("Invalid user: {0}")]
    InvalidUser(String),
}

impl DomainError {
    /// Whether this error comes from request validation (bad input).
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::EmptyQuestion | DomainError::InvalidUser(_))
    }
}
