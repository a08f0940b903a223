//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A turn was constructed with a role outside `system`/`user`/`assistant`.
    ///
    /// Only reachable through untyped role strings; the typed constructors
    /// cannot produce it.
    #[error("Invalid role: {0:?} (expected system, user or assistant)")]
    InvalidRole(String),
}

impl DomainError {
    /// Check if this error is a role violation
    pub fn is_invalid_role(&self) -> bool {
        matches!(self, DomainError::InvalidRole(_))
    }
}
