//! Errors raised by the storage and credential ports
//!
//! These describe infrastructure failures, not business outcomes. Use-cases
//! either translate a specific case into an `AppError` or let it surface as
//! an internal failure.

use thiserror::Error;

/// Storage adapter errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(String),

    /// A uniqueness constraint rejected the write
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

/// Password hashing and token signing errors
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Token signing failed: {0}")]
    Signing(String),

    #[error("Token expired")]
    Expired,

    #[error("Invalid token")]
    InvalidToken,
}

impl CredentialError {
    /// Whether the failure is the caller's token rather than our machinery
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Expired | Self::InvalidToken)
    }
}
