//! Service layer error types
//!
//! A use-case fails either with a business outcome (`App`), which the caller
//! shows to the client as-is, or with an infrastructure failure, which the
//! caller logs and reports as a generic internal error.

use itemhub_core::{AppError, CredentialError, ErrorCode, RepositoryError};

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Business failure, passed through unchanged
    #[error(transparent)]
    App(#[from] AppError),

    /// Storage outage, hashing or signing failure
    #[error("Infrastructure error: {0:#}")]
    Infrastructure(anyhow::Error),
}

impl ServiceError {
    /// Wrap an unexpected failure
    pub fn infrastructure(err: impl Into<anyhow::Error>) -> Self {
        Self::Infrastructure(err.into())
    }

    /// The code the client will see
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::App(e) => e.code(),
            Self::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.code().http_status()
    }

    /// The business error, if this is one
    pub fn as_app(&self) -> Option<&AppError> {
        match self {
            Self::App(e) => Some(e),
            Self::Infrastructure(_) => None,
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        Self::Infrastructure(err.into())
    }
}

impl From<CredentialError> for ServiceError {
    fn from(err: CredentialError) -> Self {
        Self::Infrastructure(err.into())
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
