//! Error kernel for the domain layer
//!
//! `AppError` is the closed business-failure payload returned by entities and
//! use-cases. Infrastructure failures from the ports have their own types and
//! never carry an `ErrorCode`.

mod app_error;
mod port_errors;

pub use app_error::{AppError, AppResult, ErrorCode};
pub use port_errors::{CredentialError, RepositoryError};
