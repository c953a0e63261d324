//! Error handling utilities for repositories

use itemhub_core::error::RepositoryError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to RepositoryError
pub fn map_db_error(e: SqlxError) -> RepositoryError {
    RepositoryError::Database(e.to_string())
}

/// Surface unique violations as their own kind; anything else is a database error
pub fn map_unique_violation(e: SqlxError) -> RepositoryError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            return RepositoryError::UniqueViolation(constraint);
        }
    }
    map_db_error(e)
}
