//! Shared database types for the job board
//!
//! This module provides common database-related types used across domain repositories.

use crate::error::Error;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A foreign key did not resolve; holds the constraint name
    #[error("Missing referenced record: {0}")]
    MissingReference(String),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found.".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::InvalidData(msg) => Error::Validation(msg),
            RepositoryError::MissingReference(constraint) => Error::Validation(format!(
                "Referenced record does not exist ({constraint})."
            )),
        }
    }
}

/// Classify a write error: constraint violations are caller mistakes,
/// everything else is a connection-level fault.
pub fn classify_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return RepositoryError::MissingReference(
                db_err.constraint().unwrap_or("foreign key").to_string(),
            );
        }
        if db_err.is_check_violation() {
            return RepositoryError::InvalidData(db_err.message().to_string());
        }
    }
    RepositoryError::Connection(err)
}
