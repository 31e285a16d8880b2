//! Application layer error types

use thiserror::Error;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Preconditions a screen checks before starting an operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No user has logged in during this session
    #[error("No user is logged in")]
    NotLoggedIn,

    /// No home has been opened during this session
    #[error("No home is selected")]
    NoHomeSelected,

    /// Input validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
