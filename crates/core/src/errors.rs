//! Core error types for the Aqualog application.
//!
//! This module defines store-agnostic error types. Storage-specific errors
//! are converted to these types by the store layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the hydration tracker.
///
/// Store-specific errors are wrapped in string form to keep this type
/// storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for record store operations.
///
/// This enum uses `String` for all error details, allowing a store
/// implementation to convert its own errors into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A read of the current store snapshot failed.
    #[error("Store read failed: {0}")]
    ReadFailed(String),

    /// A write to the store failed.
    #[error("Store write failed: {0}")]
    WriteFailed(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
///
/// These fire before a write reaches the store; the aggregation engine never
/// sees out-of-range values.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Intake amount {amount_ml}ml is outside the accepted range [{min_ml}, {max_ml}]")]
    AmountOutOfRange {
        amount_ml: i32,
        min_ml: i32,
        max_ml: i32,
    },

    #[error("Daily goal {goal_ml}ml is outside the accepted range [{min_ml}, {max_ml}]")]
    GoalOutOfRange {
        goal_ml: i32,
        min_ml: i32,
        max_ml: i32,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
