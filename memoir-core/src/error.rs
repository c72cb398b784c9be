//! Error types for the memoir ecosystem.

use thiserror::Error;

use crate::event::ValidationError;

/// Errors that can occur in memoir operations.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event: {0}")]
    Validation(#[from] ValidationError),

    #[error("Photo error: {0}")]
    Photo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for memoir operations.
pub type JournalResult<T> = Result<T, JournalError>;
