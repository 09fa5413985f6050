//! Error types for Fitlog Core

use thiserror::Error;

/// Result type for table-store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised while talking to the table store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote store returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Unexpected response from remote store: {0}")]
    Decode(String),

    #[error("Could not encode record: {0}")]
    Encode(String),

    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}

/// Errors from parsing a workout timestamp
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("empty timestamp")]
    Empty,

    #[error("invalid datetime '{0}', expected an ISO 8601 date or datetime")]
    Invalid(String),
}
