//! Codec error types.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors raised while reading, writing or acting on persisted state.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input is not valid JSON for the expected shape.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A state file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The packing layer rejected the decoded input.
    #[error(transparent)]
    Packing(#[from] shelfpack_core::Error),

    /// A record is well-formed JSON but cannot be mapped onto the model.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}
