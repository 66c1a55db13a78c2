//! Error types for shelf packing.

use thiserror::Error;

/// Result type alias for shelf packing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or resuming a packing session.
///
/// Running out of space is not an error: items that do not fit are reported
/// through the unplaced list of a [`PackingResult`](crate::PackingResult).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Shelf dimensions or count are not usable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An incremental session was resumed from a snapshot without shelves.
    #[error("State snapshot contains no shelves")]
    EmptyState,

    /// A submitted item has unusable dimensions.
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// A snapshot is structurally inconsistent.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
