//! Error type for grid composition.

use thiserror::Error;

use crate::encode::EncodeError;
use crate::join::JoinError;

/// Errors that can occur while composing a grid.
#[derive(Debug, Error)]
pub enum GridError {
    /// The number of inputs does not map to a supported grid.
    #[error("Unsupported image count {count}: expected 1, 4 or 9 images")]
    UnsupportedCount { count: usize },

    /// Joining one of the rows failed.
    #[error("Failed to join row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: JoinError,
    },

    /// Stacking the finished rows failed.
    #[error("Failed to stack rows: {0}")]
    Join(#[from] JoinError),

    /// Encoding a row or the final composite failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// A compose task panicked or was cancelled before producing a result.
    #[error("Compose task failed: {0}")]
    Task(String),
}

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;
