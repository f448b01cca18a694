//! Types shared by the join operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::DecodeError;

/// Axis along which images are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Side by side, left to right.
    Horizontal,
    /// Stacked, top to bottom.
    Vertical,
}

/// Errors that can occur while joining images.
#[derive(Debug, Error)]
pub enum JoinError {
    /// The join was asked to combine nothing.
    #[error("No images to join")]
    NoImages,

    /// One of the input buffers could not be decoded.
    #[error("Failed to decode image {index}: {source}")]
    Decode {
        index: usize,
        #[source]
        source: DecodeError,
    },

    /// The joined canvas exceeds 32-bit dimensions or the pixel limit.
    #[error("Joined canvas exceeds the maximum image dimensions")]
    DimensionOverflow,
}
