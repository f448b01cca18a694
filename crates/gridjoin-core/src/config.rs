//! Compositor configuration.

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::encode::DEFAULT_JPEG_QUALITY;

/// Options controlling how a grid is joined and encoded.
///
/// Every field has a default, so a partial JSON object (or `{}`) is a
/// valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridOptions {
    /// JPEG quality for every encode step (1-100)
    pub jpeg_quality: u8,
    /// Canvas fill colour as `[r, g, b]`
    pub background: [u8; 3],
    /// Apply EXIF orientation to inputs before joining
    pub auto_orient: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            background: [0, 0, 0],
            auto_orient: false,
        }
    }
}

impl GridOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Quality clamped to the range the encoder accepts
    pub fn quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }

    /// Opaque canvas pixel for the background colour.
    pub fn background_rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.background;
        Rgba([r, g, b, 255])
    }
}
