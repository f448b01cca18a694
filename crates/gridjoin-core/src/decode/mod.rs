//! Image decoding for the grid compositor.
//!
//! This module provides functionality for:
//! - Sniffing and decoding encoded image buffers (JPEG, PNG)
//! - Reading EXIF orientation and optionally correcting for it
//!
//! Every decoded image is normalised to RGBA8 so the join step can
//! alpha-composite it onto the background canvas.
//!
//! # Examples
//!
//! ```ignore
//! use gridjoin_core::decode::decode_image;
//!
//! let png_bytes = std::fs::read("tile.png").unwrap();
//! let tile = decode_image(&png_bytes, false).unwrap();
//! println!("Decoded {}x{} tile", tile.width(), tile.height());
//! ```

mod buffer;
mod types;

pub use buffer::{decode_image, get_orientation};
pub use types::{DecodeError, Orientation};
