//! JPEG encoding for grid rows and the final composite.
//!
//! Every join step in the compositor ends in a JPEG encode, so the row
//! strips handed to the vertical join are JPEG buffers as well.
//!
//! # Examples
//!
//! ```ignore
//! use gridjoin_core::encode::encode_jpeg;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let jpeg_bytes = encode_jpeg(&pixels, 100, 100, 80).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, encode_rgb_image, EncodeError, DEFAULT_JPEG_QUALITY};
