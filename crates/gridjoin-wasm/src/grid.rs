//! Grid composition WASM bindings.
//!
//! # Functions
//!
//! - [`image_join`] - Compose 1, 4 or 9 images into one grid
//! - [`grid_dimensions`] - Rows and columns for an image count
//!
//! # Example
//!
//! ```typescript
//! import { image_join, grid_dimensions } from '@gridjoin/wasm';
//!
//! const [rows, columns] = grid_dimensions(tiles.length);
//! const jpeg = image_join(tiles, { background: [255, 255, 255] });
//! ```

use crate::types::{buffers_from_array, options_from_js, to_js_error};
use gridjoin_core::{compose_grid_blocking, GridError, GridShape};
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Compose images into a single grid.
///
/// # Arguments
///
/// * `buffers` - Array of `Uint8Array`, each an encoded JPEG or PNG
/// * `options` - Optional `{ jpegQuality, background, autoOrient }` object
///
/// # Returns
///
/// For one image, the same bytes unchanged. For 4 or 9 images, the JPEG
/// composite in row-major order.
///
/// # Errors
///
/// Returns an error for any other image count, a non-`Uint8Array`
/// element, or an image that cannot be decoded.
#[wasm_bindgen]
pub fn image_join(buffers: &Array, options: JsValue) -> Result<Vec<u8>, JsValue> {
    let buffers = buffers_from_array(buffers)?;
    let options = options_from_js(options)?;
    compose_grid_blocking(&buffers, &options).map_err(to_js_error)
}

/// Return `[rows, columns]` for the given number of images.
#[wasm_bindgen]
pub fn grid_dimensions(count: usize) -> Result<Vec<u32>, JsValue> {
    shape_dimensions(count)
        .map(|(rows, columns)| vec![rows, columns])
        .map_err(to_js_error)
}

fn shape_dimensions(count: usize) -> Result<(u32, u32), GridError> {
    let shape = GridShape::from_count(count)?;
    Ok((shape.rows() as u32, shape.columns() as u32))
}
