//! Join primitive WASM bindings.
//!
//! These expose a single join step for callers that lay out their own
//! strips. Each call decodes its inputs, joins them and returns a JPEG.

use crate::types::{buffers_from_array, options_from_js, to_js_error};
use gridjoin_core::encode::encode_rgb_image;
use gridjoin_core::join::join_buffers;
use gridjoin_core::{Direction, GridOptions};
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Join images side by side into one JPEG.
#[wasm_bindgen]
pub fn join_horizontal(buffers: &Array, options: JsValue) -> Result<Vec<u8>, JsValue> {
    join_js(buffers, options, Direction::Horizontal)
}

/// Stack images top to bottom into one JPEG.
#[wasm_bindgen]
pub fn join_vertical(buffers: &Array, options: JsValue) -> Result<Vec<u8>, JsValue> {
    join_js(buffers, options, Direction::Vertical)
}

fn join_js(buffers: &Array, options: JsValue, direction: Direction) -> Result<Vec<u8>, JsValue> {
    let buffers = buffers_from_array(buffers)?;
    let options = options_from_js(options)?;
    join_to_jpeg(&buffers, direction, &options).map_err(to_js_error)
}

fn join_to_jpeg(
    buffers: &[Vec<u8>],
    direction: Direction,
    options: &GridOptions,
) -> Result<Vec<u8>, String> {
    let joined = join_buffers(buffers, direction, options).map_err(|e| e.to_string())?;
    encode_rgb_image(&joined, options.quality()).map_err(|e| e.to_string())
}
