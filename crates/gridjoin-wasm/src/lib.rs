//! Gridjoin WASM - WebAssembly bindings for the grid compositor
//!
//! This crate exposes gridjoin-core to JavaScript/TypeScript command
//! handlers that need to post several images as one.
//!
//! # Module Structure
//!
//! - `grid` - Grid composition (`image_join`, `grid_dimensions`)
//! - `join` - Raw horizontal/vertical join primitives
//! - `types` - Conversions between JS values and core types
//!
//! # Usage
//!
//! ```typescript
//! import init, { image_join } from '@gridjoin/wasm';
//!
//! await init();
//!
//! const tiles = await Promise.all(files.map(async f => new Uint8Array(await f.arrayBuffer())));
//! const jpeg = image_join(tiles, { jpegQuality: 85 });
//! ```
//!
//! Rows are joined one after another here; browsers give WASM no thread
//! pool to fan out to.

use wasm_bindgen::prelude::*;

mod grid;
mod join;
mod types;

pub use grid::{grid_dimensions, image_join};
pub use join::{join_horizontal, join_vertical};

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
