//! Horizontal and vertical image joins.
//!
//! A join lays its inputs out edge to edge on a single canvas:
//!
//! - **Horizontal**: canvas width is the sum of the widths, height is the
//!   tallest input. Every image is placed against the top edge.
//! - **Vertical**: canvas height is the sum of the heights, width is the
//!   widest input. Every image is placed against the left edge.
//!
//! Area not covered by an input keeps the background colour, and inputs
//! with an alpha channel are blended over it before the canvas is
//! flattened to RGB for JPEG output.
//!
//! Canvases larger than [`MAX_CANVAS_PIXELS`] are rejected before any
//! pixels are allocated.

mod canvas;
mod types;

pub use canvas::{
    canvas_size, join_buffers, join_horizontal, join_images, join_vertical, MAX_CANVAS_PIXELS,
};
pub use types::{Direction, JoinError};
