//! Grid composition.
//!
//! The input count picks a [`GridShape`]; inputs are split into row-groups
//! in row-major order, each row-group is joined side by side and encoded as
//! a JPEG strip, and the strips are stacked into the final JPEG.
//!
//! | inputs | shape      | rows                          |
//! |--------|------------|-------------------------------|
//! | 1      | `Single`   | returned unchanged            |
//! | 4      | `Grid2x2`  | `[0,1]`, `[2,3]`              |
//! | 9      | `Grid3x3`  | `[0,1,2]`, `[3,4,5]`, `[6,7,8]` |
//!
//! Any other count is rejected with `GridError::UnsupportedCount`.

mod compose;
mod shape;

#[cfg(feature = "async")]
pub use compose::compose_grid;
pub use compose::{compose_grid_blocking, compose_row};
pub use shape::GridShape;
