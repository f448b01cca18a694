//! Grid shapes derived from the number of input images.

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Row/column arrangement of the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridShape {
    /// One image, passed through untouched.
    Single,
    /// Two rows of two.
    Grid2x2,
    /// Three rows of three.
    Grid3x3,
}

impl GridShape {
    /// Pick the shape for `count` inputs.
    ///
    /// Only 1, 4 and 9 are supported. Anything else is rejected here so the
    /// compositor never indexes past the end of its input.
    pub fn from_count(count: usize) -> Result<Self, GridError> {
        match count {
            1 => Ok(GridShape::Single),
            4 => Ok(GridShape::Grid2x2),
            9 => Ok(GridShape::Grid3x3),
            _ => Err(GridError::UnsupportedCount { count }),
        }
    }

    pub fn rows(self) -> usize {
        match self {
            GridShape::Single => 1,
            GridShape::Grid2x2 => 2,
            GridShape::Grid3x3 => 3,
        }
    }

    /// Images per row. Grids are square, so this equals `rows()`.
    pub fn columns(self) -> usize {
        self.rows()
    }

    /// Total number of images this shape holds.
    pub fn cell_count(self) -> usize {
        self.rows() * self.columns()
    }

    /// Split `items` into row-groups, in row-major order.
    ///
    /// `items` must hold exactly `cell_count()` elements.
    pub fn row_groups<T>(self, items: &[T]) -> std::slice::Chunks<'_, T> {
        debug_assert_eq!(items.len(), self.cell_count(), "Row-group size mismatch");
        items.chunks(self.columns())
    }
}
