//! Gridjoin Core - image grid compositor
//!
//! Combines 1, 4 or 9 encoded images (JPEG or PNG) into one composite JPEG.
//! Rows are joined side by side and re-encoded, then stacked top to bottom.
//!
//! # Usage
//!
//! ```ignore
//! use gridjoin_core::{compose_grid, GridOptions};
//!
//! let tiles: Vec<Vec<u8>> = load_tiles();
//! let jpeg = compose_grid(tiles, &GridOptions::default()).await?;
//! ```

pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
pub mod join;

pub use config::GridOptions;
pub use error::{GridError, GridResult};
#[cfg(feature = "async")]
pub use grid::compose_grid;
pub use grid::{compose_grid_blocking, compose_row, GridShape};
pub use join::{join_horizontal, join_vertical, Direction, JoinError};
