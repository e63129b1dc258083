//! Terrain generation module.
//!
//! Provides the HeightGrid data structure and the diamond-square
//! generation passes that fill it.

mod diamond_square;
mod height_grid;
mod relax;

pub use diamond_square::{generate_square, generate_terrain, smallest_power_of_two};
pub use height_grid::{wrap, HeightGrid};
pub use relax::relax;

use thiserror::Error;

/// Errors that can occur while generating or cropping a height grid.
#[derive(Error, Debug)]
pub enum TerrainError {
    #[error("terrain dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("terrain size must be a power of two, got {0}")]
    NotPowerOfTwo(usize),
    #[error("crop region {width}x{height} exceeds source grid {cols}x{rows}")]
    CropOutOfBounds {
        width: usize,
        height: usize,
        cols: usize,
        rows: usize,
    },
}
