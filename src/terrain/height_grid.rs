//! Height grid data structure.

use serde::{Deserialize, Serialize};

use super::TerrainError;

/// A 2D field of elevation values stored in row-major order.
///
/// During generation the grid is always square with side `2^k + 1`; only
/// the final cropped copy may be rectangular. Coordinates are `(x, y)`
/// where `x` is the column and `y` the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightGrid {
    cols: usize,
    rows: usize,
    heights: Vec<f32>,
}

impl HeightGrid {
    /// Creates a zero-filled grid with the given extent.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            heights: vec![0.0; cols * rows],
        }
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the elevation at the given coordinate.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.cols && y < self.rows);
        self.heights[y * self.cols + x]
    }

    /// Sets the elevation at the given coordinate.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, height: f32) {
        debug_assert!(x < self.cols && y < self.rows);
        self.heights[y * self.cols + x] = height;
    }

    /// Returns the raw row-major elevation data.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Computes the (min, max) elevation over the whole grid.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &height in &self.heights {
            min = min.min(height);
            max = max.max(height);
        }
        (min, max)
    }

    /// Returns a deep copy of rows `0..height` and columns `0..width`.
    ///
    /// The copy owns its data independently of the source.
    pub fn crop(&self, width: usize, height: usize) -> Result<HeightGrid, TerrainError> {
        if width > self.cols || height > self.rows {
            return Err(TerrainError::CropOutOfBounds {
                width,
                height,
                cols: self.cols,
                rows: self.rows,
            });
        }

        let mut cropped = HeightGrid::new(width, height);
        for y in 0..height {
            let src = y * self.cols;
            cropped.heights[y * width..(y + 1) * width]
                .copy_from_slice(&self.heights[src..src + width]);
        }
        Ok(cropped)
    }
}

/// Wraps a coordinate that stepped off the grid back onto it.
///
/// Opposite edges are treated as adjacent with period `period`: a lookup
/// at `-h` reads from `period - h`, one at `period + h` reads from `h`.
pub fn wrap(coord: isize, period: usize) -> usize {
    let period = period as isize;
    (((coord % period) + period) % period) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_zeroed() {
        let grid = HeightGrid::new(5, 3);
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 3);
        assert!(grid.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_get_set() {
        let mut grid = HeightGrid::new(4, 4);
        grid.set(2, 1, 7.5);
        assert_eq!(grid.get(2, 1), 7.5);
        assert_eq!(grid.get(1, 2), 0.0);
    }

    #[test]
    fn test_height_range() {
        let mut grid = HeightGrid::new(3, 3);
        grid.set(0, 0, -2.0);
        grid.set(2, 2, 4.0);
        assert_eq!(grid.height_range(), (-2.0, 4.0));
    }

    #[test]
    fn test_crop_subregion() {
        let mut grid = HeightGrid::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                grid.set(x, y, (y * 4 + x) as f32);
            }
        }

        let cropped = grid.crop(2, 3).unwrap();
        assert_eq!(cropped.cols(), 2);
        assert_eq!(cropped.rows(), 3);
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(cropped.get(x, y), (y * 4 + x) as f32);
            }
        }
    }

    #[test]
    fn test_crop_full_size_is_identity() {
        let mut grid = HeightGrid::new(3, 3);
        grid.set(1, 1, 9.0);

        let copy = grid.crop(3, 3).unwrap();
        assert_eq!(copy, grid);

        // Independent ownership: mutating the copy leaves the source alone.
        let mut copy = copy;
        copy.set(0, 0, -1.0);
        assert_eq!(grid.get(0, 0), 0.0);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let grid = HeightGrid::new(4, 4);
        assert!(matches!(
            grid.crop(5, 2),
            Err(TerrainError::CropOutOfBounds { .. })
        ));
        assert!(matches!(
            grid.crop(2, 5),
            Err(TerrainError::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(3, 8), 3);
        assert_eq!(wrap(0, 8), 0);
        assert_eq!(wrap(-2, 8), 6);
        assert_eq!(wrap(10, 8), 2);
        assert_eq!(wrap(8, 8), 0);
    }
}
