//! Diamond-square midpoint displacement.

use crate::noise::{ChaChaOffsets, OffsetConfig, OffsetSource};

use super::height_grid::{wrap, HeightGrid};
use super::relax::relax;
use super::TerrainError;

/// Generates a relaxed, cropped height grid of the requested extent.
///
/// Composes the full generation flow: round the extent up to a power-of-two
/// square, run the diamond-square passes with a ChaCha8 offset source seeded
/// from the config, apply the sequential relax pass, and crop to the
/// requested `width` x `height`.
pub fn generate_terrain(
    width: usize,
    height: usize,
    config: &OffsetConfig,
) -> Result<HeightGrid, TerrainError> {
    if width < 1 || height < 1 {
        return Err(TerrainError::InvalidDimensions { width, height });
    }

    let size = smallest_power_of_two(width.max(height));
    let mut source = ChaChaOffsets::new(config.seed);
    let mut grid = generate_square(size, config.smoothness, &mut source)?;
    relax(&mut grid);
    grid.crop(width, height)
}

/// Returns the smallest power of two `>= n`.
pub fn smallest_power_of_two(n: usize) -> usize {
    let mut size = 1;
    while size < n {
        size <<= 1;
    }
    size
}

/// Runs the diamond-square passes over a zero-initialized square grid.
///
/// `size` must be a power of two; the returned grid has `size + 1` points
/// per side so every sub-square at every depth has all four corners. One
/// diamond pass and one square pass run per depth, `log2(size)` depths in
/// total. The square pass at a given depth reads center values written by
/// the diamond pass of the same depth, so the two are strictly ordered,
/// as are successive depths.
pub fn generate_square<S: OffsetSource>(
    size: usize,
    smoothness: f32,
    source: &mut S,
) -> Result<HeightGrid, TerrainError> {
    if size < 1 || size & (size - 1) != 0 {
        return Err(TerrainError::NotPowerOfTwo(size));
    }

    let mut grid = HeightGrid::new(size + 1, size + 1);
    let iterations = size.ilog2();
    for depth in 1..=iterations {
        diamond_step(&mut grid, depth, smoothness, source);
        square_step(&mut grid, depth, smoothness, source);
    }
    Ok(grid)
}

/// Diamond step: writes the center of every sub-square at this depth.
///
/// The center is the mean of the sub-square's four corners plus one fresh
/// offset sample. Centers never overlap between sub-squares.
fn diamond_step<S: OffsetSource>(grid: &mut HeightGrid, depth: u32, smoothness: f32, source: &mut S) {
    let size = grid.cols() - 1;
    let span = size >> (depth - 1);
    let half = span / 2;

    for x in (0..size).step_by(span) {
        for y in (0..size).step_by(span) {
            let avg = (grid.get(x, y)
                + grid.get(x + span, y)
                + grid.get(x, y + span)
                + grid.get(x + span, y + span))
                / 4.0;
            grid.set(x + half, y + half, avg + source.sample(depth, smoothness));
        }
    }
}

/// Square step: writes the four edge midpoints of every sub-square.
///
/// Each midpoint is the mean of the two corners its edge connects, the
/// center of this sub-square, and the center of the sub-square across the
/// edge, wrapping toroidally when that neighbor falls outside the grid.
/// Afterwards the bottom and right borders are rewritten to mirror the top
/// and left ones, closing the wrap.
fn square_step<S: OffsetSource>(grid: &mut HeightGrid, depth: u32, smoothness: f32, source: &mut S) {
    let size = grid.cols() - 1;
    let span = size >> (depth - 1);
    let half = span / 2;

    for x in (0..size).step_by(span) {
        for y in (0..size).step_by(span) {
            let center = (x + half, y + half);

            // Centers of the four neighboring sub-squares. At the grid
            // edge these wrap around to the opposite side.
            let left = (wrap(x as isize - half as isize, size), y + half);
            let above = (x + half, wrap(y as isize - half as isize, size));
            let right = (wrap((x + span + half) as isize, size), y + half);
            let below = (x + half, wrap((y + span + half) as isize, size));

            square_midpoint(
                grid,
                depth,
                smoothness,
                source,
                [(x, y), center, (x, y + span), left],
                (x, y + half),
            );
            square_midpoint(
                grid,
                depth,
                smoothness,
                source,
                [(x, y), above, (x + span, y), center],
                (x + half, y),
            );
            square_midpoint(
                grid,
                depth,
                smoothness,
                source,
                [(x + span, y), right, (x + span, y + span), center],
                (x + span, y + half),
            );
            square_midpoint(
                grid,
                depth,
                smoothness,
                source,
                [(x, y + span), center, (x + span, y + span), below],
                (x + half, y + span),
            );
        }
    }

    // Close the toroidal wrap: the bottom and right borders mirror the
    // top and left ones exactly.
    for y in 0..=size {
        let height = grid.get(0, y);
        grid.set(size, y, height);
    }
    for x in 0..=size {
        let height = grid.get(x, 0);
        grid.set(x, size, height);
    }
}

/// Writes one edge midpoint: the mean of `ring` plus a fresh offset.
fn square_midpoint<S: OffsetSource>(
    grid: &mut HeightGrid,
    depth: u32,
    smoothness: f32,
    source: &mut S,
    ring: [(usize, usize); 4],
    target: (usize, usize),
) {
    let mut sum = 0.0;
    for (x, y) in ring {
        sum += grid.get(x, y);
    }
    let avg = sum / 4.0;
    grid.set(target.0, target.1, avg + source.sample(depth, smoothness));
}
