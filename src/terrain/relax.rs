//! Sequential smoothing pass applied once after generation.

use super::HeightGrid;

/// Relaxes the grid in place with a single row-major smoothing pass.
///
/// Each point is replaced by the mean of itself and its grid-adjacent
/// neighbors (no wrap; edge points have fewer neighbors), rounded to the
/// nearest integer. The pass is order-dependent: the neighbors above and
/// to the left have already been relaxed when a point is visited, the
/// ones below and to the right have not. This ordering defines the
/// output, so the pass must stay strictly sequential.
pub fn relax(grid: &mut HeightGrid) {
    let cols = grid.cols();
    let rows = grid.rows();

    for row in 0..rows {
        for col in 0..cols {
            let mut sum = grid.get(col, row);
            let mut count = 1.0;
            if row > 0 {
                sum += grid.get(col, row - 1);
                count += 1.0;
            }
            if row + 1 < rows {
                sum += grid.get(col, row + 1);
                count += 1.0;
            }
            if col > 0 {
                sum += grid.get(col - 1, row);
                count += 1.0;
            }
            if col + 1 < cols {
                sum += grid.get(col + 1, row);
                count += 1.0;
            }
            grid.set(col, row, (sum / count).round());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid_is_fixed_point() {
        let mut grid = HeightGrid::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                grid.set(x, y, 3.0);
            }
        }

        relax(&mut grid);
        assert!(grid.heights().iter().all(|&h| h == 3.0));

        // Idempotent: a second pass changes nothing either.
        relax(&mut grid);
        assert!(grid.heights().iter().all(|&h| h == 3.0));
    }

    #[test]
    fn test_sequential_order_dependency() {
        // 2x2 grid with a single spike in the bottom-right corner. The
        // pass visits points in row-major order, so by the time (1,1) is
        // averaged, its upper and left neighbors hold relaxed values.
        let mut grid = HeightGrid::new(2, 2);
        grid.set(1, 1, 4.0);

        relax(&mut grid);

        // (0,0): mean(0, 0, 0) = 0
        // (1,0): mean(0, 4, 0) = 1.33 -> 1
        // (0,1): mean(0, 0, 4) = 1.33 -> 1
        // (1,1): mean(4, 1, 1) = 2
        assert_eq!(grid.get(0, 0), 0.0);
        assert_eq!(grid.get(1, 0), 1.0);
        assert_eq!(grid.get(0, 1), 1.0);
        assert_eq!(grid.get(1, 1), 2.0);
    }

    #[test]
    fn test_output_is_integral() {
        let mut grid = HeightGrid::new(4, 3);
        for (i, value) in [0.3, 1.7, -2.4, 5.5, 0.0, 9.1, -0.6, 3.3, 2.2, 1.1, 0.4, -7.8]
            .into_iter()
            .enumerate()
        {
            grid.set(i % 4, i / 4, value);
        }

        relax(&mut grid);
        assert!(grid.heights().iter().all(|&h| h == h.round()));
    }
}
