//! Directional boundary-distance scanner.
//!
//! For one cardinal direction, each foreground cell receives the length, in
//! cells, of the contiguous foreground run it belongs to, counted from the
//! run's far end toward the scan's starting edge. Background cells stay 0.
use ndarray::{Array2, ArrayView2};
use tracing::debug;

use crate::types::Direction;

/// Compute the boundary-distance grid for one scan direction.
///
/// Columns (south/north) and rows (west/east) are processed independently.
/// A line with no foreground is skipped after the locate pass; cells beyond
/// the line's outermost foreground cell are never visited and stay 0.
pub fn edge_distances(
    grid: ArrayView2<'_, f64>,
    direction: Direction,
    background: f64,
) -> Array2<u32> {
    let (rows, cols) = grid.dim();
    let mut result = Array2::<u32>::zeros((rows, cols));

    match direction {
        Direction::South => {
            for j in 0..cols {
                let col = grid.column(j);
                let Some(bottom) = col.iter().rposition(|&v| v != background) else {
                    continue;
                };
                let mut length = 0u32;
                for i in (0..=bottom).rev() {
                    if col[i] != background {
                        length += 1;
                        result[[i, j]] = length;
                    } else {
                        length = 0;
                    }
                }
            }
        }
        Direction::North => {
            for j in 0..cols {
                let col = grid.column(j);
                let Some(top) = col.iter().position(|&v| v != background) else {
                    continue;
                };
                let mut length = 0u32;
                for i in top..rows {
                    if col[i] != background {
                        length += 1;
                        result[[i, j]] = length;
                    } else {
                        length = 0;
                    }
                }
            }
        }
        Direction::West => {
            for i in 0..rows {
                let row = grid.row(i);
                let Some(left) = row.iter().position(|&v| v != background) else {
                    continue;
                };
                let mut length = 0u32;
                for j in left..cols {
                    if row[j] != background {
                        length += 1;
                        result[[i, j]] = length;
                    } else {
                        length = 0;
                    }
                }
            }
        }
        Direction::East => {
            for i in 0..rows {
                let row = grid.row(i);
                let Some(right) = row.iter().rposition(|&v| v != background) else {
                    continue;
                };
                let mut length = 0u32;
                for j in (0..=right).rev() {
                    if row[j] != background {
                        length += 1;
                        result[[i, j]] = length;
                    } else {
                        length = 0;
                    }
                }
            }
        }
    }

    debug!("edge_distances: {} scan over {}x{} grid done", direction, rows, cols);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn column_grid(values: &[f64]) -> Array2<f64> {
        Array2::from_shape_vec((values.len(), 1), values.to_vec()).unwrap()
    }

    #[test]
    fn southern_scan_single_column() {
        let grid = column_grid(&[0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 1.0]);
        let result = edge_distances(grid.view(), Direction::South, 0.0);
        let expected: Vec<u32> = vec![0, 2, 1, 0, 3, 2, 1];
        assert_eq!(result.column(0).to_vec(), expected);
    }

    #[test]
    fn all_background_is_untouched() {
        let grid = Array2::<f64>::zeros((5, 4));
        for dir in Direction::ALL {
            let result = edge_distances(grid.view(), dir, 0.0);
            assert!(result.iter().all(|&v| v == 0));
        }
    }

    #[test]
    fn isolated_cell_at_starting_edge() {
        // Single foreground cell on the bottom row: southern scan sees run length 1.
        let mut grid = Array2::<f64>::zeros((4, 3));
        grid[[3, 1]] = 1.0;
        let result = edge_distances(grid.view(), Direction::South, 0.0);
        assert_eq!(result[[3, 1]], 1);
        assert_eq!(result.iter().map(|&v| v as usize).sum::<usize>(), 1);
    }

    #[test]
    fn l_shape_all_directions() {
        // "L" of foreground touching the bottom and left edges.
        let grid = array![
            [1.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0, 0.0],
        ];

        let south = edge_distances(grid.view(), Direction::South, 0.0);
        assert_eq!(
            south,
            array![
                [4u32, 0, 0, 0],
                [3, 0, 0, 0],
                [2, 0, 0, 0],
                [1, 1, 1, 0],
            ]
        );

        let north = edge_distances(grid.view(), Direction::North, 0.0);
        assert_eq!(
            north,
            array![
                [1u32, 0, 0, 0],
                [2, 0, 0, 0],
                [3, 0, 0, 0],
                [4, 1, 1, 0],
            ]
        );

        let west = edge_distances(grid.view(), Direction::West, 0.0);
        assert_eq!(
            west,
            array![
                [1u32, 0, 0, 0],
                [1, 0, 0, 0],
                [1, 0, 0, 0],
                [1, 2, 3, 0],
            ]
        );

        let east = edge_distances(grid.view(), Direction::East, 0.0);
        assert_eq!(
            east,
            array![
                [1u32, 0, 0, 0],
                [1, 0, 0, 0],
                [1, 0, 0, 0],
                [3, 2, 1, 0],
            ]
        );
    }

    #[test]
    fn run_lengths_increase_toward_starting_edge() {
        // Within any maximal run, distances step by 1 toward the scan edge and
        // the cell just past the run's far end is background (0).
        let grid = array![
            [0.0, 1.0, 1.0, 0.0, 1.0],
            [1.0, 1.0, 0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0, 1.0, 1.0],
            [0.0, 1.0, 1.0, 0.0, 1.0],
        ];
        let result = edge_distances(grid.view(), Direction::South, 0.0);
        let (rows, cols) = grid.dim();
        for j in 0..cols {
            for i in 0..rows {
                let v = result[[i, j]];
                if v > 1 {
                    assert_eq!(result[[i + 1, j]], v - 1, "run broken at ({}, {})", i, j);
                }
                if v == 1 && i + 1 < rows {
                    // far end of the run going south
                    assert!(grid[[i + 1, j]] == 0.0 || result[[i + 1, j]] > 1);
                }
            }
        }
    }

    #[test]
    fn nonzero_background_parameter() {
        // Cells equal to the background value break runs even when nonzero.
        let grid = column_grid(&[5.0, 1.0, 5.0, 1.0]);
        let result = edge_distances(grid.view(), Direction::South, 5.0);
        assert_eq!(result.column(0).to_vec(), vec![0, 1, 0, 1]);
    }
}
