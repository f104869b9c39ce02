//! Neighbor counting.
//!
//! Two interchangeable algorithms produce the same [`NeighborCounts`] for any
//! grid and [`BoundaryPolicy`]:
//!
//! - [`Strategy::Direct`] scans the up-to-8 neighbors of each cell in turn.
//! - [`Strategy::Convolution`] correlates the whole grid with [`KERNEL`],
//!   accumulating one shifted copy of each row per non-zero kernel weight.
//!   Under [`BoundaryPolicy::Toroidal`] the shifts wrap around, which makes it
//!   a circular cross-correlation; under [`BoundaryPolicy::Finite`] the grid
//!   is zero-padded.

use std::fmt;

use crate::boundary::BoundaryPolicy;
use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// Moore neighborhood weights, centered on the cell being counted.
pub const KERNEL: [[u8; 3]; 3] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];

/// Offsets of the 8 neighbors of a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Algorithm used to count alive neighbors over a whole grid.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Strategy {
    Direct,
    #[default]
    Convolution,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Direct => write!(f, "direct"),
            Strategy::Convolution => write!(f, "convolution"),
        }
    }
}

/// Alive-neighbor count of every cell of a grid, each in `0..=8`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NeighborCounts {
    size: usize,
    counts: Vec<u8>,
}

impl NeighborCounts {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Result<u8> {
        if row < self.size && col < self.size {
            Ok(self.at(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                size: self.size,
            })
        }
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> u8 {
        self.counts[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.counts.chunks(self.size)
    }
}

/// Counts the alive neighbors of every cell of `grid` in a single pass.
pub fn count_neighbors(grid: &Grid, policy: BoundaryPolicy, strategy: Strategy) -> NeighborCounts {
    match strategy {
        Strategy::Direct => count_direct(grid, policy),
        Strategy::Convolution => count_convolution(grid, policy),
    }
}

/// Counts the alive neighbors of the cell at `(row, col)`.
pub fn count_cell(grid: &Grid, row: usize, col: usize, policy: BoundaryPolicy) -> Result<u8> {
    grid.check_bounds(row, col)?;
    Ok(direct_cell(grid, row, col, policy))
}

fn direct_cell(grid: &Grid, row: usize, col: usize, policy: BoundaryPolicy) -> u8 {
    let size = grid.size();
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = policy.resolve(row, dr, size)?;
            let c = policy.resolve(col, dc, size)?;
            Some(grid.state(r, c).weight())
        })
        .sum()
}

fn count_direct(grid: &Grid, policy: BoundaryPolicy) -> NeighborCounts {
    let size = grid.size();
    let mut counts = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            counts.push(direct_cell(grid, row, col, policy));
        }
    }
    NeighborCounts { size, counts }
}

fn count_convolution(grid: &Grid, policy: BoundaryPolicy) -> NeighborCounts {
    let size = grid.size();
    let plane: Vec<u8> = grid
        .rows()
        .flat_map(|row| row.iter().map(|cell| cell.weight()))
        .collect();
    let mut counts = vec![0_u8; size * size];

    for (kernel_row, weights) in KERNEL.iter().enumerate() {
        let dr = kernel_row as isize - 1;
        for (kernel_col, &weight) in weights.iter().enumerate() {
            if weight == 0 {
                continue;
            }
            let dc = kernel_col as isize - 1;
            for (row, out) in counts.chunks_mut(size).enumerate() {
                let Some(source_row) = policy.resolve(row, dr, size) else {
                    continue;
                };
                let source = &plane[source_row * size..(source_row + 1) * size];
                accumulate_shifted(out, source, dc, weight, policy);
            }
        }
    }

    NeighborCounts { size, counts }
}

/// Adds `weight * source[c + shift]` into `out[c]` for every column `c`,
/// resolving `c + shift` according to `policy`.
fn accumulate_shifted(
    out: &mut [u8],
    source: &[u8],
    shift: isize,
    weight: u8,
    policy: BoundaryPolicy,
) {
    let n = source.len();
    let add = |out: &mut [u8], source: &[u8]| {
        for (o, &s) in out.iter_mut().zip(source) {
            *o += weight * s;
        }
    };
    match policy {
        BoundaryPolicy::Toroidal => {
            let k = shift.rem_euclid(n as isize) as usize;
            add(&mut out[..n - k], &source[k..]);
            add(&mut out[n - k..], &source[..k]);
        }
        BoundaryPolicy::Finite => {
            let k = shift.unsigned_abs();
            if k >= n {
                return;
            }
            if shift >= 0 {
                add(&mut out[..n - k], &source[k..]);
            } else {
                add(&mut out[k..], &source[..n - k]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState::Alive;

    const STRATEGIES: [Strategy; 2] = [Strategy::Direct, Strategy::Convolution];

    fn grid_with(size: usize, cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(row, col) in cells {
            grid.set(row, col, Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_kernel_excludes_center() {
        assert_eq!(0, KERNEL[1][1]);
        assert_eq!(8, KERNEL.iter().flatten().sum::<u8>());
    }

    #[test]
    fn test_corner_finite_vs_toroidal() {
        // Opposite corners only see each other through the wrap.
        let grid = grid_with(5, &[(0, 0), (4, 4)]);
        for strategy in STRATEGIES {
            let finite = count_neighbors(&grid, BoundaryPolicy::Finite, strategy);
            assert_eq!(0, finite.get(0, 0).unwrap());
            assert_eq!(0, finite.get(4, 4).unwrap());
            assert_eq!(1, finite.get(1, 1).unwrap());
            assert_eq!(1, finite.get(3, 3).unwrap());

            let toroidal = count_neighbors(&grid, BoundaryPolicy::Toroidal, strategy);
            assert_eq!(1, toroidal.get(0, 0).unwrap());
            assert_eq!(1, toroidal.get(4, 4).unwrap());
            assert_eq!(2, toroidal.get(0, 4).unwrap());
            assert_eq!(2, toroidal.get(4, 0).unwrap());
        }
    }

    #[test]
    fn test_full_grid_counts() {
        let mut grid = Grid::new(4).unwrap();
        for row in 0..4 {
            for col in 0..4 {
                grid.set(row, col, Alive).unwrap();
            }
        }
        for strategy in STRATEGIES {
            let finite = count_neighbors(&grid, BoundaryPolicy::Finite, strategy);
            assert_eq!(3, finite.get(0, 0).unwrap());
            assert_eq!(5, finite.get(0, 2).unwrap());
            assert_eq!(8, finite.get(2, 1).unwrap());

            let toroidal = count_neighbors(&grid, BoundaryPolicy::Toroidal, strategy);
            assert!(toroidal.rows().flatten().all(|&n| n == 8));
        }
    }

    #[test]
    fn test_tiny_toroidal_grids_count_repeats() {
        // Under wraparound every offset is a neighbor even when it lands on a
        // cell already counted, or on the cell itself.
        let single = grid_with(1, &[(0, 0)]);
        let pair = grid_with(2, &[(1, 1)]);
        for strategy in STRATEGIES {
            let counts = count_neighbors(&single, BoundaryPolicy::Toroidal, strategy);
            assert_eq!(8, counts.get(0, 0).unwrap());
            let counts = count_neighbors(&single, BoundaryPolicy::Finite, strategy);
            assert_eq!(0, counts.get(0, 0).unwrap());

            let counts = count_neighbors(&pair, BoundaryPolicy::Toroidal, strategy);
            assert_eq!(4, counts.get(0, 0).unwrap());
            assert_eq!(2, counts.get(0, 1).unwrap());
            assert_eq!(0, counts.get(1, 1).unwrap());
        }
    }

    #[test]
    fn test_count_cell_matches_whole_grid() {
        let grid = Grid::random(9, 42).unwrap();
        for policy in [BoundaryPolicy::Finite, BoundaryPolicy::Toroidal] {
            let counts = count_neighbors(&grid, policy, Strategy::Convolution);
            for row in 0..9 {
                for col in 0..9 {
                    assert_eq!(
                        counts.get(row, col).unwrap(),
                        count_cell(&grid, row, col, policy).unwrap()
                    );
                }
            }
        }
    }

    #[test]
    fn test_count_cell_out_of_bounds() {
        let grid = Grid::new(3).unwrap();
        assert_eq!(
            Err(LifeError::OutOfBounds { row: 3, col: 0, size: 3 }),
            count_cell(&grid, 3, 0, BoundaryPolicy::Toroidal)
        );
        let counts = count_neighbors(&grid, BoundaryPolicy::Finite, Strategy::Direct);
        assert!(counts.get(0, 3).is_err());
    }
}
