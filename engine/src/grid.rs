use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellState::{self, Alive, Dead};
use crate::error::{LifeError, Result};

/// A fixed N×N board of cells, stored row-major.
///
/// `N` is chosen at construction and never changes; every constructor rejects
/// an empty or non-square extent, so a `Grid` always holds at least one cell.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Grid {
    cells: Vec<Vec<CellState>>,
}

impl Grid {
    /// Creates an all-dead grid of `size`×`size` cells.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::InvalidState(
                "grid size must be greater than zero".to_owned(),
            ));
        }
        Ok(Grid {
            cells: vec![vec![Dead; size]; size],
        })
    }

    /// Builds a grid from explicit rows, which must form a non-empty square.
    pub fn from_rows(cells: Vec<Vec<CellState>>) -> Result<Self> {
        let size = cells.len();
        if size == 0 {
            return Err(LifeError::InvalidState("grid has no rows".to_owned()));
        }
        if let Some((index, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(LifeError::InvalidState(format!(
                "row {} has {} cells, expected {}",
                index,
                row.len(),
                size
            )));
        }
        Ok(Grid { cells })
    }

    /// Creates a grid of `size`×`size` cells, each alive with probability 1/2,
    /// reproducibly derived from `seed`.
    pub fn random(size: usize, seed: u64) -> Result<Self> {
        let mut grid = Grid::new(size)?;
        grid.randomize_with(&mut StdRng::seed_from_u64(seed));
        Ok(grid)
    }

    /// Overwrites every cell with a fair coin flip from the thread-local
    /// generator.
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Overwrites every cell with a fair coin flip drawn from `rng`.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = if rng.random_bool(0.5) { Alive } else { Dead };
            }
        }
    }

    /// An all-dead grid of the same size.
    pub fn blank(&self) -> Grid {
        let size = self.size();
        Grid {
            cells: vec![vec![Dead; size]; size],
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Dead);
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<CellState> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, state: CellState) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = state;
        Ok(())
    }

    /// Returns an error unless `(row, col)` addresses a cell of this grid.
    pub fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        let size = self.size();
        if row < size && col < size {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds { row, col, size })
        }
    }

    /// Unchecked read for callers that have already resolved the index.
    pub(crate) fn state(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    pub(crate) fn set_state(&mut self, row: usize, col: usize, state: CellState) {
        self.cells[row][col] = state;
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_alive()).count())
            .sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Positions of all alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.is_alive())
                .map(move |(col, _)| (row, col))
        })
    }
}

/// Renders the grid in the plaintext dialect: `O` alive, `.` dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7).unwrap();
        assert_eq!(7, grid.size());
        assert_eq!(0, grid.population());
        assert!(grid.rows().all(|row| row.len() == 7));
    }

    #[test]
    fn test_zero_size_is_invalid() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidState(_))));
        assert!(matches!(Grid::from_rows(vec![]), Err(LifeError::InvalidState(_))));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![Dead, Alive], vec![Dead]];
        assert!(matches!(Grid::from_rows(rows), Err(LifeError::InvalidState(_))));
        let rows = vec![vec![Dead, Alive, Dead], vec![Dead, Dead, Dead]];
        assert!(matches!(Grid::from_rows(rows), Err(LifeError::InvalidState(_))));
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(1, 3, Alive).unwrap();
        assert_eq!(Alive, grid.get(1, 3).unwrap());
        assert_eq!(Dead, grid.get(3, 1).unwrap());
        assert_eq!(vec![(1, 3)], grid.alive_cells().collect::<Vec<_>>());
        grid.set(1, 3, Dead).unwrap();
        assert_eq!(0, grid.population());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(4).unwrap();
        assert_eq!(
            Err(LifeError::OutOfBounds { row: 4, col: 0, size: 4 }),
            grid.get(4, 0)
        );
        assert_eq!(
            Err(LifeError::OutOfBounds { row: 2, col: 9, size: 4 }),
            grid.set(2, 9, Alive)
        );
        assert_eq!(0, grid.population());
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Grid::random(32, 7).unwrap();
        let b = Grid::random(32, 7).unwrap();
        assert_eq!(a, b);
        // A fair coin over 1024 cells lands nowhere near either extreme.
        assert!(a.population() > 300 && a.population() < 724);
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::random(16, 1).unwrap();
        grid.clear();
        assert_eq!(0, grid.population());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3).unwrap();
        grid.set(0, 1, Alive).unwrap();
        grid.set(2, 2, Alive).unwrap();
        assert_eq!(".O.\n...\n..O\n", grid.to_string());
    }
}
