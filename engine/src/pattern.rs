//! Initial-state patterns and their placement in a grid.
//!
//! A [`Pattern`] is what a pattern loader hands to the engine: a rectangle of
//! alive/dead markers. Placement puts it in the middle of the grid and only
//! ever turns cells on.

use log::debug;

use crate::cell::CellState::Alive;
use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A rectangular block of cells, `rows` × `cols`, where `true` is alive.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<bool>>,
}

impl Pattern {
    /// Builds a pattern from rows of markers. Rows shorter than the longest
    /// one are padded with dead cells.
    pub fn new(mut cells: Vec<Vec<bool>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.iter().map(Vec::len).max().unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidState("pattern is empty".to_owned()));
        }
        for row in cells.iter_mut() {
            row.resize(cols, false);
        }
        Ok(Pattern { rows, cols, cells })
    }

    /// Reads a pattern drawn as text, one line per row, where `alive` marks a
    /// live cell and any other character is dead. Blank lines before and
    /// after the picture are ignored.
    pub fn from_text(text: &str, alive: char) -> Result<Self> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let first = lines.iter().position(|line| !line.is_empty());
        let last = lines.iter().rposition(|line| !line.is_empty());
        let picture = match (first, last) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => &[][..],
        };
        Self::new(
            picture
                .iter()
                .map(|line| line.chars().map(|ch| ch == alive).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Positions of alive cells relative to the pattern's top-left corner.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(col, _)| (row, col))
        })
    }
}

/// Top-left corner at which a `rows` × `cols` block sits centered in a grid
/// of `size`×`size`, rounding toward the top-left.
pub fn centered_offset(size: usize, rows: usize, cols: usize) -> Result<(usize, usize)> {
    if rows > size || cols > size {
        return Err(LifeError::InvalidState(format!(
            "{}x{} pattern does not fit in a {}x{} grid",
            rows, cols, size, size
        )));
    }
    Ok(((size - rows) / 2, (size - cols) / 2))
}

impl Grid {
    /// Places `pattern` in the middle of the grid, setting its alive cells
    /// and leaving every other cell as it was. Returns the top-left offset
    /// used.
    pub fn insert_centered(&mut self, pattern: &Pattern) -> Result<(usize, usize)> {
        let (row_offset, col_offset) =
            centered_offset(self.size(), pattern.rows(), pattern.cols())?;
        for (row, col) in pattern.alive_cells() {
            self.set_state(row + row_offset, col + col_offset, Alive);
        }
        debug!(
            "placed {}x{} pattern ({} alive) at ({}, {})",
            pattern.rows(),
            pattern.cols(),
            pattern.population(),
            row_offset,
            col_offset
        );
        Ok((row_offset, col_offset))
    }
}
