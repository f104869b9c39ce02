use log::trace;

use crate::cell::CellState::Alive;
use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A fixed shape, as `(row, col)` offsets from its top-left anchor.
#[derive(Debug, PartialEq, Eq)]
pub struct Stamp {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Period-2 oscillator, vertical phase.
pub const BLINKER: Stamp = Stamp {
    name: "blinker",
    cells: &[(0, 1), (1, 1), (2, 1)],
};

/// Moves one cell down and right every 4 generations.
pub const GLIDER: Stamp = Stamp {
    name: "glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Gosper glider gun, emitting a glider every 30 generations.
#[rustfmt::skip]
pub const GLIDER_GUN: Stamp = Stamp {
    name: "glider-gun",
    cells: &[
        (0, 24),
        (1, 22), (1, 24),
        (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
        (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
        (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
        (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
        (6, 10), (6, 16), (6, 24),
        (7, 11), (7, 15),
        (8, 12), (8, 13),
    ],
};

pub const STAMPS: &[Stamp] = &[BLINKER, GLIDER, GLIDER_GUN];

impl Stamp {
    /// Looks up a stamp by name, ignoring case.
    pub fn by_name(name: &str) -> Option<&'static Stamp> {
        STAMPS.iter().find(|stamp| stamp.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box of the stamp as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(row, col)| {
            (rows.max(row + 1), cols.max(col + 1))
        })
    }
}

impl Grid {
    /// Sets every cell of `stamp` alive, anchored at `(row, col)`.
    ///
    /// If any cell of the stamp would fall outside the grid, returns
    /// [`LifeError::OutOfBounds`] for that cell and leaves the grid unchanged.
    pub fn insert_stamp(&mut self, stamp: &Stamp, row: usize, col: usize) -> Result<()> {
        let size = self.size();
        for &(dr, dc) in stamp.cells {
            let (r, c) = (row.saturating_add(dr), col.saturating_add(dc));
            if r >= size || c >= size {
                return Err(LifeError::OutOfBounds { row: r, col: c, size });
            }
        }
        for &(dr, dc) in stamp.cells {
            self.set_state(row + dr, col + dc, Alive);
        }
        trace!("inserted {} at ({}, {})", stamp.name, row, col);
        Ok(())
    }
}
