//! Conway's Game of Life on a fixed N×N grid.
//!
//! * A live cell dies if it has fewer than two live neighbors.
//! * A live cell with two or three live neighbors lives on to the next generation.
//! * A live cell with more than three live neighbors dies.
//! * A dead cell is brought to life if it has exactly three live neighbors.

pub mod boundary;
pub mod cell;
pub mod engine;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod pattern;
pub mod rule;
pub mod stamp;

pub use boundary::BoundaryPolicy;
pub use cell::CellState;
pub use engine::{step, Simulation, SimulationConfig};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use neighbors::{count_cell, count_neighbors, NeighborCounts, Strategy, KERNEL};
pub use pattern::{centered_offset, Pattern};
pub use rule::next_state;
pub use stamp::{Stamp, BLINKER, GLIDER, GLIDER_GUN, STAMPS};
