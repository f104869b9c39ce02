use log::debug;

use crate::boundary::BoundaryPolicy;
use crate::error::Result;
use crate::grid::Grid;
use crate::neighbors::{count_neighbors, Strategy};
use crate::rule::next_state;

/// Computes the generation following `grid`.
///
/// Every neighbor count is taken from `grid` before any new state is
/// written, and the result is built in a fresh grid; `grid` itself is never
/// modified.
pub fn step(grid: &Grid, policy: BoundaryPolicy, strategy: Strategy) -> Grid {
    let counts = count_neighbors(grid, policy, strategy);
    let mut next = grid.blank();

    for (row, cells) in grid.rows().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            next.set_state(row, col, next_state(cell, counts.at(row, col)));
        }
    }
    next
}

/// Parameters of a [`Simulation`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SimulationConfig {
    pub size: usize,
    pub policy: BoundaryPolicy,
    pub strategy: Strategy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            size: 256,
            policy: BoundaryPolicy::Toroidal,
            strategy: Strategy::Convolution,
        }
    }
}

/// Owns the current generation and replaces it wholesale on every step.
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    pub policy: BoundaryPolicy,
    pub strategy: Strategy,
}

impl Simulation {
    /// Starts an all-dead simulation.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Ok(Self::from_grid(
            Grid::new(config.size)?,
            config.policy,
            config.strategy,
        ))
    }

    pub fn from_grid(grid: Grid, policy: BoundaryPolicy, strategy: Strategy) -> Self {
        Simulation {
            grid,
            generation: 0,
            policy,
            strategy,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for seeding the current generation between steps.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Installs a new initial state and restarts the generation count.
    pub fn replace_grid(&mut self, grid: Grid) -> Grid {
        self.generation = 0;
        std::mem::replace(&mut self.grid, grid)
    }

    /// Advances by one generation. Returns `false` if the grid did not change.
    pub fn advance(&mut self) -> bool {
        let next = step(&self.grid, self.policy, self.strategy);
        self.generation += 1;
        debug!(
            "generation {} ({}, {}): population {}",
            self.generation,
            self.policy,
            self.strategy,
            next.population()
        );
        if next == self.grid {
            return false;
        }
        self.grid = next;
        true
    }

    /// Advances by `generations` steps.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }
}
