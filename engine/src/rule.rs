use crate::cell::CellState::{self, Alive, Dead};

/// Next state of a cell under B3/S23, given its current state and alive
/// neighbor count.
pub fn next_state(current: CellState, neighbors: u8) -> CellState {
    match (current, neighbors) {
        (Alive, 2..=3) => Alive, // Survives
        (Dead, 3) => Alive,      // Becomes alive
        _ => Dead,               // Dies or remains dead
    }
}
