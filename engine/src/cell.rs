use std::fmt;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// Weight of the cell in a neighbor sum: 1 when alive, 0 when dead.
    pub fn weight(self) -> u8 {
        match self {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellState::Alive => write!(f, "O"),
            CellState::Dead => write!(f, "."),
        }
    }
}
