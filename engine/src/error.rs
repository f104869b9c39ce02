use thiserror::Error;

/// Result type returned by fallible engine routines.
pub type Result<T> = std::result::Result<T, LifeError>;

/// Error raised by grid access, construction and pattern insertion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("invalid state: {0}")]
    InvalidState(String),
}
