use std::path::PathBuf;

use thiserror::Error;

use life_engine::LifeError;

/// Result type returned by the pattern loaders.
pub type Result<T> = std::result::Result<T, PatternError>;

/// Error encountered while reading or decoding a pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("pattern contains no cells")]
    Empty,
    #[error("missing RLE header")]
    MissingHeader,
    #[error("bad RLE header: {0}")]
    BadHeader(String),
    #[error("unknown symbol {0:?}")]
    UnknownSymbol(char),
    #[error("invalid run count")]
    InvalidCount,
    #[error("pattern is too big for its header or the size limit")]
    TooBig,
    #[error(transparent)]
    Engine(#[from] LifeError),
}
