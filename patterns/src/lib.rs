//! Pattern loaders producing [`life_engine::Pattern`]s from text and files.
//!
//! Two formats are understood:
//!
//! - plaintext (`.cells`), a picture of `O` (alive) and `.` (dead) with `!`
//!   comment lines;
//! - Golly's [run length encoded](http://golly.sourceforge.net/Help/formats.html#rle)
//!   format (`.rle`), restricted to the B3/S23 rule.

use std::fs;
use std::path::Path;

use log::debug;

use life_engine::Pattern;

mod error;
pub mod plaintext;
pub mod rle;

pub use error::{PatternError, Result};

/// File format of a pattern source.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    Plaintext,
    Rle,
}

impl Format {
    /// Guesses the format from a file extension: `.rle` is RLE, anything
    /// else is plaintext.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("rle") => Format::Rle,
            _ => Format::Plaintext,
        }
    }

    pub fn parse(self, text: &str) -> Result<Pattern> {
        match self {
            Format::Plaintext => plaintext::parse(text, plaintext::PLAINTEXT_ALIVE),
            Format::Rle => rle::parse(text),
        }
    }
}

/// Reads and decodes the pattern file at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Pattern> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path);
    let pattern = format.parse(&text)?;
    debug!(
        "loaded {:?} pattern {} ({}x{})",
        format,
        path.display(),
        pattern.rows(),
        pattern.cols()
    );
    Ok(pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::Rle, Format::from_path(Path::new("gosperglidergun.rle")));
        assert_eq!(Format::Rle, Format::from_path(Path::new("dir/BREEDER.RLE")));
        assert_eq!(Format::Plaintext, Format::from_path(Path::new("glider.cells")));
        assert_eq!(Format::Plaintext, Format::from_path(Path::new("glider.txt")));
        assert_eq!(Format::Plaintext, Format::from_path(Path::new("glider")));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file("/nonexistent/pattern.rle").unwrap_err();
        assert!(matches!(err, PatternError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pattern.rle"));
    }
}
