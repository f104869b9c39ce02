//! Plaintext patterns: one line per row, `!` starts a comment line.

use log::warn;

use life_engine::Pattern;

use crate::error::{PatternError, Result};

/// Alive marker of the plaintext dialect.
pub const PLAINTEXT_ALIVE: char = 'O';

const COMMENT: char = '!';

/// Removes comment lines from a plaintext pattern.
pub fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with(COMMENT))
        .map(|line| format!("{}\n", line))
        .collect()
}

/// Decodes a plaintext pattern in which `alive` marks a live cell.
pub fn parse(text: &str, alive: char) -> Result<Pattern> {
    let body = strip_comments(text);
    if body.trim().is_empty() {
        return Err(PatternError::Empty);
    }
    let widths: Vec<usize> = body
        .trim()
        .lines()
        .map(|line| line.trim_end().chars().count())
        .collect();
    if widths.windows(2).any(|pair| pair[0] != pair[1]) {
        warn!("plaintext rows have uneven widths; padding short rows with dead cells");
    }
    Ok(Pattern::from_text(&body, alive)?)
}
