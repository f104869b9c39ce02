//! Code for reading Golly's 2D RLE format, described here:
//! http://golly.sourceforge.net/Help/formats.html#rle
//!
//! An RLE body is first expanded into the "human friendly" picture, one line
//! per row with `o` for alive and `b` for dead, which is then read as a
//! [`Pattern`] with `o` as its alive marker.

use log::{trace, warn};

use life_engine::Pattern;

use crate::error::{PatternError, Result};

/// Alive marker of the human friendly dialect.
pub const RLE_ALIVE: char = 'o';
const RLE_DEAD: char = 'b';

/// Largest width or height an RLE header may declare.
pub const MAX_RLE_DIMENSION: usize = 4096;

/// Rule names accepted in the header, in lowercase.
const LIFE_RULES: &[&str] = &["b3/s23", "b3s23", "23/3", "life", "conway"];

lazy_static::lazy_static! {
    /// Regex matching the `x = W, y = H[, rule = R]` header line.
    static ref RLE_HEADER_REGEX: regex::Regex = regex::Regex::new(
        r"(?i)^x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)\s*(?:,\s*rule\s*=\s*(\S+)\s*)?$"
    )
    .unwrap();

    /// Regex matching an optional run count followed by a single RLE item.
    static ref RLE_RUN_REGEX: regex::Regex = regex::Regex::new(r"([0-9]*)([^0-9])").unwrap();
}

/// Information contained in the header of an RLE pattern.
#[derive(Debug, PartialEq, Eq)]
pub struct RleHeader {
    /// Pattern width.
    pub x: usize,
    /// Pattern height.
    pub y: usize,
    /// Automaton rule.
    pub rule: Option<String>,
}

impl RleHeader {
    fn parse(line: &str) -> Result<Self> {
        let captures = RLE_HEADER_REGEX
            .captures(line)
            .ok_or_else(|| PatternError::BadHeader(line.to_owned()))?;
        let dimension = |i: usize| -> Result<usize> {
            captures[i]
                .parse()
                .map_err(|_| PatternError::BadHeader(line.to_owned()))
        };
        let header = RleHeader {
            x: dimension(1)?,
            y: dimension(2)?,
            rule: captures.get(3).map(|m| m.as_str().to_owned()),
        };
        if let Some(rule) = &header.rule {
            if !LIFE_RULES.contains(&rule.to_ascii_lowercase().as_str()) {
                return Err(PatternError::BadHeader(format!("unsupported rule {:?}", rule)));
            }
        }
        Ok(header)
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('!')
}

/// Expands an RLE pattern into its human friendly picture.
///
/// The body may not place cells outside the `x` × `y` box its header
/// declares, and neither side may exceed [`MAX_RLE_DIMENSION`].
pub fn expand(text: &str) -> Result<String> {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let header = loop {
        match lines.next() {
            Some(line) if is_comment(line) => continue,
            Some(line) => break RleHeader::parse(line)?,
            None => return Err(PatternError::MissingHeader),
        }
    };
    trace!("RLE header {:?}", header);
    if header.x > MAX_RLE_DIMENSION || header.y > MAX_RLE_DIMENSION {
        return Err(PatternError::TooBig);
    }
    if header.x == 0 || header.y == 0 {
        return Err(PatternError::Empty);
    }

    let body: String = lines
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::chars)
        .filter(|ch| !ch.is_whitespace())
        .collect();

    let mut rows = vec![String::new()];
    let mut consumed = 0;
    let mut terminated = false;
    for run in RLE_RUN_REGEX.captures_iter(&body) {
        consumed = run.get(0).map_or(consumed, |m| m.end());
        let count = match &run[1] {
            "" => 1,
            digits => match digits.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(PatternError::InvalidCount),
            },
        };
        match &run[2] {
            "b" | "." => push_run(&mut rows, RLE_DEAD, count, &header)?,
            "o" | "A" => push_run(&mut rows, RLE_ALIVE, count, &header)?,
            // Row breaks past the last declared row can only ever be trailing.
            "$" => {
                let target = rows.len().saturating_add(count).min(header.y + 1);
                rows.resize(target, String::new());
            }
            "!" => {
                terminated = true;
                break;
            }
            other => {
                let symbol = other.chars().next().unwrap_or_default();
                return Err(PatternError::UnknownSymbol(symbol));
            }
        }
    }
    if !terminated {
        if consumed < body.len() {
            return Err(PatternError::InvalidCount);
        }
        warn!("RLE body is missing its '!' terminator");
    }

    while rows.len() > header.y && rows.last().map_or(false, String::is_empty) {
        rows.pop();
    }
    rows.resize(header.y, String::new());

    let mut picture = String::with_capacity(header.y * (header.x + 1));
    for row in &rows {
        picture.push_str(row);
        picture.extend(std::iter::repeat(RLE_DEAD).take(header.x - row.len()));
        picture.push('\n');
    }
    Ok(picture)
}

/// Appends `n` copies of `symbol` to the current row, as long as the row
/// stays inside the box declared by `header`.
fn push_run(rows: &mut [String], symbol: char, n: usize, header: &RleHeader) -> Result<()> {
    if rows.len() > header.y {
        return Err(PatternError::TooBig);
    }
    if let Some(row) = rows.last_mut() {
        if n > header.x - row.len() {
            return Err(PatternError::TooBig);
        }
        row.extend(std::iter::repeat(symbol).take(n));
    }
    Ok(())
}

/// Decodes an RLE pattern.
pub fn parse(text: &str) -> Result<Pattern> {
    Ok(Pattern::from_text(&expand(text)?, RLE_ALIVE)?)
}
