//! Speech bubble module
//!
//! Renders text as a cowsay-style speech bubble:
//!
//! ```text
//!  _________________
//! < Cats are great. >
//!  -----------------
//! ```
//!
//! Multi-line bubbles use `/ \`, `| |` and `\ /` as side borders.

mod wrap;

pub use wrap::wrap;

use std::fmt;

use crate::error::{CatFactsError, Result};

/// Content width used when the caller has no preference
pub const DEFAULT_MAX_WIDTH: usize = 50;

/// A rendered speech bubble: top border, body lines, bottom border
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    lines: Vec<String>,
}

impl Bubble {
    /// All rendered lines, borders included
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Body lines only (without the top and bottom borders)
    pub fn body(&self) -> &[String] {
        &self.lines[1..self.lines.len() - 1]
    }
}

impl fmt::Display for Bubble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Format `text` into a speech bubble wrapped at `max_width`.
///
/// Fails with `InvalidArgument` for blank text or a zero width.
pub fn format(text: &str, max_width: usize) -> Result<Bubble> {
    if max_width == 0 {
        return Err(CatFactsError::InvalidArgument(
            "max width must be at least 1".to_string(),
        ));
    }

    let wrapped = wrap(text, max_width);
    if wrapped.is_empty() {
        return Err(CatFactsError::InvalidArgument(
            "text must not be empty".to_string(),
        ));
    }

    let width = wrapped
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(format!(" {}", "_".repeat(width + 2)));

    let last = wrapped.len() - 1;
    for (i, line) in wrapped.iter().enumerate() {
        let (open, close) = match (i, wrapped.len()) {
            (_, 1) => ('<', '>'),
            (0, _) => ('/', '\\'),
            (i, _) if i == last => ('\\', '/'),
            _ => ('|', '|'),
        };
        lines.push(format!("{open} {line:<width$} {close}"));
    }

    lines.push(format!(" {}", "-".repeat(width + 2)));

    Ok(Bubble { lines })
}
