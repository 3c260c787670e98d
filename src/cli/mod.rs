//! Command-line interface module
//!
//! Argument validation and the main `show` loop: fetch a fact, wrap it
//! in a bubble, print it under the banner with the cat below.

pub mod show;

/// Parse the `--count` value, which must be a positive integer
pub fn parse_count(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err("--count must be a positive integer.".to_string()),
    }
}
