//! cat-facts: random cat facts in an ASCII speech bubble.
//!
//! - [`facts`]: fetch a fact, or pick one from the built-in pool
//! - [`bubble`]: word-wrap text into a bordered speech bubble
//! - [`display`]: banner, cat art and colors
//! - [`cli`]: the command-line loop tying them together

pub mod bubble;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod facts;
pub mod logging;

pub use bubble::{Bubble, DEFAULT_MAX_WIDTH};
pub use config::Config;
pub use error::{CatFactsError, Result};
pub use facts::{FactProvider, FALLBACK_FACTS};
