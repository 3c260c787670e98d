//! Terminal display module
//!
//! Banner, cat art and divider, colored when the terminal supports it.

mod art;
mod formatter;
mod terminal;

pub use art::{divider, BANNER, CAT_ART};
pub use formatter::{Palette, Part};
pub use terminal::should_use_colors;
