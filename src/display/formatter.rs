//! Output coloring using termimad's crossterm styles

use termimad::crossterm::style::{Color, Stylize};

use crate::display::terminal::should_use_colors;

/// The pieces of output that get their own color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Banner,
    Bubble,
    Cat,
    Divider,
}

impl Part {
    fn color(self) -> Color {
        match self {
            Part::Banner => Color::Cyan,
            Part::Bubble => Color::White,
            Part::Cat => Color::Yellow,
            Part::Divider => Color::DarkGrey,
        }
    }
}

/// Colors output, or leaves it alone when colors are off
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette following NO_COLOR / CLICOLOR / TTY detection
    pub fn detect() -> Self {
        Self {
            enabled: should_use_colors(),
        }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    pub fn paint(&self, part: Part, text: &str) -> String {
        if self.enabled {
            text.with(part.color()).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        assert_eq!(Palette::plain().paint(Part::Cat, "meow"), "meow");
    }

    #[test]
    fn test_colored_palette_adds_escapes() {
        let painted = Palette::colored().paint(Part::Banner, "Cat Facts");
        assert!(painted.contains("Cat Facts"));
        assert!(painted.contains('\u{1b}'));
    }

    #[test]
    fn test_each_part_has_distinct_color() {
        let parts = [Part::Banner, Part::Bubble, Part::Cat, Part::Divider];
        for (i, a) in parts.iter().enumerate() {
            for b in &parts[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }
}
