//! Terminal styling primitives
//!
//! Wraps the `colored` crate behind a small `Styler` that can be disabled
//! wholesale, turning every operation into a passthrough. All color choices in
//! the crate go through [`StyleName`] so descriptors and timer overrides stay
//! serializable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named terminal styles available to type descriptors and timer overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Muted style used for meta tokens and error traces.
    Gray,
}

impl StyleName {
    pub fn to_str(&self) -> &'static str {
        match self {
            StyleName::Black => "black",
            StyleName::Red => "red",
            StyleName::Green => "green",
            StyleName::Yellow => "yellow",
            StyleName::Blue => "blue",
            StyleName::Magenta => "magenta",
            StyleName::Cyan => "cyan",
            StyleName::White => "white",
            StyleName::Gray => "gray",
        }
    }

    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            StyleName::Black => Black,
            StyleName::Red => Red,
            StyleName::Green => Green,
            StyleName::Yellow => Yellow,
            StyleName::Blue => Blue,
            StyleName::Magenta => Magenta,
            StyleName::Cyan => Cyan,
            StyleName::White => White,
            StyleName::Gray => BrightBlack,
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for StyleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(StyleName::Black),
            "red" => Ok(StyleName::Red),
            "green" => Ok(StyleName::Green),
            "yellow" => Ok(StyleName::Yellow),
            "blue" => Ok(StyleName::Blue),
            "magenta" => Ok(StyleName::Magenta),
            "cyan" => Ok(StyleName::Cyan),
            "white" => Ok(StyleName::White),
            "gray" | "grey" => Ok(StyleName::Gray),
            _ => Err(format!("Invalid style name: '{}'", s)),
        }
    }
}

/// Style-application capability for composed lines.
///
/// When styling is disabled every method returns its input unchanged, so
/// tests and non-terminal sinks see plain text.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Paint `text` in the given color.
    pub fn paint(&self, style: StyleName, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        use colored::Colorize;
        text.color(style.color_code()).to_string()
    }

    /// Underline `text` without coloring it.
    pub fn underline(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        use colored::Colorize;
        text.underline().to_string()
    }

    /// Paint and underline `text` in one pass.
    pub fn paint_underline(&self, style: StyleName, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        use colored::Colorize;
        text.color(style.color_code()).underline().to_string()
    }

    /// Muted gray used for meta tokens and secondary error lines.
    pub fn muted(&self, text: &str) -> String {
        self.paint(StyleName::Gray, text)
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Pad `text` with trailing spaces up to `width` characters.
///
/// Width is measured in chars, not bytes, so multi-byte glyph badges pad the
/// same as ASCII ones. Text already at or beyond `width` is returned as-is.
pub(crate) fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        let mut padded = String::with_capacity(text.len() + (width - len));
        padded.push_str(text);
        for _ in len..width {
            padded.push(' ');
        }
        padded
    }
}
