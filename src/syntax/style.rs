//! Colours, styles and themes
//!
//! A theme maps each token class to the terminal style it is drawn with.

use std::collections::HashMap;

use super::tokens::TokenClass;
use crate::error::{HighlightError, Result};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a kebab-case colour name such as `bright-blue`
    pub fn from_name(name: &str) -> Result<Self> {
        let color = match name.to_lowercase().as_str() {
            "default" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "bright-black" | "grey" | "gray" => Color::BrightBlack,
            "bright-red" => Color::BrightRed,
            "bright-green" => Color::BrightGreen,
            "bright-yellow" => Color::BrightYellow,
            "bright-blue" => Color::BrightBlue,
            "bright-magenta" => Color::BrightMagenta,
            "bright-cyan" => Color::BrightCyan,
            "bright-white" => Color::BrightWhite,
            _ => return Err(HighlightError::UnknownColor(name.to_string())),
        };
        Ok(color)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        use crossterm::style::Color as Term;
        match color {
            Color::Default => Term::Reset,
            Color::Black => Term::Black,
            Color::Red => Term::DarkRed,
            Color::Green => Term::DarkGreen,
            Color::Yellow => Term::DarkYellow,
            Color::Blue => Term::DarkBlue,
            Color::Magenta => Term::DarkMagenta,
            Color::Cyan => Term::DarkCyan,
            Color::White => Term::Grey,
            Color::BrightBlack => Term::DarkGrey,
            Color::BrightRed => Term::Red,
            Color::BrightGreen => Term::Green,
            Color::BrightYellow => Term::Yellow,
            Color::BrightBlue => Term::Blue,
            Color::BrightMagenta => Term::Magenta,
            Color::BrightCyan => Term::Cyan,
            Color::BrightWhite => Term::White,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Style assignment for every token class
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    styles: HashMap<TokenClass, Style>,
}

impl Theme {
    /// Override the style of one class
    pub fn set(&mut self, class: TokenClass, style: Style) {
        self.styles.insert(class, style);
    }

    /// Style to draw a token of this class with
    pub fn style_for(&self, class: TokenClass) -> Style {
        self.styles
            .get(&class)
            .copied()
            .unwrap_or_else(|| class.default_style())
    }
}

impl Default for Theme {
    fn default() -> Self {
        let styles = TokenClass::ALL
            .into_iter()
            .map(|class| (class, class.default_style()))
            .collect();
        Self { styles }
    }
}
