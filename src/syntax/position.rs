//! Line and display-column positions

use std::fmt;

use unicode_width::UnicodeWidthChar;

/// 1-based line and display column of a byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    /// Column in terminal cells, so wide characters count double
    pub column: usize,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };

    /// Position of byte `offset` in `text`.
    ///
    /// Offsets past the end or inside a multi-byte character are clamped
    /// back to the preceding character boundary.
    pub fn of(text: &str, offset: usize) -> Self {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        Self::START.advance(&text[..offset])
    }

    /// Position reached after walking over `segment` from here
    pub fn advance(self, segment: &str) -> Self {
        let mut pos = self;
        for ch in segment.chars() {
            if ch == '\n' {
                pos.line += 1;
                pos.column = 1;
            } else {
                pos.column += UnicodeWidthChar::width(ch).unwrap_or(1);
            }
        }
        pos
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
