use std::fmt;

/// Represents a location in the source text.
///
/// All three fields count characters (not bytes) and start at zero.
/// A newline moves to the next line and resets the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Number of characters consumed since the start of the input
    pub offset: usize,
    /// Line number (0-indexed)
    pub line: usize,
    /// Column number (0-indexed)
    pub column: usize,
}

impl Position {
    /// Creates a position at the start of the input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the position after consuming a single character.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            Self {
                offset: self.offset + 1,
                line: self.line + 1,
                column: 0,
            }
        } else {
            Self {
                offset: self.offset + 1,
                line: self.line,
                column: self.column + 1,
            }
        }
    }

    /// Returns the position after consuming every character of `text`, in order.
    pub fn advance_str(self, text: &str) -> Self {
        text.chars().fold(self, Position::advance)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
