use common_framework::Position;

/// An immutable view of the input that has not been consumed yet.
///
/// Contexts are cheap `Copy` values that borrow the original text, so every
/// parsing step can hand out a new context without copying consumed input.
/// Backtracking is simply reusing an earlier context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseContext<'input> {
    remaining: &'input str,
    position: Position,
}

impl<'input> ParseContext<'input> {
    /// Creates a context at position zero covering the whole text.
    pub fn from_text(text: &'input str) -> Self {
        Self {
            remaining: text,
            position: Position::new(),
        }
    }

    /// Returns the input not consumed yet.
    pub fn remaining(&self) -> &'input str {
        self.remaining
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns true if all input has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remaining.chars().next()
    }

    /// Advances by `count` characters.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `count` characters remain.
    pub fn forward(&self, count: usize) -> Self {
        let split = if count == 0 {
            0
        } else {
            match self.remaining.char_indices().nth(count) {
                Some((index, _)) => index,
                None => {
                    assert!(
                        self.remaining.chars().count() == count,
                        "ParseContext: cannot advance by {} characters at {}",
                        count,
                        self.position
                    );
                    self.remaining.len()
                }
            }
        };
        self.forward_str(&self.remaining[..split])
    }

    /// Advances past a single character `ch`, which must be the next one.
    pub fn forward_char(&self, ch: char) -> Self {
        debug_assert_eq!(self.peek(), Some(ch));
        Self {
            remaining: &self.remaining[ch.len_utf8()..],
            position: self.position.advance(ch),
        }
    }

    /// Advances past `prefix`, which must be a prefix of the remaining input.
    pub fn forward_str(&self, prefix: &str) -> Self {
        debug_assert!(self.remaining.starts_with(prefix));
        Self {
            remaining: &self.remaining[prefix.len()..],
            position: self.position.advance_str(prefix),
        }
    }
}

impl<'input> From<&'input str> for ParseContext<'input> {
    fn from(text: &'input str) -> Self {
        Self::from_text(text)
    }
}
