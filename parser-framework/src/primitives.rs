//! Leaf parsers that look at characters directly.

use crate::context::ParseContext;
use crate::outcome::{failure, success, ParseOutcome};
use crate::traits::Parser;

/// Matches one specific character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneChar {
    expected: char,
}

impl<'input> Parser<'input> for OneChar {
    type Output = char;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, char> {
        match context.peek() {
            None => failure(context, "end of input"),
            Some(ch) if ch == self.expected => success(context.forward_char(ch), ch),
            Some(ch) => failure(
                context,
                format!("expected '{}' but found '{}'", self.expected, ch),
            ),
        }
    }
}

/// Matches `expected`.
pub fn one_char(expected: char) -> OneChar {
    OneChar { expected }
}

/// Matches one character satisfying a predicate.
#[derive(Clone, Copy)]
pub struct Satisfy<F> {
    predicate: F,
}

impl<'input, F> Parser<'input> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, char> {
        match context.peek() {
            None => failure(context, "end of input"),
            Some(ch) if (self.predicate)(ch) => success(context.forward_char(ch), ch),
            Some(ch) => failure(context, format!("'{}' does not satisfy condition", ch)),
        }
    }
}

/// Matches one character for which `predicate` holds.
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy { predicate }
}

/// Matches a literal piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
}

impl<'input> Parser<'input> for Literal {
    type Output = &'input str;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, &'input str> {
        let remaining = context.remaining();
        if remaining.starts_with(self.text.as_str()) {
            let matched = &remaining[..self.text.len()];
            return success(context.forward_str(matched), matched);
        }
        if remaining.chars().count() < self.text.chars().count() {
            return failure(context, format!("end of input while expecting '{}'", self.text));
        }
        let found: String = remaining.chars().take(self.text.chars().count()).collect();
        failure(context, format!("'{}' not matching '{}'", self.text, found))
    }
}

/// Matches `text` exactly.
pub fn literal(text: impl Into<String>) -> Literal {
    Literal { text: text.into() }
}

/// Consumes input while a predicate over the consumed-so-far window holds.
///
/// The predicate sees the window grow one character at a time, starting
/// from the empty window, so it can inspect the tail of what was scanned
/// (for example to notice an escaped quote).
#[derive(Clone, Copy)]
pub struct ScanWhile<F> {
    predicate: F,
}

impl<'input, F> Parser<'input> for ScanWhile<F>
where
    F: Fn(&str) -> bool,
{
    type Output = &'input str;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, &'input str> {
        let remaining = context.remaining();
        if !(self.predicate)("") {
            return failure(context, "nothing matched");
        }

        // Byte length of the longest window accepted so far.
        let mut accepted = 0;
        for (index, ch) in remaining.char_indices() {
            let end = index + ch.len_utf8();
            if !(self.predicate)(&remaining[..end]) {
                break;
            }
            accepted = end;
        }

        let matched = &remaining[..accepted];
        success(context.forward_str(matched), matched)
    }
}

/// Builds a [`ScanWhile`] parser.
pub fn scan_while<F>(predicate: F) -> ScanWhile<F>
where
    F: Fn(&str) -> bool,
{
    ScanWhile { predicate }
}

/// Succeeds only at the end of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndOfInput;

impl<'input> Parser<'input> for EndOfInput {
    type Output = ();

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, ()> {
        if context.is_empty() {
            success(context, ())
        } else {
            failure(context, "expected end of input")
        }
    }
}

/// Matches the end of the input.
pub fn end_of_input() -> EndOfInput {
    EndOfInput
}
