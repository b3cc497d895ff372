//! Ready-made text parsers built from the primitives.

use crate::combinators::Map;
use crate::context::ParseContext;
use crate::outcome::{failure, success, ParseOutcome};
use crate::parser::from_fn;
use crate::primitives::{one_char, satisfy, scan_while, OneChar, Satisfy};
use crate::traits::Parser;

/// True for `'\r'` and `'\n'`.
pub fn is_new_line(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Consumes one or more characters satisfying a predicate and returns them
/// as a slice of the input.
#[derive(Clone, Copy)]
pub struct ManySatisfy<F> {
    predicate: F,
}

impl<'input, F> Parser<'input> for ManySatisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = &'input str;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, &'input str> {
        let remaining = context.remaining();
        let end = remaining
            .char_indices()
            .find(|&(_, ch)| !(self.predicate)(ch))
            .map_or(remaining.len(), |(index, _)| index);
        if end == 0 {
            return match context.peek() {
                Some(ch) => failure(context, format!("'{}' does not satisfy condition", ch)),
                None => failure(context, "end of input"),
            };
        }
        let matched = &remaining[..end];
        success(context.forward_str(matched), matched)
    }
}

/// One or more characters for which `predicate` holds.
pub fn many_satisfy<F>(predicate: F) -> ManySatisfy<F>
where
    F: Fn(char) -> bool,
{
    ManySatisfy { predicate }
}

/// One or more characters for which `predicate` does not hold.
pub fn many_except<F>(predicate: F) -> ManySatisfy<impl Fn(char) -> bool + Clone>
where
    F: Fn(char) -> bool + Clone,
{
    many_satisfy(move |ch| !predicate(ch))
}

/// A single character for which `predicate` does not hold.
pub fn not_satisfy<F>(predicate: F) -> Satisfy<impl Fn(char) -> bool + Clone>
where
    F: Fn(char) -> bool + Clone,
{
    satisfy(move |ch| !predicate(ch))
}

/// Any single character.
pub fn any_char() -> Satisfy<fn(char) -> bool> {
    let any: fn(char) -> bool = |_| true;
    satisfy(any)
}

/// One or more characters taken from `chars`.
pub fn any_of(chars: &str) -> ManySatisfy<impl Fn(char) -> bool + Clone> {
    let set: Vec<char> = chars.chars().collect();
    many_satisfy(move |ch| set.contains(&ch))
}

/// A single letter or digit.
pub fn letter_or_digit() -> Satisfy<fn(char) -> bool> {
    satisfy(char::is_alphanumeric as fn(char) -> bool)
}

/// One or more letters or digits.
pub fn many_letters_or_digits() -> ManySatisfy<fn(char) -> bool> {
    many_satisfy(char::is_alphanumeric as fn(char) -> bool)
}

/// A run of ASCII digits read as an `i64`.
pub fn integer<'input>() -> impl Parser<'input, Output = i64> + Clone {
    from_fn(|context: ParseContext<'input>| {
        let digits = many_satisfy(|ch: char| ch.is_ascii_digit()).parse(context)?;
        match digits.value.parse::<i64>() {
            Ok(value) => success(digits.context, value),
            Err(err) => failure(context, format!("invalid integer '{}': {}", digits.value, err)),
        }
    })
}

/// One or more whitespace characters.
pub fn spaces() -> ManySatisfy<fn(char) -> bool> {
    many_satisfy(char::is_whitespace as fn(char) -> bool)
}

/// Zero or more whitespace characters; never fails.
pub fn skip_spaces<'input>() -> impl Parser<'input, Output = &'input str> + Clone {
    scan_while(|window: &str| window.chars().next_back().map_or(true, char::is_whitespace))
}

/// One or more spaces or tabs.
pub fn inline_spaces() -> ManySatisfy<impl Fn(char) -> bool + Clone> {
    any_of(" \t")
}

/// One or more line break characters.
pub fn new_line() -> ManySatisfy<fn(char) -> bool> {
    many_satisfy(is_new_line as fn(char) -> bool)
}

/// Matches `expected` and returns it as a `String`.
pub fn one_char_text(expected: char) -> Map<OneChar, fn(char) -> String> {
    let to_string: fn(char) -> String = String::from;
    Map::new(one_char(expected), to_string)
}
