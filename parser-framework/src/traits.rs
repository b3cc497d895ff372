use crate::combinators::{Bind, Filter, Map, Or, Pair, SkipLeft, SkipRight};
use crate::context::ParseContext;
use crate::outcome::ParseOutcome;
use crate::parser::BoxedParser;
use crate::repetition::{Many, Optional, SeparatedBy};
use crate::until::{Until, UntilText};

/// A parser: a pure function from a context to an outcome.
///
/// Parsing must not mutate shared state, so the same parser can be run any
/// number of times against the same context (that is what makes backtracking
/// safe). Parsers are built once and reused; combinators take them by value,
/// so clone a parser to use it in several places.
///
/// The provided methods are the combinator algebra. They only build new
/// parsers; nothing runs until [`Parser::parse`] is called.
pub trait Parser<'input> {
    /// The value produced on success.
    type Output;

    /// Runs the parser against `context`.
    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output>;

    /// Transforms the value of a successful parse.
    fn map<O, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O,
    {
        Map::new(self, f)
    }

    /// Monadic sequencing: uses the value of this parser to build the next
    /// one, which runs on the context this parser left behind.
    fn bind<Q, F>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Q,
        Q: Parser<'input>,
    {
        Bind::new(self, f)
    }

    /// Fails unless the produced value satisfies `predicate`.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Tries this parser, then `other` from the same starting context.
    fn or<B>(self, other: B) -> Or<Self, B>
    where
        Self: Sized,
        B: Parser<'input, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Runs this parser then `right`, producing both values.
    fn pair<B>(self, right: B) -> Pair<Self, B>
    where
        Self: Sized,
        B: Parser<'input>,
    {
        Pair::new(self, right)
    }

    /// Runs this parser then `right`, keeping only this parser's value.
    fn then_skip_right<B>(self, right: B) -> SkipRight<Self, B>
    where
        Self: Sized,
        B: Parser<'input>,
    {
        SkipRight::new(self, right)
    }

    /// Runs this parser then `right`, keeping only `right`'s value.
    fn then_skip_left<B>(self, right: B) -> SkipLeft<Self, B>
    where
        Self: Sized,
        B: Parser<'input>,
    {
        SkipLeft::new(self, right)
    }

    /// One or more repetitions.
    ///
    /// For zero or more, wrap the result in [`Parser::optional`].
    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many::new(self)
    }

    /// Never fails: produces `None` without consuming input when this parser fails.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Parses `item (separator item)*`.
    ///
    /// With `match_trailing_separator`, a separator that is not followed by
    /// an item is consumed as well; otherwise it is left in the input.
    fn separated_by<S>(self, separator: S, match_trailing_separator: bool) -> SeparatedBy<Self, S>
    where
        Self: Sized,
        S: Parser<'input>,
    {
        SeparatedBy::new(self, separator, match_trailing_separator)
    }

    /// Runs this parser on the input before the first occurrence of `delimiter`.
    fn until_text(self, delimiter: impl Into<String>, skip_delimiter: bool) -> UntilText<Self>
    where
        Self: Sized,
    {
        UntilText::new(self, delimiter, skip_delimiter)
    }

    /// Runs this parser on the input before the first position where `limit` matches.
    fn until<L>(self, limit: L) -> Until<Self, L>
    where
        Self: Sized,
        L: Parser<'input>,
    {
        Until::new(self, limit)
    }

    /// Collects the produced characters into a `String`.
    fn as_string(self) -> Map<Self, fn(Self::Output) -> String>
    where
        Self: Sized,
        Self::Output: IntoIterator<Item = char>,
    {
        let collect: fn(Self::Output) -> String = |chars| chars.into_iter().collect();
        Map::new(self, collect)
    }

    /// Erases the parser type so it can be stored, shared and referenced recursively.
    fn boxed(self) -> BoxedParser<'input, Self::Output>
    where
        Self: Sized + Send + Sync + 'input,
    {
        BoxedParser::new(self)
    }
}
