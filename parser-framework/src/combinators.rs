//! Sequencing, mapping and alternation.
//!
//! On failure every combinator here returns the failure of the step that
//! failed, so the reported context is the furthest point reached. Any retry
//! starts from the context the combinator itself was given.

use crate::context::ParseContext;
use crate::outcome::{failure, success, ParseFailure, ParseOutcome, Parsed};
use crate::parser::BoxedParser;
use crate::traits::Parser;

/// See [`Parser::map`].
#[derive(Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    map: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, map: F) -> Self {
        Self { parser, map }
    }
}

impl<'input, P, F, O> Parser<'input> for Map<P, F>
where
    P: Parser<'input>,
    F: Fn(P::Output) -> O,
{
    type Output = O;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, O> {
        self.parser.parse(context).map(|parsed| parsed.map(&self.map))
    }
}

/// See [`Parser::bind`].
#[derive(Clone, Copy)]
pub struct Bind<P, F> {
    parser: P,
    next: F,
}

impl<P, F> Bind<P, F> {
    pub fn new(parser: P, next: F) -> Self {
        Self { parser, next }
    }
}

impl<'input, P, F, Q> Parser<'input> for Bind<P, F>
where
    P: Parser<'input>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'input>,
{
    type Output = Q::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Q::Output> {
        let first = self.parser.parse(context)?;
        (self.next)(first.value).parse(first.context)
    }
}

/// See [`Parser::filter`].
#[derive(Clone, Copy)]
pub struct Filter<P, F> {
    parser: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self { parser, predicate }
    }
}

impl<'input, P, F> Parser<'input> for Filter<P, F>
where
    P: Parser<'input>,
    F: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, P::Output> {
        let parsed = self.parser.parse(context)?;
        if (self.predicate)(&parsed.value) {
            Ok(parsed)
        } else {
            failure(context, "predicate not satisfied")
        }
    }
}

/// See [`Parser::or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B> {
    left: A,
    right: B,
}

impl<A, B> Or<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<'input, A, B> Parser<'input> for Or<A, B>
where
    A: Parser<'input>,
    B: Parser<'input, Output = A::Output>,
{
    type Output = A::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, A::Output> {
        let left_failure = match self.left.parse(context) {
            Ok(parsed) => return Ok(parsed),
            Err(failure) => failure,
        };
        match self.right.parse(context) {
            Ok(parsed) => Ok(parsed),
            Err(right_failure) => Err(join_failures(context, vec![left_failure, right_failure])),
        }
    }
}

/// Left-to-right alternation over any number of parsers; the first success wins.
#[derive(Debug)]
pub struct Choice<'input, O> {
    parsers: Vec<BoxedParser<'input, O>>,
}

impl<'input, O> Clone for Choice<'input, O> {
    fn clone(&self) -> Self {
        Self {
            parsers: self.parsers.clone(),
        }
    }
}

impl<'input, O> Parser<'input> for Choice<'input, O> {
    type Output = O;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, O> {
        let mut failures = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            match parser.parse(context) {
                Ok(parsed) => return Ok(parsed),
                Err(failure) => failures.push(failure),
            }
        }
        if failures.is_empty() {
            return failure(context, "no alternatives");
        }
        Err(join_failures(context, failures))
    }
}

/// Builds a [`Choice`].
pub fn choice<'input, O>(parsers: Vec<BoxedParser<'input, O>>) -> Choice<'input, O> {
    Choice { parsers }
}

/// Merges the failures of every attempted branch: messages are joined
/// with `" AND "` and the furthest context is kept.
fn join_failures<'input>(
    context: ParseContext<'input>,
    failures: Vec<ParseFailure<'input>>,
) -> ParseFailure<'input> {
    let message = failures
        .iter()
        .map(|failure| failure.message.as_str())
        .collect::<Vec<_>>()
        .join(" AND ");
    let start = ParseFailure {
        context,
        message: String::new(),
    };
    let mut furthest = failures.into_iter().fold(start, ParseFailure::furthest);
    furthest.message = message;
    furthest
}

/// See [`Parser::pair`].
#[derive(Debug, Clone, Copy)]
pub struct Pair<A, B> {
    left: A,
    right: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<'input, A, B> Parser<'input> for Pair<A, B>
where
    A: Parser<'input>,
    B: Parser<'input>,
{
    type Output = (A::Output, B::Output);

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        let left = self.left.parse(context)?;
        let right = self.right.parse(left.context)?;
        success(right.context, (left.value, right.value))
    }
}

/// See [`Parser::then_skip_right`].
#[derive(Debug, Clone, Copy)]
pub struct SkipRight<A, B> {
    pair: Pair<A, B>,
}

impl<A, B> SkipRight<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self {
            pair: Pair::new(left, right),
        }
    }
}

impl<'input, A, B> Parser<'input> for SkipRight<A, B>
where
    A: Parser<'input>,
    B: Parser<'input>,
{
    type Output = A::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, A::Output> {
        self.pair
            .parse(context)
            .map(|parsed| parsed.map(|(left, _)| left))
    }
}

/// See [`Parser::then_skip_left`].
#[derive(Debug, Clone, Copy)]
pub struct SkipLeft<A, B> {
    pair: Pair<A, B>,
}

impl<A, B> SkipLeft<A, B> {
    pub fn new(left: A, right: B) -> Self {
        Self {
            pair: Pair::new(left, right),
        }
    }
}

impl<'input, A, B> Parser<'input> for SkipLeft<A, B>
where
    A: Parser<'input>,
    B: Parser<'input>,
{
    type Output = B::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, B::Output> {
        self.pair
            .parse(context)
            .map(|parsed| parsed.map(|(_, right)| right))
    }
}

/// Parses `left middle right` and returns all three values.
#[derive(Debug, Clone, Copy)]
pub struct Between<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<'input, L, M, R> Parser<'input> for Between<L, M, R>
where
    L: Parser<'input>,
    M: Parser<'input>,
    R: Parser<'input>,
{
    type Output = (L::Output, M::Output, R::Output);

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        let left = self.left.parse(context)?;
        let middle = self.middle.parse(left.context)?;
        let Parsed { context, value } = self.right.parse(middle.context)?;
        success(context, (left.value, middle.value, value))
    }
}

/// Builds a [`Between`]. Project the middle value out with `map` if the
/// delimiters are not needed.
pub fn between<L, M, R>(left: L, middle: M, right: R) -> Between<L, M, R> {
    Between {
        left,
        middle,
        right,
    }
}
