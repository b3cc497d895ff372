use crate::context::ParseContext;
use crate::error::ParseError;
use crate::outcome::{ParseOutcome, Parsed};
use crate::traits::Parser;
use std::fmt;
use std::sync::Arc;

/// A type-erased, cheaply cloneable parser.
///
/// Clones share the same underlying parser, and the parser can be used from
/// several threads at once. Boxing is what allows a grammar rule to refer to
/// itself (see [`lazy`](crate::lazy)).
pub struct BoxedParser<'input, O> {
    inner: Arc<dyn Parser<'input, Output = O> + Send + Sync + 'input>,
}

impl<'input, O> BoxedParser<'input, O> {
    /// Boxes `parser`.
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'input, Output = O> + Send + Sync + 'input,
    {
        Self {
            inner: Arc::new(parser),
        }
    }
}

impl<'input, O> Clone for BoxedParser<'input, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<'input, O> fmt::Debug for BoxedParser<'input, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser").finish_non_exhaustive()
    }
}

impl<'input, O> Parser<'input> for BoxedParser<'input, O> {
    type Output = O;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, O> {
        self.inner.parse(context)
    }
}

/// A parser backed by a plain function or closure.
#[derive(Clone, Copy)]
pub struct FnParser<F> {
    f: F,
}

impl<'input, F, O> Parser<'input> for FnParser<F>
where
    F: Fn(ParseContext<'input>) -> ParseOutcome<'input, O>,
{
    type Output = O;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, O> {
        (self.f)(context)
    }
}

/// Turns a closure into a parser, for rules easier to write by hand.
pub fn from_fn<'input, F, O>(f: F) -> FnParser<F>
where
    F: Fn(ParseContext<'input>) -> ParseOutcome<'input, O>,
{
    FnParser { f }
}

/// Runs `parser` from the start of `text`.
pub fn parse<'input, P>(parser: &P, text: &'input str) -> ParseOutcome<'input, P::Output>
where
    P: Parser<'input> + ?Sized,
{
    parser.parse(ParseContext::from_text(text))
}

/// Runs `parser` over the whole of `text`, converting failures into [`ParseError`].
///
/// Input left over after a successful parse is an error too.
pub fn parse_complete<'input, P>(parser: &P, text: &'input str) -> Result<P::Output, ParseError>
where
    P: Parser<'input> + ?Sized,
{
    let Parsed { context, value } = parse(parser, text).map_err(|failure| failure.into_error())?;
    if !context.is_empty() {
        return Err(ParseError::TrailingInput {
            remaining: context.remaining().to_string(),
            position: context.position(),
        });
    }
    Ok(value)
}
