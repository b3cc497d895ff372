use crate::context::ParseContext;
use crate::error::ParseError;

/// A successful parsing step: the produced value and the context after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<'input, T> {
    pub context: ParseContext<'input>,
    pub value: T,
}

impl<'input, T> Parsed<'input, T> {
    /// Transforms the value, keeping the context.
    pub fn map<U, F>(self, f: F) -> Parsed<'input, U>
    where
        F: FnOnce(T) -> U,
    {
        Parsed {
            context: self.context,
            value: f(self.value),
        }
    }
}

/// A failed parsing step.
///
/// `context` is where the failure was detected and is informational only:
/// combinators resume alternatives from their own saved context, never from this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure<'input> {
    pub context: ParseContext<'input>,
    pub message: String,
}

impl<'input> ParseFailure<'input> {
    /// Keeps whichever of two failures got further into the input.
    /// Ties keep `self`.
    pub fn furthest(self, other: ParseFailure<'input>) -> ParseFailure<'input> {
        if other.context.position().offset > self.context.position().offset {
            other
        } else {
            self
        }
    }

    /// Detaches the failure from the input so it can outlive it.
    pub fn into_error(self) -> ParseError {
        ParseError::Failed {
            message: self.message,
            position: self.context.position(),
        }
    }
}

/// The uniform result of running a parser.
pub type ParseOutcome<'input, T> = Result<Parsed<'input, T>, ParseFailure<'input>>;

/// Builds a successful outcome.
pub fn success<T>(context: ParseContext<'_>, value: T) -> ParseOutcome<'_, T> {
    Ok(Parsed { context, value })
}

/// Builds a failed outcome.
pub fn failure<T>(context: ParseContext<'_>, message: impl Into<String>) -> ParseOutcome<'_, T> {
    Err(ParseFailure {
        context,
        message: message.into(),
    })
}
