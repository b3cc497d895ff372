//! Repetition and optionality.

use crate::context::ParseContext;
use crate::outcome::{success, ParseOutcome};
use crate::traits::Parser;

/// See [`Parser::many`].
#[derive(Debug, Clone, Copy)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<'input, P> Parser<'input> for Many<P>
where
    P: Parser<'input>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        let mut values = Vec::new();
        let mut current = context;
        loop {
            match self.parser.parse(current) {
                Ok(parsed) => {
                    let stalled = parsed.context.position().offset == current.position().offset;
                    values.push(parsed.value);
                    current = parsed.context;
                    if stalled {
                        // A parser that matches without consuming would repeat forever.
                        log_debug!("many: no progress at {}, stopping", current.position());
                        break;
                    }
                }
                Err(failure) if values.is_empty() => return Err(failure),
                Err(_) => break,
            }
        }
        success(current, values)
    }
}

/// See [`Parser::optional`].
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<'input, P> Parser<'input> for Optional<P>
where
    P: Parser<'input>,
{
    type Output = Option<P::Output>;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        match self.parser.parse(context) {
            Ok(parsed) => Ok(parsed.map(Some)),
            Err(_) => success(context, None),
        }
    }
}

/// See [`Parser::separated_by`].
#[derive(Debug, Clone, Copy)]
pub struct SeparatedBy<P, S> {
    item: P,
    separator: S,
    match_trailing_separator: bool,
}

impl<P, S> SeparatedBy<P, S> {
    pub fn new(item: P, separator: S, match_trailing_separator: bool) -> Self {
        Self {
            item,
            separator,
            match_trailing_separator,
        }
    }
}

impl<'input, P, S> Parser<'input> for SeparatedBy<P, S>
where
    P: Parser<'input>,
    S: Parser<'input>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        let first = self.item.parse(context)?;
        let mut values = vec![first.value];
        let mut current = first.context;

        loop {
            let Ok(separator) = self.separator.parse(current) else {
                break;
            };
            match self.item.parse(separator.context) {
                Ok(item) => {
                    if item.context.position().offset == current.position().offset {
                        log_debug!("separated_by: no progress at {}, stopping", current.position());
                        break;
                    }
                    values.push(item.value);
                    current = item.context;
                }
                Err(_) => {
                    if self.match_trailing_separator {
                        current = separator.context;
                    }
                    break;
                }
            }
        }

        success(current, values)
    }
}
