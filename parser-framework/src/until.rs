//! Parsing a bounded region of the input.
//!
//! Both combinators isolate the text before a delimiter and run an inner
//! parser on it as if it were a whole input of its own (positions restart
//! at zero). Failures from the inner parser are relocated back onto the
//! outer input before being returned.

use crate::context::ParseContext;
use crate::outcome::{failure, success, ParseFailure, ParseOutcome};
use crate::traits::Parser;

/// See [`Parser::until_text`].
#[derive(Debug, Clone)]
pub struct UntilText<P> {
    parser: P,
    delimiter: String,
    skip_delimiter: bool,
}

impl<P> UntilText<P> {
    pub fn new(parser: P, delimiter: impl Into<String>, skip_delimiter: bool) -> Self {
        Self {
            parser,
            delimiter: delimiter.into(),
            skip_delimiter,
        }
    }
}

impl<'input, P> Parser<'input> for UntilText<P>
where
    P: Parser<'input>,
{
    type Output = P::Output;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, P::Output> {
        let remaining = context.remaining();
        let Some(index) = remaining.find(self.delimiter.as_str()) else {
            return failure(context, format!("'{}' not found", self.delimiter));
        };

        let prefix = &remaining[..index];
        let inner = parse_region(&self.parser, context, prefix)?;

        let mut next = context.forward_str(prefix);
        if self.skip_delimiter {
            next = next.forward_str(&remaining[index..index + self.delimiter.len()]);
        }
        success(next, inner)
    }
}

/// See [`Parser::until`].
///
/// The limit parser is tried at every character offset until it matches,
/// so the cost is the input length times the cost of the limit parser.
/// Keep limit parsers cheap (a literal or a short alternation).
#[derive(Debug, Clone, Copy)]
pub struct Until<P, L> {
    parser: P,
    limit: L,
}

impl<P, L> Until<P, L> {
    pub fn new(parser: P, limit: L) -> Self {
        Self { parser, limit }
    }
}

impl<'input, P, L> Parser<'input> for Until<P, L>
where
    P: Parser<'input>,
    L: Parser<'input>,
{
    type Output = (P::Output, L::Output);

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        let mut scan = context;
        let limit = loop {
            if let Ok(parsed) = self.limit.parse(scan) {
                break parsed;
            }
            match scan.peek() {
                Some(ch) => scan = scan.forward_char(ch),
                None => {
                    log_debug!("until: limit never matched after {}", context.position());
                    return failure(context, "limit parser not satisfied");
                }
            }
        };

        let remaining = context.remaining();
        let prefix = &remaining[..remaining.len() - scan.remaining().len()];
        let inner = parse_region(&self.parser, context, prefix)?;

        success(limit.context, (inner, limit.value))
    }
}

/// Runs `parser` over `region`, a prefix of `context`'s remaining input.
fn parse_region<'input, P>(
    parser: &P,
    context: ParseContext<'input>,
    region: &'input str,
) -> Result<P::Output, ParseFailure<'input>>
where
    P: Parser<'input>,
{
    match parser.parse(ParseContext::from_text(region)) {
        Ok(parsed) => Ok(parsed.value),
        Err(inner) => {
            // A failure that does not point into the region is reported at its start.
            let reached = region
                .len()
                .checked_sub(inner.context.remaining().len())
                .filter(|&reached| region.is_char_boundary(reached))
                .unwrap_or(0);
            Err(ParseFailure {
                context: context.forward_str(&region[..reached]),
                message: inner.message,
            })
        }
    }
}
