//! Parser Framework
//!
//! Parser combinators over `&str` input, plus an operator-precedence
//! expression parser built on top of them.
//!
//! Every parser implements [`Parser`]: given a [`ParseContext`] (the unread
//! input and its [`Position`]) it returns a [`ParseOutcome`], either the
//! parsed value with the context after it or a [`ParseFailure`]. Contexts are
//! immutable values, so backtracking is just reusing an earlier context.
//!
//! ```
//! use parser_framework::{integer, one_char, parse_complete, Parser};
//!
//! let pair = integer().then_skip_right(one_char(',')).pair(integer());
//! assert_eq!(parse_complete(&pair, "12,34").unwrap(), (12, 34));
//! ```

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

pub mod combinators;
pub mod context;
pub mod error;
pub mod lazy;
pub mod outcome;
pub mod parser;
pub mod pratt;
pub mod primitives;
pub mod quoted;
pub mod repetition;
pub mod text;
pub mod traits;
pub mod until;

pub use common_framework::Position;
pub use combinators::{between, choice, Between, Bind, Choice, Filter, Map, Or, Pair, SkipLeft, SkipRight};
pub use context::ParseContext;
pub use error::ParseError;
pub use lazy::{lazy, Lazy};
pub use outcome::{failure, success, ParseFailure, ParseOutcome, Parsed};
pub use parser::{from_fn, parse, parse_complete, BoxedParser, FnParser};
pub use pratt::{
    expression, parenthesized_expression, tokenize, ExpressionParser, Operand, Operator,
    OperatorKind, Token, Tokenize,
};
pub use primitives::{
    end_of_input, literal, one_char, satisfy, scan_while, EndOfInput, Literal, OneChar, Satisfy,
    ScanWhile,
};
pub use quoted::{quoted_string, quoted_text};
pub use repetition::{Many, Optional, SeparatedBy};
pub use text::{
    any_char, any_of, inline_spaces, integer, is_new_line, letter_or_digit, many_except,
    many_letters_or_digits, many_satisfy, new_line, not_satisfy, one_char_text, skip_spaces,
    spaces, ManySatisfy,
};
pub use traits::Parser;
pub use until::{Until, UntilText};
