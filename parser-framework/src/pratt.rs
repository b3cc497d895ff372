//! Operator-precedence expression parsing.
//!
//! Pratt parsing (precedence climbing) handles binary operators without a
//! separate grammar rule per precedence level. Each operator carries a
//! precedence; the right-hand side of an operator is parsed with a threshold
//! one above that precedence, which makes chains of equal-precedence
//! operators associate to the left.

use crate::combinators::between;
use crate::context::ParseContext;
use crate::lazy::lazy;
use crate::outcome::{success, ParseOutcome, Parsed};
use crate::parser::BoxedParser;
use crate::traits::Parser;
use std::fmt;
use std::sync::Arc;

/// Where an operator sits relative to its operands.
///
/// Only infix operators take part in expression parsing; the others are
/// accepted in operator tables and skipped when looking for an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Infix,
    Prefix,
    Postfix,
}

/// An operator token and its precedence. Higher binds tighter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Operator {
    pub kind: OperatorKind,
    pub text: String,
    pub precedence: i32,
}

impl Operator {
    pub fn new(kind: OperatorKind, text: impl Into<String>, precedence: i32) -> Self {
        Self {
            kind,
            text: text.into(),
            precedence,
        }
    }

    /// Creates an infix operator.
    pub fn infix(text: impl Into<String>, precedence: i32) -> Self {
        Self::new(OperatorKind::Infix, text, precedence)
    }
}

/// An expression tree. Evaluating it is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand<T> {
    /// A single operand.
    Leaf(T),
    /// `left operator right`.
    Binary {
        left: Box<Operand<T>>,
        right: Box<Operand<T>>,
        operator: Operator,
    },
}

impl<T> Operand<T> {
    pub fn binary(left: Operand<T>, right: Operand<T>, operator: Operator) -> Self {
        Operand::Binary {
            left: Box::new(left),
            right: Box::new(right),
            operator,
        }
    }
}

/// One element of a tokenized expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<T> {
    Operand(T),
    Operator(Operator),
}

/// Splits `operand (operator operand)*` into a flat token list without
/// building a tree. See [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokenize<P> {
    operand: P,
    operators: Arc<[Operator]>,
}

impl<'input, P> Parser<'input> for Tokenize<P>
where
    P: Parser<'input>,
{
    type Output = Vec<Token<P::Output>>;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Self::Output> {
        let first = self.operand.parse(context)?;
        let mut tokens = vec![Token::Operand(first.value)];
        let mut current = first.context;

        while let Some((operator, after_operator)) = match_operator(&self.operators, current) {
            // An operator without a following operand is an error, as in expressions.
            let operand = self.operand.parse(after_operator)?;
            tokens.push(Token::Operator(operator.clone()));
            tokens.push(Token::Operand(operand.value));
            current = operand.context;
        }

        success(current, tokens)
    }
}

/// Tokenizes `operand (operator operand)*`.
///
/// Operators are matched the same way as in [`ExpressionParser`]. Tokenizing
/// stops before the first position where no infix operator matches, leaving
/// the rest of the input unconsumed.
pub fn tokenize<P>(operand: P, operators: &[Operator]) -> Tokenize<P> {
    Tokenize {
        operand,
        operators: operators.into(),
    }
}

/// Parses binary-operator expressions over a caller-supplied operand parser.
///
/// Operators are tried in declaration order at each position and the first
/// one whose text matches is taken. Overlapping tokens such as `-` and `->`
/// therefore need the longer one declared first.
pub struct ExpressionParser<'input, T> {
    primary: BoxedParser<'input, Operand<T>>,
    operators: Arc<[Operator]>,
    min_precedence: i32,
}

impl<'input, T: 'input> ExpressionParser<'input, T> {
    /// An expression parser whose primaries are bare operands.
    pub fn new<P>(operand: P, operators: Vec<Operator>) -> Self
    where
        P: Parser<'input, Output = T> + Send + Sync + 'input,
    {
        Self {
            primary: operand.map(Operand::Leaf).boxed(),
            operators: operators.into(),
            min_precedence: 0,
        }
    }

    /// An expression parser that also accepts parenthesized sub-expressions,
    /// delimited by `open` and `close`.
    pub fn with_parentheses<P, Open, Close>(
        operand: P,
        open: Open,
        close: Close,
        operators: Vec<Operator>,
    ) -> Self
    where
        P: Parser<'input, Output = T> + Send + Sync + 'input,
        Open: Parser<'input> + Send + Sync + 'input,
        Close: Parser<'input> + Send + Sync + 'input,
    {
        Self::parenthesized(
            operand.boxed(),
            open.map(|_| ()).boxed(),
            close.map(|_| ()).boxed(),
            operators.into(),
        )
    }

    fn parenthesized(
        operand: BoxedParser<'input, T>,
        open: BoxedParser<'input, ()>,
        close: BoxedParser<'input, ()>,
        operators: Arc<[Operator]>,
    ) -> Self {
        // The group body is this same expression rule, built on first use.
        let nested = {
            let operand = operand.clone();
            let open = open.clone();
            let close = close.clone();
            let operators = Arc::clone(&operators);
            lazy(move || {
                Self::parenthesized(
                    operand.clone(),
                    open.clone(),
                    close.clone(),
                    Arc::clone(&operators),
                )
            })
        };
        let group = between(open, nested, close).map(|(_, expression, _)| expression);

        Self {
            primary: group.or(operand.map(Operand::Leaf)).boxed(),
            operators,
            min_precedence: 0,
        }
    }

    /// Sets the precedence an operator needs to be consumed (default 0).
    pub fn with_min_precedence(mut self, min_precedence: i32) -> Self {
        self.min_precedence = min_precedence;
        self
    }
}

impl<'input, T> ExpressionParser<'input, T> {
    /// Returns the operator table.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    // Thresholds are i64 so that `precedence + 1` exists for every i32 precedence.
    fn climb(
        &self,
        context: ParseContext<'input>,
        min_precedence: i64,
    ) -> ParseOutcome<'input, Operand<T>> {
        let Parsed {
            context: mut current,
            value: mut left,
        } = self.primary.parse(context)?;

        while let Some((operator, after_operator)) = self.match_operator(current) {
            let precedence = i64::from(operator.precedence);
            if precedence < min_precedence {
                break;
            }
            log_trace!(
                "pratt: operator '{}' (precedence {}) at {}",
                operator.text,
                operator.precedence,
                current.position()
            );

            // A matched operator must have a right-hand side.
            let right = self.climb(after_operator, precedence + 1)?;
            left = Operand::binary(left, right.value, operator.clone());
            current = right.context;
        }

        success(current, left)
    }

    fn match_operator(
        &self,
        context: ParseContext<'input>,
    ) -> Option<(&Operator, ParseContext<'input>)> {
        match_operator(&self.operators, context)
    }
}

/// Finds the first infix operator, in declaration order, whose text starts
/// the remaining input.
fn match_operator<'a, 'input>(
    operators: &'a [Operator],
    context: ParseContext<'input>,
) -> Option<(&'a Operator, ParseContext<'input>)> {
    let remaining = context.remaining();
    operators
        .iter()
        .filter(|operator| operator.kind == OperatorKind::Infix)
        .find(|operator| remaining.starts_with(operator.text.as_str()))
        .map(|operator| (operator, context.forward_str(&operator.text)))
}

impl<'input, T> Parser<'input> for ExpressionParser<'input, T> {
    type Output = Operand<T>;

    fn parse(&self, context: ParseContext<'input>) -> ParseOutcome<'input, Operand<T>> {
        self.climb(context, i64::from(self.min_precedence))
    }
}

impl<'input, T> Clone for ExpressionParser<'input, T> {
    fn clone(&self) -> Self {
        Self {
            primary: self.primary.clone(),
            operators: Arc::clone(&self.operators),
            min_precedence: self.min_precedence,
        }
    }
}

impl<'input, T> fmt::Debug for ExpressionParser<'input, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionParser")
            .field("operators", &self.operators)
            .field("min_precedence", &self.min_precedence)
            .finish_non_exhaustive()
    }
}

/// Builds an [`ExpressionParser`] over bare operands.
pub fn expression<'input, T, P>(operand: P, operators: Vec<Operator>) -> ExpressionParser<'input, T>
where
    T: 'input,
    P: Parser<'input, Output = T> + Send + Sync + 'input,
{
    ExpressionParser::new(operand, operators)
}

/// Builds an [`ExpressionParser`] that also accepts `open expression close` groups.
pub fn parenthesized_expression<'input, T, P, Open, Close>(
    operand: P,
    open: Open,
    close: Close,
    operators: Vec<Operator>,
) -> ExpressionParser<'input, T>
where
    T: 'input,
    P: Parser<'input, Output = T> + Send + Sync + 'input,
    Open: Parser<'input> + Send + Sync + 'input,
    Close: Parser<'input> + Send + Sync + 'input,
{
    ExpressionParser::with_parentheses(operand, open, close, operators)
}
