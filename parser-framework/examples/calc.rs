//! Integer calculator example.
//!
//! Demonstrates the parser-framework workflow:
//! 1. Build an operand parser from the text helpers.
//! 2. Declare the operator table.
//! 3. Build an expression parser with parenthesis support.
//! 4. Walk the resulting tree to evaluate it.
//!
//! Run with expressions as arguments, or without arguments for a few samples:
//!
//! ```text
//! cargo run --example calc -- "1 + 2 * (3 - 1)"
//! ```

use parser_framework::{
    integer, one_char, parenthesized_expression, parse_complete, skip_spaces, ExpressionParser,
    Operand, Operator, ParseError, Parser,
};

// ============================================================================
// Grammar
// ============================================================================

fn spaced<'input, P>(parser: P) -> impl Parser<'input, Output = P::Output> + Clone + Send + Sync
where
    P: Parser<'input> + Clone + Send + Sync,
{
    skip_spaces()
        .then_skip_left(parser)
        .then_skip_right(skip_spaces())
}

fn calculator<'input>() -> ExpressionParser<'input, i64> {
    parenthesized_expression(
        spaced(integer()),
        spaced(one_char('(')),
        spaced(one_char(')')),
        vec![
            Operator::infix("+", 10),
            Operator::infix("-", 10),
            Operator::infix("*", 20),
            Operator::infix("/", 20),
            Operator::infix("%", 20),
        ],
    )
}

// ============================================================================
// Evaluation
// ============================================================================

#[derive(Debug, thiserror::Error)]
enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow in '{0}'")]
    Overflow(String),

    #[error("unsupported operator '{0}'")]
    UnknownOperator(String),
}

fn eval(tree: &Operand<i64>) -> Result<i64, CalcError> {
    let (left, right, operator) = match tree {
        Operand::Leaf(value) => return Ok(*value),
        Operand::Binary {
            left,
            right,
            operator,
        } => (eval(left)?, eval(right)?, operator.text.as_str()),
    };

    let result = match operator {
        "+" => left.checked_add(right),
        "-" => left.checked_sub(right),
        "*" => left.checked_mul(right),
        "/" | "%" if right == 0 => return Err(CalcError::DivisionByZero),
        "/" => left.checked_div(right),
        "%" => left.checked_rem(right),
        other => return Err(CalcError::UnknownOperator(other.to_string())),
    };
    result.ok_or_else(|| CalcError::Overflow(format!("{} {} {}", left, operator, right)))
}

fn calculate(text: &str) -> Result<i64, CalcError> {
    let tree = parse_complete(&calculator(), text)?;
    eval(&tree)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let inputs: Vec<String> = if args.is_empty() {
        [
            "42",
            "1 + 25 * 589",
            "(1 + 25) * 589",
            "1021 / 7 + 2 * ((7 - 2) * 3)",
            "10 - 4 - 3",
            "8 / (4 - 4)",
            "1 + ",
            "2 * 3 )",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    } else {
        args
    };

    println!("=== Calculator Example ===\n");
    for input in &inputs {
        match calculate(input) {
            Ok(value) => println!("{:<32} = {}", input, value),
            Err(err) => println!("{:<32} ! {}", input, err),
        }
    }
}
