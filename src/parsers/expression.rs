//! Parser for single-line calculator expressions.
//!
//! # Syntax
//!
//! ```text
//! binary := number operator number     e.g. "10 + 5", "2 pow 8"
//! unary  := number function            e.g. "16 sqrt", "90 sin", "16 √"
//! ```
//!
//! Tokens are separated by any run of whitespace. The operator token is kept
//! as typed; [`translate_symbol`] maps symbols to canonical operation names.
//!
//! # Examples
//!
//! ```rust
//! # use calculator_history::parsers::expression::{parse_expression, translate_symbol};
//! let expr = parse_expression("10 + 5").unwrap();
//! assert_eq!(expr.operand1, 10.0);
//! assert_eq!(translate_symbol(&expr.operator), "add");
//! assert_eq!(expr.operand2, Some(5.0));
//! ```

use crate::engine::Operation;
use crate::error::{CalcError, CalcResult};
use crate::models::ParsedExpression;

/// Parse one input line into operands and an operator token
pub fn parse_expression(input: &str) -> CalcResult<ParsedExpression> {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    match tokens.as_slice() {
        [first, operator, second] => {
            let operand1 = parse_operand(first, "first")?;
            let operand2 = parse_operand(second, "second")?;
            Ok(ParsedExpression::binary(operand1, *operator, operand2))
        }
        [number, operator] => {
            let operand1 = parse_operand(number, "number")?;
            Ok(ParsedExpression::unary(operand1, *operator))
        }
        _ => Err(CalcError::InvalidExpressionFormat),
    }
}

fn parse_operand(token: &str, side: &'static str) -> CalcResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand { side, token: token.to_string() })
}

/// Map an operator symbol to its operation name. Anything else passes through.
pub fn translate_symbol(token: &str) -> &str {
    Operation::ALL.iter().find(|op| op.symbol() == token).map(|op| op.name()).unwrap_or(token)
}

/// Map an operation name back to its display symbol. Anything else passes through.
pub fn operation_symbol(name: &str) -> &str {
    Operation::from_name(name).map(Operation::symbol).unwrap_or(name)
}
