//! Line evaluation: parse, translate the operator symbol, dispatch to the engine

use crate::engine::Operation;
use crate::error::CalcResult;
use crate::parsers::{parse_expression, translate_symbol};

/// Evaluate one free-form input line such as `"10 + 5"` or `"16 sqrt"`.
///
/// A binary operation written in the two-token form uses `0` as its second operand.
pub fn evaluate(input: &str) -> CalcResult<f64> {
    let expr = parse_expression(input)?;
    let operation = Operation::from_name(translate_symbol(&expr.operator))?;
    operation.apply(expr.operand1, expr.operand2.unwrap_or(0.0))
}
