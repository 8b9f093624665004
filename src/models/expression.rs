/// Output of the expression parser, consumed right away by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    pub operand1: f64,
    /// Operator token as typed; may still be a symbol like `+`
    pub operator: String,
    /// Absent for the two-token `<number> <function>` form
    pub operand2: Option<f64>,
}

impl ParsedExpression {
    pub fn binary(operand1: f64, operator: impl Into<String>, operand2: f64) -> Self {
        Self { operand1, operator: operator.into(), operand2: Some(operand2) }
    }

    pub fn unary(operand1: f64, operator: impl Into<String>) -> Self {
        Self { operand1, operator: operator.into(), operand2: None }
    }
}
