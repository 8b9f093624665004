use std::fmt;
use std::str::FromStr;

use super::arithmetic;
use crate::error::{CalcError, CalcResult};

/// The closed set of operations the calculator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Sqrt,
    Pow,
    Sin,
    Cos,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mul,
        Operation::Div,
        Operation::Sqrt,
        Operation::Pow,
        Operation::Sin,
        Operation::Cos,
    ];

    /// Look up an operation by its canonical name (`add`, `sub`, ...)
    pub fn from_name(name: &str) -> CalcResult<Self> {
        match name {
            "add" => Ok(Operation::Add),
            "sub" => Ok(Operation::Sub),
            "mul" => Ok(Operation::Mul),
            "div" => Ok(Operation::Div),
            "sqrt" => Ok(Operation::Sqrt),
            "pow" => Ok(Operation::Pow),
            "sin" => Ok(Operation::Sin),
            "cos" => Ok(Operation::Cos),
            _ => Err(CalcError::InvalidOperation(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Sqrt => "sqrt",
            Operation::Pow => "pow",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
        }
    }

    /// Display symbol; trig functions keep their name
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Sqrt => "√",
            Operation::Pow => "^",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operation::Sqrt | Operation::Sin | Operation::Cos => 1,
            _ => 2,
        }
    }

    /// Evaluate against the operands. Unary operations ignore `b`.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let result = match self {
            Operation::Add => arithmetic::add(a, b),
            Operation::Sub => arithmetic::subtract(a, b),
            Operation::Mul => arithmetic::multiply(a, b),
            Operation::Div => arithmetic::divide(a, b)?,
            Operation::Sqrt => arithmetic::sqrt(a)?,
            Operation::Pow => arithmetic::pow(a, b),
            Operation::Sin => arithmetic::sin_degrees(a),
            Operation::Cos => arithmetic::cos_degrees(a),
        };
        log::debug!("{} {} {} = {}", a, self.symbol(), b, result);
        Ok(result)
    }

    /// Expression text recorded in history for flag-driven calculations
    pub fn describe(self, a: f64, b: f64) -> String {
        if self.arity() == 1 {
            format!("{}({:.2})", self.name(), a)
        } else {
            format!("{:.2} {} {:.2}", a, self.symbol(), b)
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::from_name(s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
