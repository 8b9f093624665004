use std::f64::consts::PI;

use crate::error::{CalcError, CalcResult};

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns [`CalcError::DivisionByZero`] when `b` is zero (either sign)
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}

/// Returns [`CalcError::NegativeOperand`] for any `a < 0`
pub fn sqrt(a: f64) -> CalcResult<f64> {
    if a < 0.0 {
        return Err(CalcError::NegativeOperand);
    }
    Ok(a.sqrt())
}

/// Negative bases with fractional exponents yield NaN, as `f64::powf` does
pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Sine of an angle given in degrees
pub fn sin_degrees(degrees: f64) -> f64 {
    to_radians(degrees).sin()
}

/// Cosine of an angle given in degrees
pub fn cos_degrees(degrees: f64) -> f64 {
    to_radians(degrees).cos()
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
