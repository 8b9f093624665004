//! Parsers for calculator input
//!
//! # Error Handling Strategy
//!
//! Parsing is all-or-nothing per line: a line either yields a
//! [`ParsedExpression`](crate::models::ParsedExpression) or a typed
//! [`CalcError`](crate::error::CalcError) naming what was wrong (token count or
//! which operand failed). Unknown operator tokens are not rejected here; they
//! fail later at dispatch with `InvalidOperation`, so the caller can tell the
//! user which operations exist.

pub mod expression;

pub use expression::{operation_symbol, parse_expression, translate_symbol};
