//! Arithmetic engine: eight pure `f64` operations and the dispatch table over them.
//!
//! Only two operations can fail: division by zero and the square root of a
//! negative number. Trigonometric functions take their angle in degrees.

pub mod arithmetic;
pub mod operation;

pub use arithmetic::{add, cos_degrees, divide, multiply, pow, sin_degrees, sqrt, subtract};
pub use operation::Operation;
