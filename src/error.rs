//! Error kinds shared by the engine, the expression parser and the history manager.
//!
//! The library surfaces [`CalcError`] so callers can tell a bad expression from a
//! failed write. The binary wraps these in `anyhow` at the command boundary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("division by zero is not allowed")]
    DivisionByZero,

    #[error("cannot calculate square root of negative number")]
    NegativeOperand,

    #[error("invalid expression format")]
    InvalidExpressionFormat,

    /// `side` is `first`, `second` or `number` depending on which token failed
    #[error("invalid {side} number: {token}")]
    InvalidOperand { side: &'static str, token: String },

    #[error("unknown operation: {0}")]
    InvalidOperation(String),

    #[error("no calculations to export")]
    NoData,

    /// The cause is part of the message, so it is not exposed as `source()`
    #[error("failed to access {}: {error}", .path.display())]
    HistoryIo { path: PathBuf, error: io::Error },

    #[error("invalid history data in {}: {error}", .path.display())]
    HistoryFormat { path: PathBuf, error: serde_json::Error },
}

impl CalcError {
    pub(crate) fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        CalcError::HistoryIo { path: path.into(), error }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, error: serde_json::Error) -> Self {
        CalcError::HistoryFormat { path: path.into(), error }
    }
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
