//! Data models for the calculator.
//!
//! - [`HistoryEntry`] - one persisted calculation
//! - [`ParsedExpression`] - transient parser output for a single input line

pub mod expression;
pub mod history;

pub use expression::ParsedExpression;
pub use history::HistoryEntry;
