//! Calculator - command-line arithmetic with a persisted calculation history
//!
//! This library provides the pieces behind the `calculator` binary:
//!
//! - An arithmetic engine with eight fixed operations ([`engine`])
//! - A parser for one-line expressions like `10 + 5` or `16 sqrt` ([`parsers`])
//! - A JSON-backed history with JSON, CSV and text report export ([`history`])
//! - The interactive loop and flag-driven front-end ([`cli`])
//!
//! # Example
//!
//! ```no_run
//! use calculator_history::history::{HistoryManager, HistoryStore};
//! use calculator_history::evaluate;
//!
//! let mut history = HistoryManager::open("calculator_history.json");
//! let result = evaluate("10 + 5")?;
//! history.add("10 + 5", result);
//! println!("{:.2}", result);
//! # Ok::<(), calculator_history::CalcError>(())
//! ```

pub mod cli;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod history;
pub mod models;
pub mod parsers;
pub mod utils;

/// Version string shown by `-version` and the interactive banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export commonly used types
pub use dispatch::evaluate;
pub use engine::Operation;
pub use error::{CalcError, CalcResult};
pub use history::{ExportFormat, HistoryManager, HistoryStore};
pub use models::{HistoryEntry, ParsedExpression};
pub use parsers::{parse_expression, translate_symbol};
