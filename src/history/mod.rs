//! Calculation history: an ordered list of entries mirrored to a JSON file
//!
//! # Error Handling Strategy
//!
//! - **Load**: a missing file is an empty history. Unreadable, oversized or
//!   malformed files are logged with `log::warn!` and also treated as empty.
//!
//! - **Save**: every `add` rewrites the file through a temp file + rename. A
//!   failed write is logged; the in-memory list keeps the new entry.
//!
//! - **Export**: returns [`CalcError`](crate::error::CalcError) to the caller,
//!   including `NoData` for an empty history, so the CLI can exit non-zero.

pub mod export;
pub mod manager;
pub mod memory;
pub mod persistence;

use std::io::{self, Write};

pub use export::ExportFormat;
pub use manager::HistoryManager;
pub use memory::MemoryHistory;

use crate::models::HistoryEntry;

/// What the interactive loop and one-shot mode need from a history backend
pub trait HistoryStore {
    /// Record a calculation, stamped with the current time
    fn add(&mut self, expression: &str, result: f64);

    /// Write the full history, oldest first
    fn show(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Shared listing format for [`HistoryStore::show`]
pub fn write_entries(entries: &[HistoryEntry], out: &mut dyn Write) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No calculation in history");
    }

    writeln!(out, "\n--- Calculation History ---")?;
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. {} = {:.2} [{}]", i + 1, entry.expression, entry.result, entry.timestamp)?;
    }
    writeln!(out)
}
