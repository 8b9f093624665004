use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::export::{ExportFormat, export_entries};
use super::persistence::{load_entries, save_entries};
use super::{HistoryStore, write_entries};
use crate::error::CalcResult;
use crate::models::HistoryEntry;
use crate::utils::now_timestamp;

/// File-backed calculation history.
///
/// The in-memory list is the source of truth; every [`add`](HistoryStore::add)
/// rewrites the whole file from it.
#[derive(Debug)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    path: PathBuf,
}

impl HistoryManager {
    /// Create a manager for `path` and load whatever history is already there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut manager = Self { entries: Vec::new(), path: path.into() };
        manager.load();
        manager
    }

    /// Reload from disk. Unreadable or corrupt files become an empty history.
    pub fn load(&mut self) {
        self.entries = match load_entries(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Could not load history: {}", e);
                Vec::new()
            }
        };
        log::debug!("loaded {} history entries from {}", self.entries.len(), self.path.display());
    }

    pub fn save(&self) -> CalcResult<()> {
        save_entries(&self.path, &self.entries)
    }

    /// Export to `path`, returning the number of entries written
    pub fn export(&self, format: ExportFormat, path: &Path) -> CalcResult<usize> {
        export_entries(format, &self.entries, path, &now_timestamp())
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for HistoryManager {
    /// Non-finite results cannot be stored in the JSON file, so they are not recorded
    fn add(&mut self, expression: &str, result: f64) {
        if !result.is_finite() {
            log::warn!(
                "Not recording '{}' in history: result {} is not a finite number",
                expression,
                result
            );
            return;
        }
        self.entries.push(HistoryEntry::new(expression, result, now_timestamp()));
        if let Err(e) = self.save() {
            log::warn!("Could not save history: {}", e);
        }
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_entries(&self.entries, out)
    }
}
