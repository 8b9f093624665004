use std::io::{self, Write};

use super::{HistoryStore, write_entries};
use crate::models::HistoryEntry;
use crate::utils::now_timestamp;

/// History that lives only for the current process
#[derive(Debug, Default)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl HistoryStore for MemoryHistory {
    fn add(&mut self, expression: &str, result: f64) {
        self.entries.push(HistoryEntry::new(expression, result, now_timestamp()));
    }

    fn show(&self, out: &mut dyn Write) -> io::Result<()> {
        write_entries(&self.entries, out)
    }
}
