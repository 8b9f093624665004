//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temp directory holding a history file
pub struct HistoryDirBuilder {
    temp_dir: TempDir,
}

impl HistoryDirBuilder {
    /// Create a new builder with an empty directory and no history file
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write the history file verbatim
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.history_path(), content).expect("Failed to write history file");
        self
    }

    /// Write history entries programmatically
    pub fn with_entries(self, entries: &[EntryBuilder]) -> Self {
        let content = format!(
            "[\n{}\n]",
            entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",\n")
        );
        self.with_history(&content)
    }

    pub fn history_path(&self) -> PathBuf {
        self.temp_dir.path().join("calculator_history.json")
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HistoryDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single history file entry
pub struct EntryBuilder {
    expression: String,
    result: f64,
    timestamp: String,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            expression: "1 + 1".to_string(),
            result: 2.0,
            timestamp: "2024-01-15 10:30:00".to_string(),
        }
    }

    pub fn expression(mut self, expression: &str) -> Self {
        self.expression = expression.to_string();
        self
    }

    pub fn result(mut self, result: f64) -> Self {
        self.result = result;
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "expression": self.expression,
            "result": self.result,
            "timestamp": self.timestamp,
        })
        .to_string()
    }
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
