//! Export of the calculation history to JSON, CSV or a plain-text report

use std::fmt::Write as _;
use std::path::Path;

use super::persistence::{entries_to_json, write_atomic};
use crate::error::{CalcError, CalcResult};
use crate::models::HistoryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
}

impl ExportFormat {
    pub fn name(self) -> &'static str {
        match self {
            ExportFormat::Json => "JSON",
            ExportFormat::Csv => "CSV",
            ExportFormat::Txt => "TXT",
        }
    }
}

/// Render entries in the given format. `generated_at` only appears in TXT reports.
pub fn render(
    format: ExportFormat,
    entries: &[HistoryEntry],
    path: &Path,
    generated_at: &str,
) -> CalcResult<String> {
    match format {
        ExportFormat::Json => entries_to_json(path, entries),
        ExportFormat::Csv => Ok(render_csv(entries)),
        ExportFormat::Txt => Ok(render_txt(entries, generated_at)),
    }
}

/// Write entries to `path`, returning how many were written.
///
/// Fails with [`CalcError::NoData`] without touching the filesystem when there is nothing to write.
pub fn export_entries(
    format: ExportFormat,
    entries: &[HistoryEntry],
    path: &Path,
    generated_at: &str,
) -> CalcResult<usize> {
    if entries.is_empty() {
        return Err(CalcError::NoData);
    }

    let contents = render(format, entries, path, generated_at)?;
    write_atomic(path, contents.as_bytes())?;
    log::debug!("exported {} entries as {} to {}", entries.len(), format.name(), path.display());

    Ok(entries.len())
}

fn render_csv(entries: &[HistoryEntry]) -> String {
    let mut out = String::from("Expression,Result,Timestamp\n");
    for entry in entries {
        let _ = writeln!(
            out,
            "{},{:.2},{}",
            quote_csv(&entry.expression),
            entry.result,
            quote_csv(&entry.timestamp)
        );
    }
    out
}

fn quote_csv(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn render_txt(entries: &[HistoryEntry], generated_at: &str) -> String {
    let mut out = String::from("Calculator History Report\n");
    let _ = writeln!(out, "Generated: {}\n", generated_at);
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} = {:.2} [{}]",
            i + 1,
            entry.expression,
            entry.result,
            entry.timestamp
        );
    }
    let _ = writeln!(out, "\nTotal calculations: {}", entries.len());
    out
}
