//! History file persistence: whole-file JSON load/save with atomic writes

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{CalcError, CalcResult};
use crate::models::HistoryEntry;
use crate::utils::validate_file_size;

/// Load every entry from a history file.
///
/// A missing file is an empty history, not an error.
pub fn load_entries(path: &Path) -> CalcResult<Vec<HistoryEntry>> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(CalcError::io(path, e)),
    };
    validate_file_size(&file, path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| CalcError::io(path, e))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::format(path, e))
}

/// Serialize entries as a 2-space indented JSON array.
///
/// NaN and infinite results are rejected: serde_json would write them as
/// `null`, which cannot be read back as a number.
pub fn entries_to_json(path: &Path, entries: &[HistoryEntry]) -> CalcResult<String> {
    if let Some(entry) = entries.iter().find(|entry| !entry.result.is_finite()) {
        return Err(CalcError::format(
            path,
            serde::ser::Error::custom(format!(
                "result of '{}' is not a finite number ({})",
                entry.expression, entry.result
            )),
        ));
    }
    serde_json::to_string_pretty(entries).map_err(|e| CalcError::format(path, e))
}

/// Rewrite the whole history file from `entries`
pub fn save_entries(path: &Path, entries: &[HistoryEntry]) -> CalcResult<()> {
    let json = entries_to_json(path, entries)?;
    write_atomic(path, json.as_bytes())
}

/// Write to a sibling temp file, then rename over the target
pub fn write_atomic(path: &Path, contents: &[u8]) -> CalcResult<()> {
    let temp = temp_path(path);
    fs::write(&temp, contents).map_err(|e| CalcError::io(&temp, e))?;
    if let Err(e) = fs::rename(&temp, path) {
        let _ = fs::remove_file(&temp);
        return Err(CalcError::io(path, e));
    }
    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "history".to_string());
    path.with_file_name(format!("{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let entries = load_entries(&dir.path().join("absent.json")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let entries = vec![
            HistoryEntry::new("2 + 2", 4.0, "2024-01-15 10:30:00"),
            HistoryEntry::new("16 sqrt", 4.0, "2024-01-15 10:31:00"),
        ];

        save_entries(&path, &entries).unwrap();
        assert_eq!(load_entries(&path).unwrap(), entries);
        assert!(!temp_path(&path).exists(), "temp file should be renamed away");
    }

    #[test]
    fn test_saved_json_uses_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        save_entries(&path, &[HistoryEntry::new("1 + 1", 2.0, "2024-01-15 10:30:00")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n  {\n    \"expression\": \"1 + 1\""));
    }

    #[test]
    fn test_non_finite_result_is_not_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let good = vec![HistoryEntry::new("1 + 1", 2.0, "2024-01-15 10:30:00")];
        save_entries(&path, &good).unwrap();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut entries = good.clone();
            entries.push(HistoryEntry::new("x", bad, "2024-01-15 10:31:00"));
            let err = save_entries(&path, &entries).unwrap_err();
            assert!(matches!(err, CalcError::HistoryFormat { .. }));
            assert!(err.to_string().contains("not a finite number"));
        }

        assert_eq!(load_entries(&path).unwrap(), good, "last good file is kept");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_entries(&path), Err(CalcError::HistoryFormat { .. })));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("history.json");
        assert!(matches!(save_entries(&path, &[]), Err(CalcError::HistoryIo { .. })));
    }
}
