/// Library-level integration tests: history persistence and export across reloads
mod common;

use std::fs;

use calculator_history::history::MemoryHistory;
use calculator_history::utils::is_valid_timestamp;
use calculator_history::{CalcError, ExportFormat, HistoryManager, HistoryStore, evaluate};
use common::{EntryBuilder, HistoryDirBuilder};

#[test]
fn test_add_then_fresh_load() {
    let dir = HistoryDirBuilder::new();
    let path = dir.history_path();

    let mut history = HistoryManager::open(&path);
    history.add("2 + 2", 4.0);
    drop(history);

    let reloaded = HistoryManager::open(&path);
    assert_eq!(reloaded.len(), 1);
    let entry = &reloaded.entries()[0];
    assert_eq!(entry.expression, "2 + 2");
    assert_eq!(entry.result, 4.0);
    assert!(is_valid_timestamp(&entry.timestamp), "bad timestamp: {}", entry.timestamp);
}

#[test]
fn test_appends_to_existing_history() {
    let dir = HistoryDirBuilder::new().with_entries(&[
        EntryBuilder::new().expression("1 + 1"),
        EntryBuilder::new().expression("2 + 2").result(4.0),
    ]);

    let mut history = HistoryManager::open(dir.history_path());
    assert_eq!(history.len(), 2);
    history.add("3 + 3", 6.0);

    let reloaded = HistoryManager::open(dir.history_path());
    let expressions: Vec<&str> =
        reloaded.entries().iter().map(|e| e.expression.as_str()).collect();
    assert_eq!(expressions, ["1 + 1", "2 + 2", "3 + 3"]);
}

#[test]
fn test_load_replaces_memory_with_disk() {
    let dir = HistoryDirBuilder::new();
    let mut history = HistoryManager::open(dir.history_path());
    history.add("5 * 5", 25.0);

    fs::write(dir.history_path(), "[]").unwrap();
    history.load();
    assert!(history.is_empty());
}

#[test]
fn test_evaluate_and_record() {
    let dir = HistoryDirBuilder::new();
    let mut history = HistoryManager::open(dir.history_path());

    for line in ["10 + 5", "2 ^ 3", "0 cos"] {
        let result = evaluate(line).unwrap();
        history.add(line, result);
    }

    let results: Vec<f64> = history.entries().iter().map(|e| e.result).collect();
    assert_eq!(results, [15.0, 8.0, 1.0]);
}

#[test]
fn test_export_all_formats() {
    let dir = HistoryDirBuilder::new()
        .with_entries(&[EntryBuilder::new().expression("10 / 4").result(2.5)]);
    let history = HistoryManager::open(dir.history_path());

    let json = dir.path().join("h.json");
    let csv = dir.path().join("h.csv");
    let txt = dir.path().join("h.txt");
    assert_eq!(history.export(ExportFormat::Json, &json).unwrap(), 1);
    assert_eq!(history.export(ExportFormat::Csv, &csv).unwrap(), 1);
    assert_eq!(history.export(ExportFormat::Txt, &txt).unwrap(), 1);

    // JSON export matches the history file format
    let exported = HistoryManager::open(&json);
    assert_eq!(exported.entries(), history.entries());

    assert!(fs::read_to_string(&csv).unwrap().contains("\"10 / 4\",2.50,\"2024-01-15 10:30:00\""));

    let report = fs::read_to_string(&txt).unwrap();
    assert!(report.starts_with("Calculator History Report\nGenerated: "));
    assert!(report.contains("1. 10 / 4 = 2.50 [2024-01-15 10:30:00]"));
    assert!(report.ends_with("\nTotal calculations: 1\n"));
}

#[test]
fn test_export_empty_writes_nothing() {
    let dir = HistoryDirBuilder::new();
    let history = HistoryManager::open(dir.history_path());
    let target = dir.path().join("out.json");

    assert!(matches!(history.export(ExportFormat::Json, &target), Err(CalcError::NoData)));
    assert!(!target.exists());
}

#[test]
fn test_memory_and_file_backends_show_the_same() {
    let dir = HistoryDirBuilder::new();
    let mut file = HistoryManager::open(dir.history_path());
    let mut memory = MemoryHistory::new();

    let stores: [&mut dyn HistoryStore; 2] = [&mut file, &mut memory];
    for store in stores {
        store.add("7 - 2", 5.0);
    }

    let mut file_out = Vec::new();
    let mut memory_out = Vec::new();
    file.show(&mut file_out).unwrap();
    memory.show(&mut memory_out).unwrap();

    let file_text = String::from_utf8(file_out).unwrap();
    assert!(file_text.contains("1. 7 - 2 = 5.00 ["));
    assert_eq!(file_text.lines().count(), String::from_utf8(memory_out).unwrap().lines().count());
}
