use serde::{Deserialize, Serialize};

/// One recorded calculation, exactly as it is stored in the history file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: f64,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: f64, timestamp: impl Into<String>) -> Self {
        Self { expression: expression.into(), result, timestamp: timestamp.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_lowercase_field_names() {
        let entry = HistoryEntry::new("2 + 2", 4.0, "2024-01-15 10:30:00");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["expression"], "2 + 2");
        assert_eq!(json["result"], 4.0);
        assert_eq!(json["timestamp"], "2024-01-15 10:30:00");
    }

    #[test]
    fn test_deserializes_integer_result() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"expression":"10 / 2","result":5,"timestamp":"2024-01-15 10:30:00"}"#,
        )
        .unwrap();
        assert_eq!(entry.result, 5.0);
    }
}
