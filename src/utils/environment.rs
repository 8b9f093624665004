use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default history file location
pub const HISTORY_FILE_ENV: &str = "CALCULATOR_HISTORY_FILE";

/// History file used when neither the flag nor the environment names one
pub const DEFAULT_HISTORY_FILE: &str = "calculator_history.json";

/// Resolve the history file path: explicit flag, then environment, then default
pub fn resolve_history_path(flag: Option<&Path>, env_value: Option<&str>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_HISTORY_FILE),
    }
}

/// Get the history file path, consulting `CALCULATOR_HISTORY_FILE`
pub fn get_history_path(flag: Option<&Path>) -> PathBuf {
    let env_value = env::var(HISTORY_FILE_ENV).ok();
    resolve_history_path(flag, env_value.as_deref())
}
