pub mod environment;
pub mod paths;
pub mod timestamps;

pub use environment::{DEFAULT_HISTORY_FILE, HISTORY_FILE_ENV, get_history_path, resolve_history_path};
pub use paths::validate_file_size;
pub use timestamps::{TIMESTAMP_FORMAT, is_valid_timestamp, now_timestamp};
