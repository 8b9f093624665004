use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{CalcError, CalcResult};

// Maximum size accepted for a history file: 10MB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Reject files larger than [`MAX_FILE_SIZE_BYTES`].
///
/// Takes an open handle so the size checked is the size of the file actually read.
pub fn validate_file_size(file: &File, path: &Path) -> CalcResult<()> {
    let metadata = file.metadata().map_err(|e| CalcError::io(path, e))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        return Err(CalcError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file too large ({} bytes, max {} bytes)", file_size, MAX_FILE_SIZE_BYTES),
            ),
        ));
    }

    Ok(())
}
