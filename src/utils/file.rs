//! File reading utilities

use crate::error::{DisplayfetchError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(DisplayfetchError::from)
}

/// First non-blank line of a file, trimmed.
/// Sysfs attributes like `status` and `modes` are small, so a full read is fine.
pub fn read_first_line<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = read_file_safe(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string())
}

/// Read raw bytes, returning `None` for missing or empty files
pub fn read_bytes_nonempty<P: AsRef<Path>>(path: P) -> Option<Vec<u8>> {
    fs::read(path).ok().filter(|bytes| !bytes.is_empty())
}
