use std::ffi::OsString;
use std::path::Path;

use tokio::fs;

use crate::utils::{ConverterError, ConverterResult};

/// Lists the names of the direct entries of `dir`, in the order the
/// filesystem returns them.
pub async fn list_dir_names(dir: impl AsRef<Path>) -> ConverterResult<Vec<OsString>> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| ConverterError::directory(dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| ConverterError::directory(dir, e))?
    {
        names.push(entry.file_name());
    }
    Ok(names)
}

/// Get file size in bytes, or 0 when the file cannot be stat'ed
pub fn file_size_or_zero(path: impl AsRef<Path>) -> u64 {
    std::fs::metadata(path.as_ref()).map(|m| m.len()).unwrap_or(0)
}
