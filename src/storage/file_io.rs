//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{WalletError, WalletResult};

/// Read a whole text file, failing if it does not exist
pub fn read_text<P: AsRef<Path>>(path: P) -> WalletResult<String> {
    let path = path.as_ref();

    fs::read_to_string(path)
        .map_err(|e| WalletError::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Read a whole text file, returning an empty string if it does not exist
pub fn read_text_or_empty<P: AsRef<Path>>(path: P) -> WalletResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(String::new());
    }

    read_text(path)
}

/// Write a file atomically (write to temp, then rename)
///
/// The closure receives a buffered writer over the temp file. The target is
/// either completely written or left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> WalletResult<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> WalletResult<()>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                WalletError::Io(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| WalletError::Io(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        write(&mut writer)?;

        writer
            .flush()
            .map_err(|e| WalletError::Io(format!("Failed to flush data: {}", e)))?;

        writer
            .get_ref()
            .sync_all()
            .map_err(|e| WalletError::Io(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, path)
            .map_err(|e| WalletError::Io(format!("Failed to rename temp file: {}", e)))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}

/// Write a string to a file atomically
pub fn write_text_atomic<P: AsRef<Path>>(path: P, contents: &str) -> WalletResult<()> {
    write_atomic(path, |writer| {
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| WalletError::Io(format!("Failed to write data: {}", e)))
    })
}
