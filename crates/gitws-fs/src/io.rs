//! Directory creation and atomic writes with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result};

/// Create a directory and all missing parents.
///
/// Succeeds when the directory already exists and leaves its contents alone.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Create (or truncate) an empty file, creating parent directories as needed.
pub fn write_empty(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, []).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file.
///
/// The content goes to a temp file in the same directory which is then
/// renamed over `path`, so readers see either the old or the new content.
/// The temp file is removed if any step fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = sibling(path, &format!("{}.tmp", std::process::id()));
    if let Err(e) = write_and_rename(&temp_path, path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file atomically");
    Ok(())
}

/// [`write_atomic`] while holding an exclusive advisory lock.
///
/// The lock is taken on a sibling `.<name>.lock` file that is never removed,
/// so every writer of `path` locks the same inode.
pub fn write_locked(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| Error::io(&lock_path, e))?;

    lock_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed { path: path.to_path_buf() })?;

    let result = write_atomic(path, content);

    if lock_file.unlock().is_err() {
        tracing::warn!(path = %lock_path.display(), "Failed to release lock");
    }
    result
}

// `.{file name}.{suffix}` next to `path`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{suffix}"))
}

fn write_and_rename(temp_path: &Path, path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    drop(temp_file);

    fs::rename(temp_path, path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
