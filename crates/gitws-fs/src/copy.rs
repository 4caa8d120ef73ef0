//! Recursive directory copy preserving permission bits

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Recursively copy the directory tree at `src` into `dst`.
///
/// Every file keeps its permission bits and every directory receives the mode
/// of its source directory. Directory modes are applied after the children
/// are copied so read-only source directories can still be reproduced.
///
/// Nothing is cleaned up when a copy fails part way; the caller sees the first
/// error and `dst` may hold a partial tree.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    let src_meta = fs::metadata(src).map_err(|e| Error::copy(src, dst, e))?;

    fs::create_dir_all(dst).map_err(|e| Error::copy(src, dst, e))?;

    let entries = fs::read_dir(src).map_err(|e| Error::copy(src, dst, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::copy(src, dst, e))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        // Follow symlinks, matching what a plain open/read would see
        let meta = fs::metadata(&src_path).map_err(|e| Error::copy(&src_path, &dst_path, e))?;
        if meta.is_dir() {
            copy_dir(&src_path, &dst_path)?;
        } else {
            copy_file(&src_path, &dst_path)?;
        }
    }

    fs::set_permissions(dst, src_meta.permissions()).map_err(|e| Error::copy(src, dst, e))?;
    Ok(())
}

/// Remove whatever exists at `dst`, then copy `src` into its place.
pub fn replace_dir(src: &Path, dst: &Path) -> Result<()> {
    match fs::symlink_metadata(dst) {
        Ok(meta) if meta.is_dir() => {
            fs::remove_dir_all(dst).map_err(|e| Error::io(dst, e))?;
        }
        Ok(_) => {
            fs::remove_file(dst).map_err(|e| Error::io(dst, e))?;
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(dst, e)),
    }

    copy_dir(src, dst)
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|e| Error::copy(src, dst, e))?;

    // fs::copy carries permissions on most platforms; set them explicitly
    // so the result does not depend on that.
    let perms = fs::metadata(src)
        .map_err(|e| Error::copy(src, dst, e))?
        .permissions();
    fs::set_permissions(dst, perms).map_err(|e| Error::copy(src, dst, e))?;

    Ok(())
}
