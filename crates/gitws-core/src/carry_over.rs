//! Repository-provided content carried into the wrapper

use std::path::Path;

use crate::{Error, Result};

/// Outcome of [`carry_over`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryOver {
    /// `dest` was replaced by a copy of `source`
    Copied,
    /// `source` does not exist; nothing was touched
    Skipped,
}

/// Replace `dest` with a copy of `source` if `source` exists.
///
/// Any previous content of `dest` is removed first, so the result holds
/// exactly the entries of `source` with their permission bits. A copy that
/// fails part way is not cleaned up.
pub fn carry_over(source: &Path, dest: &Path) -> Result<CarryOver> {
    if !source.exists() {
        tracing::debug!(source = %source.display(), "Nothing to carry over");
        return Ok(CarryOver::Skipped);
    }

    gitws_fs::replace_dir(source, dest).map_err(|err| Error::Copy {
        from: source.to_path_buf(),
        to: dest.to_path_buf(),
        source: err,
    })?;

    tracing::debug!(
        source = %source.display(),
        dest = %dest.display(),
        "Carried over directory"
    );
    Ok(CarryOver::Copied)
}
