//! Commit finalization

use std::path::Path;

use gitws_git::VersionControl;

use crate::{Error, Result};

/// Stage every change under `repo_root` and commit it as one unit.
///
/// A commit with nothing staged is reported by git as a failure and
/// surfaces as [`Error::GitCommit`].
pub fn finalize(vcs: &dyn VersionControl, repo_root: &Path, message: &str) -> Result<()> {
    tracing::debug!(root = %repo_root.display(), "Staging changes");
    vcs.stage_all(repo_root).map_err(|source| Error::GitStage {
        root: repo_root.to_path_buf(),
        source,
    })?;

    tracing::debug!(root = %repo_root.display(), message, "Committing");
    vcs.commit(repo_root, message)
        .map_err(|source| Error::GitCommit {
            root: repo_root.to_path_buf(),
            source,
        })
}
