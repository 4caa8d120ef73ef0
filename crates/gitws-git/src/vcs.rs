//! The version-control capability the wrapper pipeline depends on

use std::path::Path;

use crate::Result;

/// One kind of version-control operation.
///
/// Used by fakes to select which operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsOp {
    Init,
    AddSubmodule,
    UpdateSubmodules,
    StageAll,
    Commit,
}

/// Version-control operations scoped to an explicit working directory.
///
/// Every method is one unit of work; a failure is reported only through the
/// returned error. Implementations never change the process working directory.
pub trait VersionControl {
    /// Initialize a repository in `dir` (re-initializing an existing one is allowed).
    fn init(&self, dir: &Path) -> Result<()>;

    /// Register `url` as a nested repository at `path`, relative to `root`.
    fn add_submodule(&self, root: &Path, url: &str, path: &Path) -> Result<()>;

    /// Initialize and update every nested repository under `root`.
    fn update_submodules(&self, root: &Path) -> Result<()>;

    /// Stage every change under `root`.
    fn stage_all(&self, root: &Path) -> Result<()>;

    /// Commit the staged changes in `root` with `message`.
    fn commit(&self, root: &Path, message: &str) -> Result<()>;

    /// Whether `dir` is itself a repository with at least one commit.
    ///
    /// Repositories enclosing `dir` do not count.
    fn has_history(&self, dir: &Path) -> bool;
}
