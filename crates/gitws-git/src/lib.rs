//! Version-control seam for git-workspace
//!
//! The pipeline in `gitws-core` only talks to [`VersionControl`]. [`GitCli`]
//! backs it with `git` subprocesses; [`RecordingVcs`] is an in-memory fake for
//! tests. [`commits`] reads history back through `git2`.

pub mod cli;
pub mod commits;
pub mod error;
pub mod fake;
pub mod vcs;

pub use cli::GitCli;
pub use commits::CommitInfo;
pub use error::{Error, Result};
pub use fake::{RecordingVcs, VcsCall};
pub use vcs::{VcsOp, VersionControl};
