//! In-memory [`VersionControl`] that records calls instead of running git

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::{Error, Result, VcsOp, VersionControl};

/// A recorded version-control call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Init { dir: PathBuf },
    AddSubmodule { root: PathBuf, url: String, path: PathBuf },
    UpdateSubmodules { root: PathBuf },
    StageAll { root: PathBuf },
    Commit { root: PathBuf, message: String },
}

impl VcsCall {
    /// The operation kind of this call.
    pub fn op(&self) -> VcsOp {
        match self {
            VcsCall::Init { .. } => VcsOp::Init,
            VcsCall::AddSubmodule { .. } => VcsOp::AddSubmodule,
            VcsCall::UpdateSubmodules { .. } => VcsOp::UpdateSubmodules,
            VcsCall::StageAll { .. } => VcsOp::StageAll,
            VcsCall::Commit { .. } => VcsOp::Commit,
        }
    }
}

/// Fake version control for orchestration tests.
///
/// `add_submodule` creates the target directory and, when a checkout was
/// registered for the URL, copies that directory's content into it. This
/// stands in for the working tree git would have populated.
#[derive(Debug, Default)]
pub struct RecordingVcs {
    calls: Mutex<Vec<VcsCall>>,
    committed: Mutex<HashSet<PathBuf>>,
    fail_on: Option<VcsOp>,
    checkouts: HashMap<String, PathBuf>,
}

impl RecordingVcs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call of `op` fail.
    pub fn failing_on(mut self, op: VcsOp) -> Self {
        self.fail_on = Some(op);
        self
    }

    /// Populate submodules added from `url` with the content of `dir`.
    pub fn with_checkout(mut self, url: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.checkouts.insert(url.into(), dir.into());
        self
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Just the operation kinds, in order.
    pub fn ops(&self) -> Vec<VcsOp> {
        self.calls().iter().map(VcsCall::op).collect()
    }

    fn record(&self, call: VcsCall) -> Result<()> {
        let op = call.op();
        let dir = match &call {
            VcsCall::Init { dir } => dir.clone(),
            VcsCall::AddSubmodule { root, .. }
            | VcsCall::UpdateSubmodules { root }
            | VcsCall::StageAll { root }
            | VcsCall::Commit { root, .. } => root.clone(),
        };

        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);

        if self.fail_on == Some(op) {
            return Err(Error::CommandFailed {
                command: format!("fake {op:?}"),
                dir,
                code: Some(1),
            });
        }
        Ok(())
    }
}

impl VersionControl for RecordingVcs {
    fn init(&self, dir: &Path) -> Result<()> {
        self.record(VcsCall::Init {
            dir: dir.to_path_buf(),
        })
    }

    fn add_submodule(&self, root: &Path, url: &str, path: &Path) -> Result<()> {
        self.record(VcsCall::AddSubmodule {
            root: root.to_path_buf(),
            url: url.to_string(),
            path: path.to_path_buf(),
        })?;

        let target = root.join(path);
        match self.checkouts.get(url) {
            Some(source) => gitws_fs::copy_dir(source, &target)?,
            None => gitws_fs::io::ensure_dir(&target)?,
        }
        Ok(())
    }

    fn update_submodules(&self, root: &Path) -> Result<()> {
        self.record(VcsCall::UpdateSubmodules {
            root: root.to_path_buf(),
        })
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        self.record(VcsCall::StageAll {
            root: root.to_path_buf(),
        })
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        self.record(VcsCall::Commit {
            root: root.to_path_buf(),
            message: message.to_string(),
        })?;

        self.committed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(root.to_path_buf());
        Ok(())
    }

    fn has_history(&self, dir: &Path) -> bool {
        self.committed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(dir)
    }
}
