//! Wrapper topology
//!
//! A workspace places nested repositories in one of two shapes. The choice is
//! made once, stored in `workspace.toml`, and read back by every `add`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gitws_fs::WorkspacePath;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Where a wrapper's nested repository lives and what gets committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// The nested repository sits in `repo/` and the workspace root is the
    /// commit root, so one workspace history covers every wrapper.
    ///
    /// A `local/` directory shipped by the nested repository is copied into
    /// the wrapper's `local/`.
    #[default]
    #[serde(alias = "workspace")]
    Shared,

    /// Every wrapper is its own repository with the nested repository in
    /// `src/`. `local/` keeps an empty `.gitkeep` so git retains it.
    #[serde(alias = "wrapper")]
    Standalone,
}

impl Topology {
    /// Name of the wrapper subdirectory holding the nested repository.
    pub fn nested_dir(&self) -> WorkspacePath {
        match self {
            Topology::Shared => WorkspacePath::SharedNested,
            Topology::Standalone => WorkspacePath::StandaloneNested,
        }
    }

    /// Directory in which the wrapper's changes are staged and committed.
    pub fn commit_root(&self, workspace_root: &Path, wrapper_dir: &Path) -> PathBuf {
        match self {
            Topology::Shared => workspace_root.to_path_buf(),
            Topology::Standalone => wrapper_dir.to_path_buf(),
        }
    }

    /// Whether the wrapper directory itself is initialized as a repository.
    pub fn wrapper_is_repository(&self) -> bool {
        matches!(self, Topology::Standalone)
    }

    /// Whether the nested repository's `local/` replaces the wrapper default.
    pub fn carries_over_local(&self) -> bool {
        matches!(self, Topology::Shared)
    }

    /// Whether `local/` gets an empty marker file.
    pub fn keeps_local_marker(&self) -> bool {
        matches!(self, Topology::Standalone)
    }
}

impl FromStr for Topology {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shared" | "workspace" => Ok(Topology::Shared),
            "standalone" | "wrapper" => Ok(Topology::Standalone),
            _ => Err(Error::InvalidTopology {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Shared => write!(f, "shared"),
            Topology::Standalone => write!(f, "standalone"),
        }
    }
}
