//! Workspace initialization and inspection

use std::fs;
use std::path::{Path, PathBuf};

use gitws_fs::{WorkspacePath, io};
use gitws_git::VersionControl;
use gitws_templates::{TemplateRenderer, TemplateSet, WorkspaceData};

use crate::{Error, Result, Topology, WorkspaceConfig, finalize, title_case};

/// Commit message of a freshly initialized workspace.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial workspace setup";

/// A directory is a workspace when it has a `repos/` directory.
pub fn is_workspace(path: &Path) -> bool {
    repos_dir(path).is_dir()
}

pub(crate) fn repos_dir(workspace_root: &Path) -> PathBuf {
    workspace_root.join(WorkspacePath::ReposDir)
}

/// What [`init_workspace`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceReport {
    pub name: String,
    /// Name as rendered into the workspace templates
    pub display_name: String,
    pub root: PathBuf,
    pub topology: Topology,
    pub rendered: Vec<PathBuf>,
}

/// Create, scaffold and commit the workspace `parent/name`.
///
/// Fails with [`Error::WorkspaceExists`] if the target already has a
/// `repos/` directory and a commit. A target left behind by an interrupted
/// `init` is completed instead: every step tolerates existing content.
pub fn init_workspace(
    parent: &Path,
    name: &str,
    topology: Topology,
    vcs: &dyn VersionControl,
) -> Result<WorkspaceReport> {
    init_workspace_with(parent, name, topology, vcs, &TemplateRenderer::embedded())
}

/// [`init_workspace`] with an explicit template renderer.
pub fn init_workspace_with(
    parent: &Path,
    name: &str,
    topology: Topology,
    vcs: &dyn VersionControl,
    renderer: &TemplateRenderer,
) -> Result<WorkspaceReport> {
    if name.trim().is_empty() {
        return Err(Error::InvalidWorkspaceName {
            name: name.to_string(),
        });
    }

    let root = parent.join(name);
    if is_workspace(&root) {
        if vcs.has_history(&root) {
            return Err(Error::WorkspaceExists { path: root });
        }
        tracing::info!(root = %root.display(), "Resuming incomplete workspace");
    }

    for dir in [
        root.clone(),
        repos_dir(&root),
        root.join(WorkspacePath::ScriptsDir),
    ] {
        io::ensure_dir(&dir).map_err(|source| Error::DirectoryCreate {
            path: dir.clone(),
            source,
        })?;
    }

    let keep = repos_dir(&root).join(WorkspacePath::KeepFile);
    io::write_empty(&keep).map_err(|source| Error::FileCreate {
        path: keep.clone(),
        source,
    })?;

    WorkspaceConfig::new(topology).save(&root)?;
    tracing::debug!(root = %root.display(), %topology, "Scaffolded workspace");

    vcs.init(&root).map_err(|source| Error::GitInit {
        path: root.clone(),
        source,
    })?;

    let display_name = title_case(name);
    let data = WorkspaceData {
        name: display_name.clone(),
    };
    let rendered = renderer.render_set(TemplateSet::Workspace, &data, &root)?;

    finalize(vcs, &root, INITIAL_COMMIT_MESSAGE)?;
    tracing::info!(root = %root.display(), "Initialized workspace");

    Ok(WorkspaceReport {
        name: name.to_string(),
        display_name,
        root,
        topology,
        rendered,
    })
}

/// One wrapper found under `repos/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperEntry {
    pub name: String,
    pub path: PathBuf,
    /// Nested repository directory, if one of the known layouts is present
    pub nested: Option<PathBuf>,
}

/// Wrappers of the workspace at `workspace_root`, sorted by name.
pub fn list_wrappers(workspace_root: &Path) -> Result<Vec<WrapperEntry>> {
    if !is_workspace(workspace_root) {
        return Err(Error::NotAWorkspace {
            path: workspace_root.to_path_buf(),
        });
    }

    let repos = repos_dir(workspace_root);
    let read_err = |e: std::io::Error| Error::Fs(gitws_fs::Error::io(&repos, e));

    let mut entries = Vec::new();
    for entry in fs::read_dir(&repos).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };

        let nested = [WorkspacePath::SharedNested, WorkspacePath::StandaloneNested]
            .into_iter()
            .map(|dir| path.join(dir))
            .find(|candidate| candidate.is_dir());

        entries.push(WrapperEntry { name, path, nested });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
