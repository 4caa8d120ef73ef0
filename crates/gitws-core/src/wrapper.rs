//! Repository wrapper construction
//!
//! [`WrapperBuilder::build`] runs the fixed pipeline that turns a repository
//! URL into a committed wrapper under `repos/<name>`:
//!
//! 1. resolve the wrapper name from the URL
//! 2. check that the target is a workspace
//! 3. create the wrapper directory
//! 4. add the repository as a submodule and update submodules
//! 5. create `local/` and `scripts/`
//! 6. render the `repo_wrapper` templates
//! 7. carry over the repository's `local/` (shared topology only)
//! 8. stage and commit
//!
//! Each step must succeed before the next one starts. Nothing is rolled back
//! on failure, so every directory step tolerates content left by an earlier
//! run.

use std::path::{Path, PathBuf};

use gitws_fs::{WorkspacePath, io};
use gitws_git::VersionControl;
use gitws_templates::{RepoData, TemplateRenderer, TemplateSet};

use crate::workspace::{is_workspace, repos_dir};
use crate::{
    CarryOver, Error, Result, Topology, WorkspaceConfig, carry_over, finalize, resolve_repo_name,
};

/// Format of the `clone_date` template field.
pub const CLONE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted for the `clone_date` template field.
pub fn capture_timestamp() -> String {
    chrono::Local::now().format(CLONE_DATE_FORMAT).to_string()
}

/// Commit message for a newly added wrapper.
pub fn commit_message(name: &str) -> String {
    format!("Add {name} repository with development wrapper")
}

/// What a successful [`WrapperBuilder::build`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperReport {
    pub name: String,
    pub topology: Topology,
    /// `repos/<name>` under the workspace root
    pub wrapper_dir: PathBuf,
    /// Working tree of the nested repository
    pub nested_dir: PathBuf,
    /// Directory that was staged and committed
    pub commit_root: PathBuf,
    /// Files written from the `repo_wrapper` templates
    pub rendered: Vec<PathBuf>,
    /// `None` when the topology does not carry over
    pub carry_over: Option<CarryOver>,
    pub message: String,
}

/// Builds repository wrappers inside one workspace.
///
/// Topology and templates come from `workspace.toml` unless overridden.
pub struct WrapperBuilder<'a> {
    workspace_root: PathBuf,
    vcs: &'a dyn VersionControl,
    topology: Option<Topology>,
    renderer: Option<TemplateRenderer>,
    clone_date: Option<String>,
}

impl<'a> WrapperBuilder<'a> {
    pub fn new(workspace_root: impl Into<PathBuf>, vcs: &'a dyn VersionControl) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            vcs,
            topology: None,
            renderer: None,
            clone_date: None,
        }
    }

    /// Use `topology` instead of the configured one.
    pub fn topology(mut self, topology: Topology) -> Self {
        self.topology = Some(topology);
        self
    }

    /// Render with `renderer` instead of the configured templates.
    pub fn renderer(mut self, renderer: TemplateRenderer) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Fix the `clone_date` field instead of capturing the current time.
    pub fn clone_date(mut self, clone_date: impl Into<String>) -> Self {
        self.clone_date = Some(clone_date.into());
        self
    }

    /// Build (or rebuild) the wrapper for `url` and commit it.
    pub fn build(&self, url: &str) -> Result<WrapperReport> {
        let name = resolve_repo_name(url)?;
        tracing::debug!(url, name = %name, "Resolved repository name");

        if !is_workspace(&self.workspace_root) {
            return Err(Error::NotAWorkspace {
                path: self.workspace_root.clone(),
            });
        }

        let config = WorkspaceConfig::load(&self.workspace_root)?;
        let topology = self.topology.unwrap_or(config.topology());

        let wrapper_dir = repos_dir(&self.workspace_root).join(&name);
        create_dir(&wrapper_dir)?;
        tracing::debug!(dir = %wrapper_dir.display(), %topology, "Created wrapper directory");

        let nested_dir = self.link_repository(url, &wrapper_dir, topology)?;

        let local_dir = wrapper_dir.join(WorkspacePath::LocalDir);
        create_dir(&local_dir)?;
        create_dir(&wrapper_dir.join(WorkspacePath::ScriptsDir))?;
        if topology.keeps_local_marker() {
            let marker = local_dir.join(WorkspacePath::KeepFile);
            io::write_empty(&marker).map_err(|source| Error::FileCreate {
                path: marker.clone(),
                source,
            })?;
        }

        let data = RepoData {
            repo_name: name.clone(),
            repo_url: url.to_string(),
            clone_date: self.clone_date.clone().unwrap_or_else(capture_timestamp),
        };
        let rendered = match &self.renderer {
            Some(renderer) => renderer.render_set(TemplateSet::RepoWrapper, &data, &wrapper_dir)?,
            None => config
                .template_renderer(&self.workspace_root)
                .render_set(TemplateSet::RepoWrapper, &data, &wrapper_dir)?,
        };
        tracing::debug!(count = rendered.len(), "Rendered wrapper templates");

        let carried = if topology.carries_over_local() {
            Some(carry_over(&nested_dir.join(WorkspacePath::LocalDir), &local_dir)?)
        } else {
            None
        };

        let commit_root = topology.commit_root(&self.workspace_root, &wrapper_dir);
        let message = commit_message(&name);
        finalize(self.vcs, &commit_root, &message)?;

        tracing::info!(name = %name, root = %commit_root.display(), "Added repository wrapper");

        Ok(WrapperReport {
            name,
            topology,
            wrapper_dir,
            nested_dir,
            commit_root,
            rendered,
            carry_over: carried,
            message,
        })
    }

    // Adds the submodule and returns the nested working tree
    fn link_repository(&self, url: &str, wrapper_dir: &Path, topology: Topology) -> Result<PathBuf> {
        let nested_dir = wrapper_dir.join(topology.nested_dir());

        let (root, relative) = if topology.wrapper_is_repository() {
            self.vcs
                .init(wrapper_dir)
                .map_err(|source| Error::GitInit {
                    path: wrapper_dir.to_path_buf(),
                    source,
                })?;
            (wrapper_dir, PathBuf::from(topology.nested_dir().as_str()))
        } else {
            let relative = nested_dir
                .strip_prefix(&self.workspace_root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| nested_dir.clone());
            (self.workspace_root.as_path(), relative)
        };

        let submodule_err = |source: gitws_git::Error| Error::Submodule {
            url: url.to_string(),
            path: nested_dir.clone(),
            source,
        };
        self.vcs
            .add_submodule(root, url, &relative)
            .map_err(submodule_err)?;
        self.vcs.update_submodules(root).map_err(submodule_err)?;

        tracing::debug!(path = %nested_dir.display(), "Linked nested repository");
        Ok(nested_dir)
    }
}

impl std::fmt::Debug for WrapperBuilder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WrapperBuilder")
            .field("workspace_root", &self.workspace_root)
            .field("topology", &self.topology)
            .field("clone_date", &self.clone_date)
            .finish_non_exhaustive()
    }
}

fn create_dir(path: &Path) -> Result<()> {
    io::ensure_dir(path).map_err(|source| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}
