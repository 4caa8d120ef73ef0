//! Workspace configuration stored in `workspace.toml`
//!
//! ```toml
//! [core]
//! topology = "shared"
//!
//! [templates]
//! dir = "templates"
//! ```
//!
//! A missing file means defaults: shared topology, embedded templates.

use std::path::{Path, PathBuf};

use gitws_fs::{ConfigStore, WorkspacePath};
use gitws_templates::{DirectoryTemplates, TemplateRenderer};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, Topology};

/// Core configuration section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreSection {
    #[serde(default)]
    pub topology: Topology,
}

/// Template override section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplatesSection {
    /// Directory holding `repo_wrapper/` templates, relative to the workspace root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl TemplatesSection {
    fn is_empty(&self) -> bool {
        self.dir.is_none()
    }
}

/// Parsed `workspace.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub core: CoreSection,

    #[serde(default, skip_serializing_if = "TemplatesSection::is_empty")]
    pub templates: TemplatesSection,
}

impl WorkspaceConfig {
    pub fn new(topology: Topology) -> Self {
        Self {
            core: CoreSection { topology },
            templates: TemplatesSection::default(),
        }
    }

    /// Location of the config file for a workspace root.
    pub fn path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(WorkspacePath::ConfigFile)
    }

    /// Load the workspace config, or defaults if the file does not exist.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = Self::path(workspace_root);
        ConfigStore::new()
            .load_or_default(&path)
            .map_err(|source| Error::Config { path, source })
    }

    /// Write the config atomically.
    pub fn save(&self, workspace_root: &Path) -> Result<()> {
        let path = Self::path(workspace_root);
        ConfigStore::new()
            .save(&path, self)
            .map_err(|source| Error::FileCreate { path, source })
    }

    pub fn topology(&self) -> Topology {
        self.core.topology
    }

    /// Renderer for wrapper templates: the override directory when one is
    /// configured, the embedded templates otherwise.
    pub fn template_renderer(&self, workspace_root: &Path) -> TemplateRenderer {
        match &self.templates.dir {
            Some(dir) => {
                let root = workspace_root.join(dir);
                tracing::debug!(dir = %root.display(), "Using workspace template directory");
                TemplateRenderer::new(Box::new(DirectoryTemplates::new(root)))
            }
            None => TemplateRenderer::embedded(),
        }
    }
}
