//! Template sets and the data records rendered into them

use serde::Serialize;

/// A named group of templates rendered together for one scaffold type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSet {
    /// Files at the root of a freshly initialized workspace
    Workspace,
    /// Files at the top level of a freshly created repository wrapper
    RepoWrapper,
}

impl TemplateSet {
    /// Logical folder holding this set's templates.
    pub fn folder(&self) -> &'static str {
        match self {
            TemplateSet::Workspace => "workspace",
            TemplateSet::RepoWrapper => "repo_wrapper",
        }
    }
}

impl std::fmt::Display for TemplateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.folder())
    }
}

/// Data for the workspace template set.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceData {
    /// Display name of the workspace
    pub name: String,
}

/// Data for the repository wrapper template set.
#[derive(Debug, Clone, Serialize)]
pub struct RepoData {
    /// Resolved repository identifier
    pub repo_name: String,
    /// URL the nested repository was added from
    pub repo_url: String,
    /// Capture time, `YYYY-MM-DD HH:MM:SS`
    pub clone_date: String,
}
