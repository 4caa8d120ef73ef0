//! Well-known names inside a workspace and its wrappers.

use std::path::Path;

/// Standard workspace filesystem markers and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspacePath {
    /// The `repos` directory (workspace marker, one entry per wrapper)
    ReposDir,
    /// The `scripts` directory (present in workspaces and wrappers)
    ScriptsDir,
    /// The `local` directory inside a wrapper or a nested repository
    LocalDir,
    /// Empty marker file keeping otherwise-empty directories in git
    KeepFile,
    /// The `workspace.toml` configuration file at the workspace root
    ConfigFile,
    /// The `repo` subdirectory holding the nested repository (shared topology)
    SharedNested,
    /// The `src` subdirectory holding the nested repository (standalone topology)
    StandaloneNested,
}

impl WorkspacePath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReposDir => "repos",
            Self::ScriptsDir => "scripts",
            Self::LocalDir => "local",
            Self::KeepFile => ".gitkeep",
            Self::ConfigFile => "workspace.toml",
            Self::SharedNested => "repo",
            Self::StandaloneNested => "src",
        }
    }
}

impl AsRef<Path> for WorkspacePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for WorkspacePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for WorkspacePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
