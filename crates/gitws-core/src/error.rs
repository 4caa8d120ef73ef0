//! Error types for gitws-core

use std::path::PathBuf;

/// Result type for gitws-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building workspaces and wrappers.
///
/// Every error is terminal for the current operation. Nothing already written
/// to disk is rolled back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No repository name could be derived from the URL
    #[error("Could not extract repository name from URL: '{url}'")]
    InvalidUrl { url: String },

    /// The workspace name is empty
    #[error("Invalid workspace name: '{name}'")]
    InvalidWorkspaceName { name: String },

    /// The directory has no `repos/` directory
    #[error("{path} is not a workspace (repos directory not found)")]
    NotAWorkspace { path: PathBuf },

    /// `init` targeted a directory that already is a workspace
    #[error("Workspace already exists at {path}")]
    WorkspaceExists { path: PathBuf },

    /// Unknown topology name
    #[error("Invalid topology '{value}'. Must be 'shared' or 'standalone'.")]
    InvalidTopology { value: String },

    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: gitws_fs::Error,
    },

    #[error("Failed to create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: gitws_fs::Error,
    },

    #[error("Failed to read workspace configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: gitws_fs::Error,
    },

    #[error("Failed to initialize git repository in {path}: {source}")]
    GitInit {
        path: PathBuf,
        #[source]
        source: gitws_git::Error,
    },

    /// Adding or updating the nested repository failed
    #[error("Failed to add {url} as submodule at {path}: {source}")]
    Submodule {
        url: String,
        path: PathBuf,
        #[source]
        source: gitws_git::Error,
    },

    /// Carry-over of a repository-provided directory failed part way
    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: gitws_fs::Error,
    },

    #[error("Failed to stage changes in {root}: {source}")]
    GitStage {
        root: PathBuf,
        #[source]
        source: gitws_git::Error,
    },

    #[error("Failed to commit in {root}: {source}")]
    GitCommit {
        root: PathBuf,
        #[source]
        source: gitws_git::Error,
    },

    /// Listing, parsing, executing or writing templates failed
    #[error(transparent)]
    Template(#[from] gitws_templates::Error),

    /// Other filesystem error from gitws-fs
    #[error(transparent)]
    Fs(#[from] gitws_fs::Error),
}
