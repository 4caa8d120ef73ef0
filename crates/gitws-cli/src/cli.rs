//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// git-workspace - Manage a workspace of wrapped git repositories
#[derive(Parser, Debug)]
#[command(name = "git-workspace")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "directory", global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a new workspace
    ///
    /// Creates a directory with the standard structure and template files and
    /// sets it up as a git repository.
    ///
    /// Examples:
    ///   git-workspace init myworkspace
    ///   git-workspace init myworkspace --topology standalone
    Init {
        /// Name of the workspace directory to create
        #[arg(value_name = "WORKSPACE_NAME")]
        name: String,

        /// Wrapper topology (shared or standalone)
        #[arg(short, long, default_value = "shared", env = "GIT_WORKSPACE_TOPOLOGY")]
        topology: String,
    },

    /// Add a repository to the workspace
    ///
    /// Adds the repository as a submodule inside a development wrapper under
    /// repos/. In a shared workspace, a local/ directory shipped by the
    /// repository is copied into the wrapper's local/.
    Add {
        /// URL of the repository to add
        #[arg(value_name = "REPOSITORY_URL")]
        url: String,
    },

    /// List the repositories in the workspace
    List,

    /// Print the version number
    Version,
}
