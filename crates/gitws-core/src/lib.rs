//! Workspace and repository wrapper orchestration for git-workspace
//!
//! This crate sequences the side effects that turn a repository URL into a
//! committed development wrapper:
//!
//! - **Naming**: canonical wrapper name from a repository URL
//! - **Topology**: where the nested repository lives and which directory is committed
//! - **Wrapper builder**: directories, submodule, templates, carry-over, commit
//! - **Workspace**: initialization and listing of wrappers
//!
//! # Architecture
//!
//! ```text
//!                  gitws-cli
//!                      |
//!                  gitws-core
//!                      |
//!      +---------------+----------------+
//!      |               |                |
//!  gitws-fs        gitws-git      gitws-templates
//! ```
//!
//! All operations take explicit paths; nothing here changes the process
//! working directory. Version control is reached only through
//! [`gitws_git::VersionControl`], so the orchestration runs against a fake in
//! tests.

pub mod carry_over;
pub mod commit;
pub mod config;
pub mod error;
pub mod naming;
pub mod topology;
pub mod workspace;
pub mod wrapper;

pub use carry_over::{CarryOver, carry_over};
pub use commit::finalize;
pub use config::WorkspaceConfig;
pub use error::{Error, Result};
pub use naming::{resolve_repo_name, title_case};
pub use topology::Topology;
pub use workspace::{
    WorkspaceReport, WrapperEntry, init_workspace, init_workspace_with, is_workspace, list_wrappers,
};
pub use wrapper::{WrapperBuilder, WrapperReport, capture_timestamp, commit_message};
