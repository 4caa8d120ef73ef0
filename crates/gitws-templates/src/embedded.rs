//! Templates compiled into the binary.
//!
//! Paths are relative to this file and checked at compile time.

pub const WORKSPACE_README: &str = include_str!("../templates/workspace/README.md");
pub const WORKSPACE_GITIGNORE: &str = include_str!("../templates/workspace/.gitignore");

pub const REPO_WRAPPER_README: &str = include_str!("../templates/repo_wrapper/README.md");
pub const REPO_WRAPPER_GITIGNORE: &str = include_str!("../templates/repo_wrapper/.gitignore");

/// Every embedded template as `(identifier, body)`.
pub const ALL: &[(&str, &str)] = &[
    ("workspace/README.md", WORKSPACE_README),
    ("workspace/.gitignore", WORKSPACE_GITIGNORE),
    ("repo_wrapper/README.md", REPO_WRAPPER_README),
    ("repo_wrapper/.gitignore", REPO_WRAPPER_GITIGNORE),
];
