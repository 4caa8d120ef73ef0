//! Error types for gitws-git

use std::path::PathBuf;

/// Result type for gitws-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitws-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] gitws_fs::Error),

    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed in {dir} ({})", describe_exit(.code))]
    CommandFailed {
        command: String,
        dir: PathBuf,
        code: Option<i32>,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
