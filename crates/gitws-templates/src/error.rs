//! Error types for gitws-templates

use std::path::PathBuf;

/// Result type for gitws-templates operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing, parsing, executing or writing templates
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to list templates in '{folder}': {source}")]
    List {
        folder: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Template not found: {id}")]
    NotFound { id: String },

    #[error("Failed to parse template {id}: {source}")]
    Parse {
        id: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to execute template {id}: {source}")]
    Exec {
        id: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("Failed to create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: gitws_fs::Error,
    },
}
