//! Where template bodies come from

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::embedded;
use crate::{Error, Result};

/// Storage for template bodies addressed by `folder/name` identifiers.
pub trait TemplateSource {
    /// Identifiers of every template directly under `folder`, sorted.
    fn list_templates(&self, folder: &str) -> Result<Vec<String>>;

    /// Raw body of the template `id`.
    fn get_template(&self, id: &str) -> Result<String>;
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn list_templates(&self, folder: &str) -> Result<Vec<String>> {
        let prefix = format!("{folder}/");
        let mut ids: Vec<String> = embedded::ALL
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| id.strip_prefix(&prefix).is_some_and(|rest| !rest.contains('/')))
            .map(str::to_string)
            .collect();

        if ids.is_empty() {
            return Err(Error::List {
                folder: folder.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no embedded templates"),
            });
        }

        ids.sort();
        Ok(ids)
    }

    fn get_template(&self, id: &str) -> Result<String> {
        embedded::ALL
            .iter()
            .find(|(name, _)| *name == id)
            .map(|(_, body)| body.to_string())
            .ok_or_else(|| Error::NotFound { id: id.to_string() })
    }
}

/// Templates read from `<root>/<folder>/<name>` on disk.
///
/// Subdirectories of a folder are ignored.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for DirectoryTemplates {
    fn list_templates(&self, folder: &str) -> Result<Vec<String>> {
        let list_err = |source| Error::List {
            folder: folder.to_string(),
            source,
        };

        let dir = self.root.join(folder);
        let mut ids = Vec::new();
        for entry in fs::read_dir(&dir).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            if entry.file_type().map_err(list_err)?.is_dir() {
                continue;
            }
            ids.push(format!("{folder}/{}", entry.file_name().to_string_lossy()));
        }

        ids.sort();
        Ok(ids)
    }

    fn get_template(&self, id: &str) -> Result<String> {
        let path = self.root.join(id);
        fs::read_to_string(&path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "Template unreadable");
            Error::NotFound { id: id.to_string() }
        })
    }
}
