//! Template rendering into files

use std::path::{Path, PathBuf};

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::{EmbeddedTemplates, Error, Result, TemplateSet, TemplateSource};

/// Renders templates from a [`TemplateSource`].
pub struct TemplateRenderer {
    source: Box<dyn TemplateSource>,
}

impl TemplateRenderer {
    pub fn new(source: Box<dyn TemplateSource>) -> Self {
        Self { source }
    }

    /// Renderer over the templates compiled into the binary.
    pub fn embedded() -> Self {
        Self::new(Box::new(EmbeddedTemplates))
    }

    /// Template identifiers of `set`, in render order.
    pub fn list_templates(&self, set: TemplateSet) -> Result<Vec<String>> {
        self.source.list_templates(set.folder())
    }

    /// Parse and execute the template `id` against `data`.
    pub fn render<T: Serialize>(&self, id: &str, data: &T) -> Result<String> {
        let body = self.source.get_template(id)?;
        let env = environment();

        let template = env
            .template_from_named_str(id, &body)
            .map_err(|source| Error::Parse {
                id: id.to_string(),
                source,
            })?;

        template.render(data).map_err(|source| Error::Exec {
            id: id.to_string(),
            source,
        })
    }

    /// Render every template of `set` into `target_dir`.
    ///
    /// Each output file is named after the template's base name. Returns the
    /// written paths in render order. The first failure stops the pass; files
    /// already written stay on disk.
    pub fn render_set<T: Serialize>(
        &self,
        set: TemplateSet,
        data: &T,
        target_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for id in self.list_templates(set)? {
            let content = self.render(&id, data)?;

            let path = target_dir.join(base_name(&id));
            gitws_fs::io::write_text(&path, &content).map_err(|source| Error::FileCreate {
                path: path.clone(),
                source,
            })?;

            tracing::debug!(template = %id, path = %path.display(), "Rendered template");
            written.push(path);
        }

        Ok(written)
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer").finish_non_exhaustive()
    }
}

// Strict undefined handling turns a missing data field into an error, and
// output is plain text, never HTML-escaped.
fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

fn base_name(id: &str) -> &str {
    id.rsplit('/').next().unwrap_or(id)
}
