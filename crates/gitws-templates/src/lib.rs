//! Scaffold templates for git-workspace
//!
//! Two template sets exist: [`TemplateSet::Workspace`], rendered once when a
//! workspace is initialized, and [`TemplateSet::RepoWrapper`], rendered into
//! every new repository wrapper.
//!
//! Templates use MiniJinja `{{ field }}` syntax. Referencing a field the data
//! record does not have is an error rather than an empty string.
//!
//! ## Adding a new template
//!
//! 1. Create the file under `templates/<set folder>/`
//! 2. Add a `pub const` with `include_str!` and an entry in [`embedded::ALL`]
//!
//! The output file name is the template's base name, so two templates in one
//! set must not share a base name.

pub mod data;
pub mod embedded;
pub mod error;
pub mod renderer;
pub mod source;

pub use data::{RepoData, TemplateSet, WorkspaceData};
pub use error::{Error, Result};
pub use renderer::TemplateRenderer;
pub use source::{DirectoryTemplates, EmbeddedTemplates, TemplateSource};
