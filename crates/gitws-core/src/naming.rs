//! Repository URL to wrapper name mapping

use crate::{Error, Result};

/// Derive the canonical wrapper name from a repository URL.
///
/// A trailing `.git` is dropped, then the last `/`-separated segment is the
/// name. Fails with [`Error::InvalidUrl`] when that segment is empty, or is
/// `.` or `..` and would escape the `repos/` directory.
///
/// ```
/// use gitws_core::resolve_repo_name;
///
/// assert_eq!(resolve_repo_name("https://example.com/org/project.git").unwrap(), "project");
/// assert_eq!(resolve_repo_name("git@example.com:org/project").unwrap(), "project");
/// assert!(resolve_repo_name("https://example.com/org/").is_err());
/// ```
pub fn resolve_repo_name(url: &str) -> Result<String> {
    let trimmed = url.strip_suffix(".git").unwrap_or(url);
    let name = trimmed.rsplit('/').next().unwrap_or_default();

    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::InvalidUrl {
            url: url.to_string(),
        });
    }

    Ok(name.to_string())
}

/// Upper-case the first letter of every word.
///
/// Words are runs of alphanumerics and underscores, so `my-workspace`
/// becomes `My-Workspace`. The rest of each word is left as is.
///
/// Every other character, including non-ASCII punctuation such as `·`, ends a
/// word. First letters are upper-cased, not title-cased, so a digraph like
/// `ǆ` becomes `Ǆ` rather than `ǅ`.
pub fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        let in_word = c.is_alphanumeric() || c == '_';
        if in_word && at_word_start {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        at_word_start = !in_word;
    }

    result
}
