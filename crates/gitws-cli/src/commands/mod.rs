//! Command implementations for gitws-cli

pub mod add;
pub mod init;
pub mod list;
pub mod version;

pub use add::run_add;
pub use init::run_init;
pub use list::run_list;
pub use version::run_version;

use std::path::Path;

use colored::Colorize;

/// Print the commit just created in `repo`, if it can be read back.
pub(crate) fn print_head_commit(repo: &Path) {
    match gitws_git::commits::head_commit(repo) {
        Ok(Some(commit)) => println!("   Commit: {} {}", commit.hash.yellow(), commit.message),
        Ok(None) => {}
        Err(e) => tracing::debug!(error = %e, "Could not read back the new commit"),
    }
}
