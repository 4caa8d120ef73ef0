//! Init command implementation
//!
//! Creates a new workspace directory under the current directory.

use std::path::Path;

use colored::Colorize;
use gitws_core::{Topology, init_workspace};
use gitws_git::VersionControl;

use super::print_head_commit;
use crate::error::Result;

/// Run the init command
pub fn run_init(parent: &Path, name: &str, topology: &str, vcs: &dyn VersionControl) -> Result<()> {
    let topology: Topology = topology.parse()?;

    println!(
        "{} Initializing workspace {} ({} topology)...",
        "=>".blue().bold(),
        name.cyan(),
        topology.to_string().cyan()
    );

    let report = init_workspace(parent, name, topology, vcs)?;

    print_head_commit(&report.root);
    println!(
        "{} Successfully initialized workspace '{}'",
        "OK".green().bold(),
        report.name
    );
    Ok(())
}
