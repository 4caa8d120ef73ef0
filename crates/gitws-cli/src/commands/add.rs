//! Add command implementation

use std::path::Path;

use colored::Colorize;
use gitws_core::{CarryOver, WrapperBuilder};
use gitws_git::VersionControl;

use super::print_head_commit;
use crate::error::Result;

/// Run the add command against the workspace at `workspace_root`
pub fn run_add(workspace_root: &Path, url: &str, vcs: &dyn VersionControl) -> Result<()> {
    println!("{} Adding {}...", "=>".blue().bold(), url.cyan());

    let report = WrapperBuilder::new(workspace_root, vcs).build(url)?;

    if report.carry_over == Some(CarryOver::Copied) {
        println!("Copied local/ directory from repository to wrapper");
    }

    print_head_commit(&report.commit_root);
    println!(
        "{} Successfully added repository '{}' to workspace as a submodule",
        "OK".green().bold(),
        report.name
    );
    Ok(())
}
