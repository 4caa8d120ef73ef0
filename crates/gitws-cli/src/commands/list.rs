//! List command implementation

use std::path::Path;

use colored::Colorize;
use gitws_core::list_wrappers;

use crate::error::Result;

/// Run the list command
pub fn run_list(workspace_root: &Path) -> Result<()> {
    let entries = list_wrappers(workspace_root)?;

    println!("{}", "Repositories".bold());
    println!();

    if entries.is_empty() {
        println!(
            "  No repositories yet. Use {} to add one.",
            "git-workspace add <repository-url>".cyan()
        );
        return Ok(());
    }

    for entry in &entries {
        match &entry.nested {
            Some(nested) => {
                let layout = nested
                    .file_name()
                    .map(|n| format!("{}/", n.to_string_lossy()))
                    .unwrap_or_default();
                println!("  {:<24} {}", entry.name.green(), layout.dimmed());
            }
            None => println!("  {:<24} {}", entry.name.yellow(), "(no repository)".dimmed()),
        }
    }

    println!();
    println!("{} {} repositories", "Total:".dimmed(), entries.len());
    Ok(())
}
