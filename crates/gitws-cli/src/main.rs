//! git-workspace CLI
//!
//! Creates workspaces and wraps git repositories added to them.

mod cli;
mod commands;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{} tracing already initialized", "warning:".yellow().bold());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(cmd, dir),
        None => {
            println!("{} workspace manager", "git-workspace".green().bold());
            println!();
            println!("Run {} for available commands.", "git-workspace --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, dir: PathBuf) -> Result<()> {
    let git = gitws_git::GitCli::new();
    match cmd {
        Commands::Init { name, topology } => commands::run_init(&dir, &name, &topology, &git),
        Commands::Add { url } => commands::run_add(&dir, &url, &git),
        Commands::List => commands::run_list(&dir),
        Commands::Version => {
            commands::run_version();
            Ok(())
        }
    }
}
