//! `git` subprocess implementation of [`VersionControl`]

use std::path::Path;
use std::process::{Command, Stdio};

use crate::{Error, Result, VersionControl, commits};

/// Runs each operation as one `git` subprocess.
///
/// Standard output and error are inherited so the user sees git's own
/// messages; only the exit status is inspected.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    config: Vec<(String, String)>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Use the `git` found on `PATH`.
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            config: Vec::new(),
        }
    }

    /// Use a specific git executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Pass `-c key=value` to every invocation.
    ///
    /// Git forwards these to its own child processes, so they also reach the
    /// clone performed by `submodule add`.
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.push((key.into(), value.into()));
        self
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<()> {
        let command = format!("{} {}", self.program, args.join(" "));

        let mut cmd = Command::new(&self.program);
        for (key, value) in &self.config {
            cmd.arg("-c").arg(format!("{key}={value}"));
        }
        cmd.args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(command = %command, dir = %dir.display(), "Running git");

        let status = cmd.status().map_err(|source| Error::Spawn {
            command: command.clone(),
            source,
        })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command,
                dir: dir.to_path_buf(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl VersionControl for GitCli {
    fn init(&self, dir: &Path) -> Result<()> {
        self.run(dir, &["init"])
    }

    fn add_submodule(&self, root: &Path, url: &str, path: &Path) -> Result<()> {
        let path = path.to_string_lossy().replace('\\', "/");
        self.run(root, &["submodule", "add", "--", url, &path])
    }

    fn update_submodules(&self, root: &Path) -> Result<()> {
        self.run(root, &["submodule", "update", "--init"])
    }

    fn stage_all(&self, root: &Path) -> Result<()> {
        self.run(root, &["add", "--all"])
    }

    fn commit(&self, root: &Path, message: &str) -> Result<()> {
        self.run(root, &["commit", "-m", message])
    }

    fn has_history(&self, dir: &Path) -> bool {
        matches!(commits::head_commit(dir), Ok(Some(_)))
    }
}
