//! Git fixtures and the configuration tests need to run git unattended.
//!
//! Tests never rely on the developer's global git configuration: identity,
//! signing and the `file` transport are pinned through `-c` overrides or the
//! `GIT_CONFIG_*` environment variables.

use std::fs;
use std::path::Path;
use std::process::Command;

use gitws_git::GitCli;

/// Config pairs every test invocation of git needs.
///
/// `protocol.file.allow` lets `git submodule add` clone from a local path.
pub const TEST_GIT_CONFIG: &[(&str, &str)] = &[
    ("user.name", "Test User"),
    ("user.email", "test@example.com"),
    ("commit.gpgsign", "false"),
    ("init.defaultBranch", "main"),
    ("protocol.file.allow", "always"),
];

/// A [`GitCli`] carrying [`TEST_GIT_CONFIG`].
pub fn test_git() -> GitCli {
    TEST_GIT_CONFIG
        .iter()
        .fold(GitCli::new(), |git, (key, value)| git.with_config(*key, *value))
}

/// `GIT_CONFIG_COUNT`/`GIT_CONFIG_KEY_n`/`GIT_CONFIG_VALUE_n` pairs carrying
/// [`TEST_GIT_CONFIG`], for tests that spawn the CLI binary.
pub fn git_config_env() -> Vec<(String, String)> {
    let mut env = vec![(
        "GIT_CONFIG_COUNT".to_string(),
        TEST_GIT_CONFIG.len().to_string(),
    )];
    for (i, (key, value)) in TEST_GIT_CONFIG.iter().enumerate() {
        env.push((format!("GIT_CONFIG_KEY_{i}"), key.to_string()));
        env.push((format!("GIT_CONFIG_VALUE_{i}"), value.to_string()));
    }
    env
}

/// Run `git` in `dir` with the test configuration, panicking on failure.
///
/// # Panics
/// Panics if git cannot be spawned or exits unsuccessfully.
pub fn run_git(dir: &Path, args: &[&str]) {
    let mut cmd = Command::new("git");
    for (key, value) in TEST_GIT_CONFIG {
        cmd.arg("-c").arg(format!("{key}={value}"));
    }
    let output = cmd
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|e| panic!("run_git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "run_git: `git {args:?}` failed in {}:\n{}",
            dir.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Creates a repository at `path` with a `README.md` and one commit.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn upstream_repo(path: &Path) {
    upstream_repo_with_files(path, &[]);
}

/// Like [`upstream_repo`], additionally committing `files` (relative path,
/// content). Parent directories are created as needed.
///
/// Use `local/...` paths to give the repository content that a shared
/// workspace carries over into the wrapper.
///
/// # Panics
/// Panics if any filesystem or git operation fails.
pub fn upstream_repo_with_files(path: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("upstream_repo: failed to create {}: {e}", path.display()));
    run_git(path, &["init"]);

    fs::write(path.join("README.md"), "# Upstream\n")
        .unwrap_or_else(|e| panic!("upstream_repo: failed to write README.md: {e}"));
    for (relative, content) in files {
        let file = path.join(relative);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("upstream_repo: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&file, content)
            .unwrap_or_else(|e| panic!("upstream_repo: failed to write {relative}: {e}"));
    }

    run_git(path, &["add", "--all"]);
    run_git(path, &["commit", "-m", "Initial commit"]);
}

/// Opens the repository at `path` with `git2`.
///
/// # Panics
/// Panics if `path` is not a repository.
pub fn open_repo(path: &Path) -> git2::Repository {
    git2::Repository::open(path)
        .unwrap_or_else(|e| panic!("open_repo: failed to open {}: {e}", path.display()))
}
