//! End-to-end workspace lifecycle against real git
//!
//! init -> add (shared and standalone) -> re-add, checking the committed
//! history through git2 after every step.

use std::fs;
use std::path::{Path, PathBuf};

use gitws_core::{CarryOver, Error, Topology, WrapperBuilder, init_workspace, list_wrappers};
use gitws_git::commits;
use gitws_test_utils::git::{open_repo, test_git, upstream_repo, upstream_repo_with_files};
use pretty_assertions::assert_eq;
use regex::Regex;
use tempfile::TempDir;

struct Fixture {
    temp: TempDir,
    root: PathBuf,
}

impl Fixture {
    fn new(topology: Topology) -> Self {
        let temp = TempDir::new().unwrap();
        let report = init_workspace(temp.path(), "myworkspace", topology, &test_git()).unwrap();
        Self {
            root: report.root,
            temp,
        }
    }

    fn upstream(&self, name: &str, files: &[(&str, &str)]) -> String {
        let path = self.temp.path().join("upstream").join(name);
        if files.is_empty() {
            upstream_repo(&path);
        } else {
            upstream_repo_with_files(&path, files);
        }
        path.to_string_lossy().into_owned()
    }

    fn add(&self, url: &str) -> gitws_core::Result<gitws_core::WrapperReport> {
        WrapperBuilder::new(&self.root, &test_git()).build(url)
    }
}

fn head_message(repo: &Path) -> String {
    commits::head_commit(repo).unwrap().unwrap().message
}

// =============================================================================
// init
// =============================================================================

#[test]
fn test_init_makes_one_commit() {
    let ws = Fixture::new(Topology::Shared);

    assert!(ws.root.join("repos/.gitkeep").is_file());
    assert!(ws.root.join("scripts").is_dir());
    assert_eq!(commits::commit_count(&ws.root).unwrap(), 1);
    assert_eq!(head_message(&ws.root), "Initial workspace setup");

    let changed = commits::head_changed_paths(&ws.root).unwrap();
    assert_eq!(
        changed,
        vec![".gitignore", "README.md", "repos/.gitkeep", "workspace.toml"]
    );
}

#[test]
fn test_second_init_fails() {
    let ws = Fixture::new(Topology::Shared);

    let result = init_workspace(ws.temp.path(), "myworkspace", Topology::Shared, &test_git());

    assert!(matches!(result, Err(Error::WorkspaceExists { .. })));
    assert_eq!(commits::commit_count(&ws.root).unwrap(), 1);
}

#[test]
fn test_init_completes_after_failed_commit() {
    let temp = TempDir::new().unwrap();
    let unsigned = test_git()
        .with_config("commit.gpgsign", "true")
        .with_config("gpg.program", "false");

    let first = init_workspace(temp.path(), "ws", Topology::Shared, &unsigned);
    assert!(matches!(first, Err(Error::GitCommit { .. })));

    let report = init_workspace(temp.path(), "ws", Topology::Shared, &test_git()).unwrap();

    assert_eq!(commits::commit_count(&report.root).unwrap(), 1);
    assert_eq!(head_message(&report.root), "Initial workspace setup");
    assert_eq!(
        commits::head_changed_paths(&report.root).unwrap(),
        vec![".gitignore", "README.md", "repos/.gitkeep", "workspace.toml"]
    );
}

// =============================================================================
// add, shared topology
// =============================================================================

#[test]
fn test_shared_add_is_one_commit_at_workspace_root() {
    let ws = Fixture::new(Topology::Shared);
    let url = ws.upstream("project", &[]);

    let report = ws.add(&url).unwrap();

    assert_eq!(report.name, "project");
    assert_eq!(report.carry_over, Some(CarryOver::Skipped));
    assert_eq!(commits::commit_count(&ws.root).unwrap(), 2);
    assert_eq!(
        head_message(&ws.root),
        "Add project repository with development wrapper"
    );

    let changed = commits::head_changed_paths(&ws.root).unwrap();
    for expected in [
        ".gitmodules",
        "repos/project/.gitignore",
        "repos/project/README.md",
        "repos/project/repo",
    ] {
        assert!(changed.contains(&expected.to_string()), "{expected} missing from {changed:?}");
    }
    assert!(ws.root.join("repos/project/repo/README.md").is_file());

    let gitmodules = fs::read_to_string(ws.root.join(".gitmodules")).unwrap();
    assert!(gitmodules.contains("path = repos/project/repo"), "{gitmodules}");
}

#[test]
fn test_shared_add_renders_clone_date() {
    let ws = Fixture::new(Topology::Shared);
    let url = ws.upstream("dated", &[]);

    ws.add(&url).unwrap();

    let readme = fs::read_to_string(ws.root.join("repos/dated/README.md")).unwrap();
    let pattern = Regex::new(r"Added: \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\n").unwrap();
    assert!(pattern.is_match(&readme), "{readme}");
    assert!(readme.contains(&url));
}

#[test]
fn test_shared_add_commits_carried_over_local() {
    let ws = Fixture::new(Topology::Shared);
    let url = ws.upstream(
        "service",
        &[
            ("local/dev.env", "PORT=8080\n"),
            ("local/seed/data.sql", "-- seed\n"),
            ("local/.env.local", "SECRET=1\n"),
            ("local/build.log", "ok\n"),
        ],
    );

    let report = ws.add(&url).unwrap();

    assert_eq!(report.carry_over, Some(CarryOver::Copied));
    let changed = commits::head_changed_paths(&ws.root).unwrap();
    for expected in [
        "repos/service/local/.env.local",
        "repos/service/local/build.log",
        "repos/service/local/dev.env",
        "repos/service/local/seed/data.sql",
    ] {
        assert!(changed.contains(&expected.to_string()), "{expected} missing from {changed:?}");
    }
}

#[test]
fn test_adding_same_repository_twice_fails_at_submodule() {
    let ws = Fixture::new(Topology::Shared);
    let url = ws.upstream("twice", &[]);
    ws.add(&url).unwrap();

    let result = ws.add(&url);

    assert!(matches!(result, Err(Error::Submodule { .. })));
    assert_eq!(commits::commit_count(&ws.root).unwrap(), 2);
}

#[test]
fn test_unreachable_repository_fails_without_commit() {
    let ws = Fixture::new(Topology::Shared);
    let missing = ws.temp.path().join("upstream/missing");

    let result = ws.add(&missing.to_string_lossy());

    assert!(matches!(result, Err(Error::Submodule { .. })));
    assert_eq!(commits::commit_count(&ws.root).unwrap(), 1);
}

// =============================================================================
// add, standalone topology
// =============================================================================

#[test]
fn test_standalone_wrapper_has_own_history() {
    let ws = Fixture::new(Topology::Standalone);
    let url = ws.upstream("widget", &[("local/ignored.txt", "x")]);

    let report = ws.add(&url).unwrap();

    let wrapper = ws.root.join("repos/widget");
    assert_eq!(report.commit_root, wrapper);
    assert!(open_repo(&wrapper).workdir().is_some());
    assert_eq!(commits::commit_count(&wrapper).unwrap(), 1);
    assert_eq!(commits::commit_count(&ws.root).unwrap(), 1);

    let changed = commits::head_changed_paths(&wrapper).unwrap();
    for expected in [".gitmodules", "README.md", "local/.gitkeep", "src"] {
        assert!(changed.contains(&expected.to_string()), "{expected} missing from {changed:?}");
    }
    assert!(!wrapper.join("local/ignored.txt").exists());
}

// =============================================================================
// list
// =============================================================================

#[test]
fn test_list_reports_added_wrappers() {
    let ws = Fixture::new(Topology::Shared);
    let first = ws.upstream("bravo", &[]);
    let second = ws.upstream("alpha", &[]);
    ws.add(&first).unwrap();
    ws.add(&second).unwrap();

    let entries = list_wrappers(&ws.root).unwrap();

    let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "bravo"]);
    assert!(entries.iter().all(|e| e.nested.is_some()));
}
