//! Tests for the wrapper pipeline against the recording version-control fake

use std::fs;
use std::path::{Path, PathBuf};

use gitws_core::{CarryOver, Error, Topology, WrapperBuilder};
use gitws_git::{RecordingVcs, VcsCall, VcsOp};
use gitws_test_utils::workspace::TestWorkspace;
use pretty_assertions::assert_eq;
use rstest::rstest;

const URL: &str = "https://example.com/org/demo.git";
const CLONE_DATE: &str = "2024-03-09 07:05:01";

fn build(ws: &TestWorkspace, vcs: &RecordingVcs) -> gitws_core::Result<gitws_core::WrapperReport> {
    WrapperBuilder::new(ws.root(), vcs)
        .clone_date(CLONE_DATE)
        .build(URL)
}

// Directory standing in for the upstream checkout, outside the workspace.
fn checkout(files: &[(&str, &str)]) -> (tempfile::TempDir, PathBuf) {
    let temp = tempfile::TempDir::new().unwrap();
    let dir = temp.path().join("demo");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("README.md"), "# Demo").unwrap();
    for (relative, content) in files {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    (temp, dir)
}

// =============================================================================
// Shared topology
// =============================================================================

#[test]
fn test_shared_runs_steps_in_order() {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new();

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(
        vcs.calls(),
        vec![
            VcsCall::AddSubmodule {
                root: ws.root().to_path_buf(),
                url: URL.to_string(),
                path: PathBuf::from("repos/demo/repo"),
            },
            VcsCall::UpdateSubmodules {
                root: ws.root().to_path_buf()
            },
            VcsCall::StageAll {
                root: ws.root().to_path_buf()
            },
            VcsCall::Commit {
                root: ws.root().to_path_buf(),
                message: "Add demo repository with development wrapper".to_string(),
            },
        ]
    );
    assert_eq!(report.name, "demo");
    assert_eq!(report.topology, Topology::Shared);
    assert_eq!(report.wrapper_dir, ws.path("repos/demo"));
    assert_eq!(report.nested_dir, ws.path("repos/demo/repo"));
    assert_eq!(report.commit_root, ws.root());
}

#[test]
fn test_shared_scaffold_and_templates() {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new();

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(
        ws.entries("repos/demo"),
        vec![".gitignore", "README.md", "local", "repo", "scripts"]
    );
    assert_eq!(
        report.rendered,
        vec![ws.path("repos/demo/.gitignore"), ws.path("repos/demo/README.md")]
    );
    ws.assert_file_contains("repos/demo/README.md", "# demo");
    ws.assert_file_contains("repos/demo/README.md", URL);
    ws.assert_file_contains("repos/demo/README.md", CLONE_DATE);
}

#[test]
fn test_shared_without_repository_local_keeps_empty_default() {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new();

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(report.carry_over, Some(CarryOver::Skipped));
    assert!(ws.path("repos/demo/local").is_dir());
    assert!(ws.entries("repos/demo/local").is_empty());
}

#[test]
fn test_shared_carries_over_repository_local() {
    let (_upstream, dir) = checkout(&[
        ("local/notes.md", "notes"),
        ("local/config/dev.env", "DEBUG=1"),
    ]);
    let ws = TestWorkspace::new().scaffold("shared");
    ws.write("repos/demo/local/stale.txt", "from an earlier run");
    let vcs = RecordingVcs::new().with_checkout(URL, &dir);

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(report.carry_over, Some(CarryOver::Copied));
    assert_eq!(ws.entries("repos/demo/local"), vec!["config", "notes.md"]);
    ws.assert_file_contains("repos/demo/local/config/dev.env", "DEBUG=1");
    ws.assert_file_not_exists("repos/demo/local/stale.txt");
}

#[cfg(unix)]
#[test]
fn test_carry_over_preserves_permission_bits() {
    use std::os::unix::fs::PermissionsExt;

    let (_upstream, dir) = checkout(&[("local/setup.sh", "#!/bin/sh\n"), ("local/secret", "x")]);
    fs::set_permissions(dir.join("local/setup.sh"), fs::Permissions::from_mode(0o755)).unwrap();
    fs::set_permissions(dir.join("local/secret"), fs::Permissions::from_mode(0o600)).unwrap();
    fs::set_permissions(dir.join("local"), fs::Permissions::from_mode(0o750)).unwrap();

    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new().with_checkout(URL, &dir);
    build(&ws, &vcs).unwrap();

    let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&ws.path("repos/demo/local/setup.sh")), 0o755);
    assert_eq!(mode(&ws.path("repos/demo/local/secret")), 0o600);
    assert_eq!(mode(&ws.path("repos/demo/local")), 0o750);
}

#[test]
fn test_rerun_tolerates_existing_wrapper() {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new();

    build(&ws, &vcs).unwrap();
    ws.write("repos/demo/scripts/keep.sh", "echo kept");
    let second = build(&ws, &vcs).unwrap();

    assert_eq!(second.name, "demo");
    ws.assert_file_exists("repos/demo/scripts/keep.sh");
    assert_eq!(
        vcs.ops().iter().filter(|op| **op == VcsOp::Commit).count(),
        2
    );
}

// =============================================================================
// Standalone topology
// =============================================================================

#[test]
fn test_standalone_initializes_and_commits_wrapper() {
    let ws = TestWorkspace::new().scaffold("standalone");
    let vcs = RecordingVcs::new();

    let report = build(&ws, &vcs).unwrap();

    let wrapper = ws.path("repos/demo");
    assert_eq!(
        vcs.calls(),
        vec![
            VcsCall::Init {
                dir: wrapper.clone()
            },
            VcsCall::AddSubmodule {
                root: wrapper.clone(),
                url: URL.to_string(),
                path: PathBuf::from("src"),
            },
            VcsCall::UpdateSubmodules {
                root: wrapper.clone()
            },
            VcsCall::StageAll {
                root: wrapper.clone()
            },
            VcsCall::Commit {
                root: wrapper.clone(),
                message: "Add demo repository with development wrapper".to_string(),
            },
        ]
    );
    assert_eq!(report.topology, Topology::Standalone);
    assert_eq!(report.nested_dir, wrapper.join("src"));
    assert_eq!(report.commit_root, wrapper);
}

#[test]
fn test_standalone_keeps_local_marker_and_skips_carry_over() {
    let (_upstream, dir) = checkout(&[("local/notes.md", "notes")]);
    let ws = TestWorkspace::new().scaffold("standalone");
    let vcs = RecordingVcs::new().with_checkout(URL, &dir);

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(report.carry_over, None);
    assert_eq!(ws.entries("repos/demo/local"), vec![".gitkeep"]);
    ws.assert_file_exists("repos/demo/src/local/notes.md");
}

#[test]
fn test_topology_override_beats_config() {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new();

    let report = WrapperBuilder::new(ws.root(), &vcs)
        .topology(Topology::Standalone)
        .build(URL)
        .unwrap();

    assert_eq!(report.topology, Topology::Standalone);
    assert_eq!(vcs.ops()[0], VcsOp::Init);
}

#[test]
fn test_missing_config_defaults_to_shared() {
    let ws = TestWorkspace::new();
    fs::create_dir(ws.path("repos")).unwrap();
    let vcs = RecordingVcs::new();

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(report.topology, Topology::Shared);
}

// =============================================================================
// Templates from the workspace
// =============================================================================

#[test]
fn test_configured_template_dir_is_used() {
    let ws = TestWorkspace::new().scaffold("shared");
    ws.write(
        "workspace.toml",
        "[core]\ntopology = \"shared\"\n\n[templates]\ndir = \"tpl\"\n",
    );
    ws.write("tpl/repo_wrapper/NOTES.md", "{{ repo_name }} added {{ clone_date }}\n");
    let vcs = RecordingVcs::new();

    let report = build(&ws, &vcs).unwrap();

    assert_eq!(report.rendered, vec![ws.path("repos/demo/NOTES.md")]);
    ws.assert_file_contains("repos/demo/NOTES.md", "demo added 2024-03-09 07:05:01");
    ws.assert_file_not_exists("repos/demo/README.md");
}

#[test]
fn test_undefined_template_field_stops_before_commit() {
    let ws = TestWorkspace::new().scaffold("shared");
    ws.write(
        "workspace.toml",
        "[core]\ntopology = \"shared\"\n\n[templates]\ndir = \"tpl\"\n",
    );
    ws.write("tpl/repo_wrapper/BROKEN.md", "{{ owner }}\n");
    let vcs = RecordingVcs::new();

    let result = build(&ws, &vcs);

    assert!(matches!(
        result,
        Err(Error::Template(gitws_templates::Error::Exec { .. }))
    ));
    assert!(!vcs.ops().contains(&VcsOp::Commit));
}

#[test]
fn test_missing_template_folder_is_list_error() {
    let ws = TestWorkspace::new().scaffold("shared");
    ws.write(
        "workspace.toml",
        "[core]\ntopology = \"shared\"\n\n[templates]\ndir = \"nowhere\"\n",
    );
    let vcs = RecordingVcs::new();

    let result = build(&ws, &vcs);

    assert!(matches!(
        result,
        Err(Error::Template(gitws_templates::Error::List { .. }))
    ));
}

// =============================================================================
// Failures
// =============================================================================

#[rstest]
#[case("")]
#[case("https://example.com/org/")]
fn test_invalid_url_touches_nothing(#[case] url: &str) {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new();

    let result = WrapperBuilder::new(ws.root(), &vcs).build(url);

    assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    assert!(vcs.calls().is_empty());
    assert_eq!(ws.entries("repos"), vec![".gitkeep"]);
}

#[test]
fn test_not_a_workspace() {
    let ws = TestWorkspace::new();
    let vcs = RecordingVcs::new();

    let result = build(&ws, &vcs);

    assert!(matches!(result, Err(Error::NotAWorkspace { .. })));
    assert!(vcs.calls().is_empty());
}

#[test]
fn test_invalid_config_is_reported() {
    let ws = TestWorkspace::new().scaffold("nested");
    let vcs = RecordingVcs::new();

    let result = build(&ws, &vcs);

    assert!(matches!(result, Err(Error::Config { .. })));
}

#[rstest]
#[case(VcsOp::AddSubmodule)]
#[case(VcsOp::UpdateSubmodules)]
fn test_submodule_failure_leaves_partial_wrapper(#[case] op: VcsOp) {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new().failing_on(op);

    let result = build(&ws, &vcs);

    assert!(matches!(result, Err(Error::Submodule { .. })));
    assert_eq!(vcs.ops().last(), Some(&op));
    ws.assert_file_exists("repos/demo");
    ws.assert_file_not_exists("repos/demo/README.md");
}

#[test]
fn test_wrapper_init_failure() {
    let ws = TestWorkspace::new().scaffold("standalone");
    let vcs = RecordingVcs::new().failing_on(VcsOp::Init);

    let result = build(&ws, &vcs);

    assert!(matches!(result, Err(Error::GitInit { .. })));
    assert_eq!(vcs.ops(), vec![VcsOp::Init]);
}

#[rstest]
#[case(VcsOp::StageAll)]
#[case(VcsOp::Commit)]
fn test_finalize_failure_keeps_rendered_files(#[case] op: VcsOp) {
    let ws = TestWorkspace::new().scaffold("shared");
    let vcs = RecordingVcs::new().failing_on(op);

    let result = build(&ws, &vcs);

    match op {
        VcsOp::StageAll => assert!(matches!(result, Err(Error::GitStage { .. }))),
        _ => assert!(matches!(result, Err(Error::GitCommit { .. }))),
    }
    ws.assert_file_exists("repos/demo/README.md");
}

#[test]
fn test_rerun_after_failure_succeeds() {
    let ws = TestWorkspace::new().scaffold("shared");

    let failing = RecordingVcs::new().failing_on(VcsOp::Commit);
    assert!(build(&ws, &failing).is_err());

    let vcs = RecordingVcs::new();
    let report = build(&ws, &vcs).unwrap();
    assert_eq!(report.name, "demo");
}
