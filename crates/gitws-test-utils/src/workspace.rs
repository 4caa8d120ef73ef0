//! [`TestWorkspace`] builder for workspace layouts on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory holding a workspace, with helpers for setup and
/// assertions.
///
/// # Example
///
/// ```rust,no_run
/// use gitws_test_utils::workspace::TestWorkspace;
///
/// let ws = TestWorkspace::new().scaffold("standalone");
/// ws.assert_file_exists("repos");
/// ws.assert_file_contains("workspace.toml", "standalone");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `root/relative`
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Lay out `repos/`, `scripts/` and a `workspace.toml` naming `topology`,
    /// without touching git.
    pub fn scaffold(self, topology: &str) -> Self {
        fs::create_dir_all(self.path("repos")).unwrap();
        fs::create_dir_all(self.path("scripts")).unwrap();
        fs::write(self.path("repos/.gitkeep"), "").unwrap();
        fs::write(
            self.path("workspace.toml"),
            format!("[core]\ntopology = \"{topology}\"\n"),
        )
        .unwrap();
        self
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Sorted entry names of the directory `relative`.
    pub fn entries(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.path(relative))
            .unwrap_or_else(|e| panic!("Could not read {relative}: {e}"))
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to the root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.path(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
