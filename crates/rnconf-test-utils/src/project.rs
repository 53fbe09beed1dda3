//! [`TestProject`] builder for resolver test scenarios.

use rnconf_fs::NormalizedPath;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary app directory with helpers to lay out packages.
///
/// # Example
///
/// ```rust,no_run
/// use rnconf_test_utils::{TestProject, mocks};
///
/// let project = TestProject::new()
///     .with_files(mocks::REACT_NATIVE)
///     .with_package_json(r#"{"dependencies": {"react-native": "0.0.1"}}"#);
/// project.assert_file_exists("node_modules/react-native/package.json");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the root as a [`NormalizedPath`], ready for the resolver.
    pub fn root(&self) -> NormalizedPath {
        NormalizedPath::new(self.path())
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
    }

    /// Write every `(relative path, content)` pair.
    pub fn write_files(&self, files: &[(&str, &str)]) {
        for (relative, content) in files {
            self.write(relative, content);
        }
    }

    pub fn with_files(self, files: &[(&str, &str)]) -> Self {
        self.write_files(files);
        self
    }

    pub fn with_package_json(self, content: &str) -> Self {
        self.write("package.json", content);
        self
    }

    /// Write the root `react-native.config.json`.
    pub fn with_config(self, content: &str) -> Self {
        self.write("react-native.config.json", content);
        self
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
