//! [`TestStorage`], a temporary course storage root.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary course storage root with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use refrepo_test_utils::storage::TestStorage;
///
/// let storage = TestStorage::new();
/// let repo = storage.repository_path("hw1");
/// storage.write(&repo.join("starter/a.txt"), "alpha");
/// storage.assert_file_contains(&repo.join("starter/a.txt"), "alpha");
/// ```
pub struct TestStorage {
    temp_dir: TempDir,
}

impl Default for TestStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStorage {
    /// Create an empty temporary storage root.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the storage root.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Where the repository for `slug` lives under this root.
    pub fn repository_path(&self, slug: &str) -> PathBuf {
        self.root().join("assignments").join(slug)
    }

    /// A fresh directory under the root, e.g. a student workspace.
    pub fn scratch_dir(&self, name: &str) -> PathBuf {
        let dir = self.root().join("scratch").join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `content` to `path`, creating parent directories.
    pub fn write(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Assert that `path` exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &Path) {
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }

    /// Assert that `path` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &Path) {
        assert!(
            !path.exists(),
            "Expected file NOT to exist: {}",
            path.display()
        );
    }

    /// Assert that the file at `path` has exactly `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or differs.
    pub fn assert_file_contains(&self, path: &Path, content: &str) {
        let actual = fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()));
        assert_eq!(
            actual,
            content,
            "File {} does not have the expected content",
            path.display()
        );
    }

    /// Sorted relative paths of every file under `dir`.
    pub fn list_files(&self, dir: &Path) -> Vec<String> {
        fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
            for entry in fs::read_dir(dir).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else {
                    let rel = path.strip_prefix(base).unwrap();
                    let parts: Vec<_> = rel
                        .components()
                        .map(|c| c.as_os_str().to_string_lossy().into_owned())
                        .collect();
                    out.push(parts.join("/"));
                }
            }
        }

        let mut files = Vec::new();
        walk(dir, dir, &mut files);
        files.sort();
        files
    }
}
