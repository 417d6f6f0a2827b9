//! Safe I/O primitives

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Write content atomically to a file.
///
/// Content goes to a temporary file in the target's directory, is flushed to
/// disk, then renamed over the target. Readers see either the old or the new
/// content, never a truncated file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    create_dir_all(parent)?;

    // Same directory keeps the rename on one filesystem
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    temp.write_all(content).map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

/// Create a directory and all missing parents. Succeeds if it already exists.
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Create or truncate `path` as an empty file.
pub fn write_empty(path: &Path) -> Result<()> {
    fs::write(path, b"").map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_creates_missing_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a/b/file.txt");

        write_atomic(&path, b"hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn write_atomic_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.txt");
        fs::write(&path, "a much longer original body").unwrap();

        write_atomic(&path, b"short").unwrap();

        assert_eq!(read_text(&path).unwrap(), "short");
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        write_atomic(&dir.path().join("file.txt"), b"x").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn write_empty_truncates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".keep");
        fs::write(&path, "stale").unwrap();

        write_empty(&path).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn read_text_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_text(&path).unwrap_err();
        assert_eq!(err.path(), Some(path.as_path()));
    }
}
