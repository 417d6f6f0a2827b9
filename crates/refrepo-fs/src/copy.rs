//! Recursive directory copies

use std::fs;
use std::path::Path;

use crate::{Error, Result, io};

/// Copy everything inside `src` into `dest`, preserving relative structure.
///
/// `dest` is created if missing. Files that already exist at the same
/// relative path are overwritten; unrelated files in `dest` are left alone.
/// Entries are visited in name order. Symlinks to files are copied by
/// content; symlinks to directories are skipped so link cycles terminate.
/// A failure part-way leaves the files copied so far in place.
///
/// Returns the number of files copied.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> Result<usize> {
    io::create_dir_all(dest)?;

    let mut entries = fs::read_dir(src)
        .map_err(|e| Error::io(src, e))?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::io(src, e))?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut copied = 0;
    for entry in entries {
        let from = entry.path();
        let to = dest.join(entry.file_name());

        let file_type = entry.file_type().map_err(|e| Error::io(&from, e))?;
        if file_type.is_dir() {
            copied += copy_dir_contents(&from, &to)?;
        } else if file_type.is_symlink()
            && fs::metadata(&from).map_err(|e| Error::io(&from, e))?.is_dir()
        {
            tracing::debug!(path = %from.display(), "Skipping directory symlink");
        } else {
            fs::copy(&from, &to).map_err(|e| Error::io(&to, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}
