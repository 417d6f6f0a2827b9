//! Starter-file export into student workspaces

use std::path::Path;

use refrepo_fs::{LayoutDir, RepoLock, copy_dir_contents};

use crate::Result;

/// What [`export_starter_files`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The repository has no `starter` directory; the destination is untouched.
    NoStarterFiles,
    /// Starter files were copied.
    Copied { files: usize },
}

/// Copy the contents of `<repository>/starter` into `destination`.
///
/// The directory's contents are copied, not the directory itself, and files
/// already at the destination under the same relative path are overwritten.
/// A missing `starter` directory (or missing repository) is not an error.
///
/// Reads happen under the repository's shared lock, so the copy never
/// observes a writer's half-finished changes. A failure part-way leaves a
/// partial copy at the destination.
pub fn export_starter_files(repository: &Path, destination: &Path) -> Result<ExportOutcome> {
    // The lock file lives beside the repository; without that parent
    // directory there is no repository and nothing to lock.
    let parent_exists = repository
        .parent()
        .is_some_and(|p| p.as_os_str().is_empty() || p.is_dir());
    if !parent_exists {
        tracing::debug!(path = %repository.display(), "No repository, skipping starter export");
        return Ok(ExportOutcome::NoStarterFiles);
    }

    let _lock = RepoLock::shared(repository)?;

    let starter = repository.join(LayoutDir::Starter);
    if !starter.is_dir() {
        tracing::debug!(path = %repository.display(), "No starter directory, skipping export");
        return Ok(ExportOutcome::NoStarterFiles);
    }

    let files = copy_dir_contents(&starter, destination)?;
    tracing::info!(
        path = %repository.display(),
        destination = %destination.display(),
        files,
        "Exported starter files"
    );
    Ok(ExportOutcome::Copied { files })
}
