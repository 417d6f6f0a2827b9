//! Read-only inspection of existing repositories

use std::path::Path;

use refrepo_fs::{RepoLock, missing_layout_dirs};
use refrepo_git::{CommitInfo, VersionStore};

use crate::{Error, Result};

/// Verify that an existing repository directory finished initialization.
///
/// Checks that version-control metadata is present and that at least one
/// commit exists. The first gap found is reported as
/// [`Error::PartialInitialization`]; nothing is repaired.
///
/// Layout directories may be removed by later commits (an assignment without
/// starter files is valid), so missing ones are only logged.
///
/// Callers must hold the repository lock.
pub fn check_complete(store: &dyn VersionStore, repository: &Path) -> Result<()> {
    let partial = |reason: String| Error::PartialInitialization {
        path: repository.to_path_buf(),
        reason,
    };

    if !store.is_initialized(repository) {
        return Err(partial("version-control metadata is missing".into()));
    }
    if !store.has_commits(repository)? {
        return Err(partial("no genesis commit has been recorded".into()));
    }

    let missing = missing_layout_dirs(repository);
    if !missing.is_empty() {
        let names: Vec<_> = missing.iter().map(|d| d.as_str()).collect();
        tracing::warn!(
            path = %repository.display(),
            missing = %names.join(", "),
            "Repository is missing layout directories"
        );
    }

    Ok(())
}

/// Commits of the repository at `repository`, newest first.
///
/// Read under the repository's shared lock.
pub fn history(store: &dyn VersionStore, repository: &Path) -> Result<Vec<CommitInfo>> {
    // Repositories are never removed by this crate
    if !repository.is_dir() {
        return Err(Error::NotInitialized {
            path: repository.to_path_buf(),
        });
    }
    let _lock = RepoLock::shared(repository)?;
    let commits = store.history(repository)?;
    tracing::debug!(
        path = %repository.display(),
        count = commits.len(),
        head = commits.first().map(CommitInfo::short_id).unwrap_or("none"),
        "Read repository history"
    );
    Ok(commits)
}
