//! Recording later changes to a repository

use std::path::Path;

use refrepo_fs::RepoLock;
use refrepo_git::{Actor, VersionStore};

use crate::{Error, Result};

/// Apply `edit` to the working tree of an initialized repository and record
/// the result as one commit authored by `actor`.
///
/// The whole edit-stage-commit sequence runs under the repository's
/// exclusive lock, so readers see the tree either before or after it.
/// If any step fails, nothing is committed and the working tree is restored
/// to the last commit before the lock is released; the original error is
/// returned.
///
/// Returns the new commit id.
pub fn commit_changes<F>(
    store: &dyn VersionStore,
    repository: &Path,
    actor: &Actor,
    message: &str,
    edit: F,
) -> Result<String>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let _lock = RepoLock::exclusive(repository)?;

    if !repository.is_dir() || !store.is_initialized(repository) {
        return Err(Error::NotInitialized {
            path: repository.to_path_buf(),
        });
    }

    match apply(store, repository, actor, message, edit) {
        Ok(commit) => {
            tracing::info!(path = %repository.display(), %commit, %actor, "Recorded repository update");
            Ok(commit)
        }
        Err(err) => {
            tracing::warn!(path = %repository.display(), error = %err, "Update failed, restoring last commit");
            if let Err(restore) = store.restore_head(repository) {
                tracing::error!(
                    path = %repository.display(),
                    error = %restore,
                    "Could not restore working tree"
                );
            }
            Err(err)
        }
    }
}

fn apply<F>(
    store: &dyn VersionStore,
    repository: &Path,
    actor: &Actor,
    message: &str,
    edit: F,
) -> Result<String>
where
    F: FnOnce(&Path) -> Result<()>,
{
    edit(repository)?;
    store.stage_all(repository)?;
    Ok(store.commit(repository, actor, message)?)
}
