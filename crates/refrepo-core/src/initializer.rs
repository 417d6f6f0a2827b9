//! Exactly-once repository initialization

use std::path::Path;

use refrepo_fs::{RepoLock, io};
use refrepo_git::{Actor, VersionStore};

use crate::{Result, inspect, seeder};

/// Message of the commit that seeds every new repository.
pub const GENESIS_MESSAGE: &str = "Initial repository setup.";

/// What [`ensure_initialized`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initialization {
    /// The repository was created; carries the genesis commit id.
    Created { commit: String },
    /// A complete repository was already there; nothing changed.
    AlreadyPresent,
}

impl Initialization {
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

/// Make sure a reference repository exists at `repository`.
///
/// Runs under the repository's exclusive lock, so concurrent callers
/// serialize: the first creates the repository, the rest find it and return
/// [`Initialization::AlreadyPresent`].
///
/// Creation steps: create the directory with its parents, initialize an
/// empty store, seed the layout, stage everything and record the genesis
/// commit authored by `actor`. A failure part-way is reported and not rolled
/// back. A later call on such a leftover directory fails with
/// [`Error::PartialInitialization`](crate::Error::PartialInitialization)
/// instead of treating it as initialized.
pub fn ensure_initialized(
    store: &dyn VersionStore,
    repository: &Path,
    actor: &Actor,
) -> Result<Initialization> {
    let _lock = RepoLock::exclusive(repository)?;

    if repository.is_dir() {
        if let Err(e) = inspect::check_complete(store, repository) {
            tracing::warn!(path = %repository.display(), error = %e, "Found partially initialized repository");
            return Err(e);
        }
        tracing::debug!(path = %repository.display(), "Repository already initialized");
        return Ok(Initialization::AlreadyPresent);
    }

    io::create_dir_all(repository)?;
    store.init(repository)?;
    seeder::seed(repository)?;
    store.stage_all(repository)?;
    let commit = store.commit(repository, actor, GENESIS_MESSAGE)?;

    tracing::info!(
        path = %repository.display(),
        %commit,
        %actor,
        "Created reference repository"
    );
    Ok(Initialization::Created { commit })
}
