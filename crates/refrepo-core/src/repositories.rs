//! Slug-addressed entry point for the lifecycle operations

use std::path::{Path, PathBuf};

use refrepo_git::{Actor, CommitInfo, GitStore, VersionStore};

use crate::{
    ExportOutcome, Initialization, PlatformConfig, Result, exporter, initializer, inspect,
    paths, updater,
};

/// Lifecycle operations addressed by course storage root and assignment slug.
///
/// The storage root is passed on every call; nothing is global. When no actor
/// is given, commits are attributed to the configured platform author.
///
/// Shareable across threads; per-repository locking happens inside each
/// operation.
pub struct ReferenceRepositories {
    config: PlatformConfig,
    store: Box<dyn VersionStore>,
}

impl ReferenceRepositories {
    /// Use git as the version store.
    pub fn new(config: PlatformConfig) -> Self {
        Self::with_store(config, GitStore::new())
    }

    /// Use a custom version store.
    pub fn with_store(config: PlatformConfig, store: impl VersionStore + 'static) -> Self {
        Self {
            config,
            store: Box::new(store),
        }
    }

    /// Where the repository for `slug` lives.
    pub fn repository_path(&self, storage_root: &Path, slug: &str) -> PathBuf {
        paths::resolve(storage_root, slug)
    }

    /// See [`initializer::ensure_initialized`].
    pub fn ensure_initialized(
        &self,
        storage_root: &Path,
        slug: &str,
        actor: Option<&Actor>,
    ) -> Result<Initialization> {
        let repository = paths::resolve(storage_root, slug);
        initializer::ensure_initialized(self.store.as_ref(), &repository, self.actor(actor))
    }

    /// See [`exporter::export_starter_files`].
    pub fn export_starter_files(
        &self,
        storage_root: &Path,
        slug: &str,
        destination: &Path,
    ) -> Result<ExportOutcome> {
        exporter::export_starter_files(&paths::resolve(storage_root, slug), destination)
    }

    /// See [`updater::commit_changes`].
    pub fn commit_changes<F>(
        &self,
        storage_root: &Path,
        slug: &str,
        actor: Option<&Actor>,
        message: &str,
        edit: F,
    ) -> Result<String>
    where
        F: FnOnce(&Path) -> Result<()>,
    {
        let repository = paths::resolve(storage_root, slug);
        updater::commit_changes(
            self.store.as_ref(),
            &repository,
            self.actor(actor),
            message,
            edit,
        )
    }

    /// See [`inspect::history`].
    pub fn history(&self, storage_root: &Path, slug: &str) -> Result<Vec<CommitInfo>> {
        inspect::history(self.store.as_ref(), &paths::resolve(storage_root, slug))
    }

    fn actor<'a>(&'a self, actor: Option<&'a Actor>) -> &'a Actor {
        actor.unwrap_or(&self.config.author)
    }
}

impl Default for ReferenceRepositories {
    fn default() -> Self {
        Self::new(PlatformConfig::default())
    }
}
