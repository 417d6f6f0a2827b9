//! Version-store trait

use std::path::Path;

use crate::{Actor, CommitInfo, Result};

/// The version-control capability a reference repository needs.
///
/// Implementations are stateless with respect to any one repository: every
/// call names the working-tree path it acts on. Callers are responsible for
/// holding the repository lock around mutating calls.
pub trait VersionStore: Send + Sync {
    /// Create an empty store with no history at `path`.
    fn init(&self, path: &Path) -> Result<()>;

    /// Whether `path` holds version-control metadata.
    fn is_initialized(&self, path: &Path) -> bool;

    /// Whether at least one commit has been recorded.
    fn has_commits(&self, path: &Path) -> Result<bool>;

    /// Mark every working-tree change (additions, edits, deletions) for the
    /// next commit.
    fn stage_all(&self, path: &Path) -> Result<()>;

    /// Discard every uncommitted change, staged or not, so the working tree
    /// matches head again. Untracked files are removed.
    fn restore_head(&self, path: &Path) -> Result<()>;

    /// Record the staged snapshot on top of the current head.
    ///
    /// Returns the new commit id as a hex string.
    fn commit(&self, path: &Path, author: &Actor, message: &str) -> Result<String>;

    /// Commits reachable from head, newest first. Empty for a fresh store.
    fn history(&self, path: &Path) -> Result<Vec<CommitInfo>>;
}
