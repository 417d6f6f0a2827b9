//! `git2`-backed version store

use std::path::Path;

use git2::build::CheckoutBuilder;
use git2::{Commit, ErrorCode, IndexAddOption, Repository};

use crate::{Actor, CommitInfo, Error, Result, VersionStore, commits};

/// [`VersionStore`] backed by a local git repository via libgit2.
///
/// The repository's working tree is the reference repository directory and
/// its metadata lives in `.git` inside it.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitStore;

impl GitStore {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, path: &Path) -> Result<Repository> {
        Repository::open(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => Error::NotARepository {
                path: path.to_path_buf(),
            },
            _ => Error::Git(e),
        })
    }
}

impl VersionStore for GitStore {
    fn init(&self, path: &Path) -> Result<()> {
        Repository::init(path)?;
        tracing::debug!(path = %path.display(), "Initialized git repository");
        Ok(())
    }

    fn is_initialized(&self, path: &Path) -> bool {
        path.join(refrepo_fs::GIT_DIR).is_dir() && Repository::open(path).is_ok()
    }

    fn has_commits(&self, path: &Path) -> Result<bool> {
        Ok(!self.open(path)?.is_empty()?)
    }

    fn stage_all(&self, path: &Path) -> Result<()> {
        let repo = self.open(path)?;
        let mut index = repo.index()?;

        // add_all picks up new and modified files, update_all drops deleted ones
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"], None)?;
        index.write()?;

        Ok(())
    }

    fn restore_head(&self, path: &Path) -> Result<()> {
        let repo = self.open(path)?;
        let tree = repo.head()?.peel_to_tree()?;

        // Unstage first so files added since head count as untracked
        let mut index = repo.index()?;
        index.read_tree(&tree)?;
        index.write()?;

        let mut checkout = CheckoutBuilder::new();
        checkout.force().remove_untracked(true);
        repo.checkout_head(Some(&mut checkout))?;

        tracing::debug!(path = %path.display(), "Restored working tree to head");
        Ok(())
    }

    fn commit(&self, path: &Path, author: &Actor, message: &str) -> Result<String> {
        let repo = self.open(path)?;
        let signature = author.signature()?;

        let tree_id = repo.index()?.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent = match repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => None,
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&Commit<'_>> = parent.iter().collect();

        let oid = repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        tracing::debug!(path = %path.display(), commit = %oid, %author, "Recorded commit");
        Ok(oid.to_string())
    }

    fn history(&self, path: &Path) -> Result<Vec<CommitInfo>> {
        let repo = self.open(path)?;
        commits::list_commits(&repo)
    }
}
