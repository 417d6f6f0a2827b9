//! Per-repository advisory locks
//!
//! Every reference repository has one lock file, kept next to the repository
//! directory rather than inside it so it never shows up in the working tree:
//!
//! ```text
//! <storage-root>/assignments/.<slug>.lock
//! <storage-root>/assignments/<slug>/
//! ```
//!
//! Writers take the lock exclusively, readers take it shared. Acquisition
//! blocks until the lock is available. The lock is OS-level (`fs2`), so it
//! serializes separate processes as well as threads holding separate guards.
//! Dropping the guard releases the lock on every exit path.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, Result, io};

/// How a [`RepoLock`] is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// Many readers at once, no writers.
    Shared,
    /// One writer, no readers.
    Exclusive,
}

/// A held lock on one repository. Released on drop.
#[derive(Debug)]
pub struct RepoLock {
    path: PathBuf,
    mode: LockMode,
    file: File,
}

impl RepoLock {
    /// Block until a shared lock on `repo` is held.
    pub fn shared(repo: &Path) -> Result<Self> {
        Self::acquire(repo, LockMode::Shared)
    }

    /// Block until an exclusive lock on `repo` is held.
    pub fn exclusive(repo: &Path) -> Result<Self> {
        Self::acquire(repo, LockMode::Exclusive)
    }

    /// Block until a lock of the given mode on `repo` is held.
    ///
    /// Creates the repository's parent directory if needed, since that is
    /// where the lock file lives. The repository directory itself is not
    /// touched.
    pub fn acquire(repo: &Path, mode: LockMode) -> Result<Self> {
        let path = Self::lock_path(repo)?;
        if let Some(parent) = path.parent() {
            io::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| Error::io(&path, e))?;

        let locked = match mode {
            LockMode::Shared => file.lock_shared(),
            LockMode::Exclusive => file.lock_exclusive(),
        };
        locked.map_err(|source| Error::Lock {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(lock = %path.display(), ?mode, "Acquired repository lock");
        Ok(Self { path, mode, file })
    }

    /// Location of the lock file guarding `repo`.
    ///
    /// Fails for paths without a final component (e.g. `/` or `..`).
    pub fn lock_path(repo: &Path) -> Result<PathBuf> {
        let name = repo
            .file_name()
            .ok_or_else(|| Error::InvalidRepositoryPath {
                path: repo.to_path_buf(),
            })?;

        let mut lock_name = std::ffi::OsString::from(".");
        lock_name.push(name);
        lock_name.push(".lock");

        Ok(repo.with_file_name(lock_name))
    }

    /// Path of the lock file held by this guard.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mode this guard was acquired with.
    pub fn mode(&self) -> LockMode {
        self.mode
    }
}

impl Drop for RepoLock {
    fn drop(&mut self) {
        // Closing the handle releases the lock anyway
        if let Err(e) = self.file.unlock() {
            tracing::warn!(lock = %self.path.display(), error = %e, "Failed to release repository lock");
        }
    }
}
