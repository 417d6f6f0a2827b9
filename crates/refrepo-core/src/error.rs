//! Error types for refrepo-core

use std::path::PathBuf;

/// Result type for refrepo-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Faults surfaced by repository lifecycle operations.
///
/// Nothing here is retried or repaired locally; callers decide how to report
/// a fault and whether to try again.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem-level failure (permissions, disk full, path too long,
    /// unwritable destination, lock file problems)
    #[error("Storage fault: {0}")]
    Storage(#[from] refrepo_fs::Error),

    /// Failure from the version-control store (init, stage, commit, history)
    #[error("Version control fault: {0}")]
    VersionControl(refrepo_git::Error),

    /// The repository directory exists but its version-control metadata or
    /// genesis commit is missing
    #[error("Repository at {path} is partially initialized: {reason}")]
    PartialInitialization { path: PathBuf, reason: String },

    /// No repository directory exists where one was required
    #[error("No reference repository at {path}")]
    NotInitialized { path: PathBuf },
}

impl From<refrepo_git::Error> for Error {
    fn from(err: refrepo_git::Error) -> Self {
        match err {
            refrepo_git::Error::Fs(fs) => Self::Storage(fs),
            other => Self::VersionControl(other),
        }
    }
}

impl Error {
    pub fn is_storage_fault(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_version_control_fault(&self) -> bool {
        matches!(self, Self::VersionControl(_))
    }

    pub fn is_partial_initialization(&self) -> bool {
        matches!(self, Self::PartialInitialization { .. })
    }
}
