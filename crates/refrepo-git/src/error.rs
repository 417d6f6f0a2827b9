//! Error types for refrepo-git

use std::path::PathBuf;

/// Result type for refrepo-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in refrepo-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Filesystem error: {0}")]
    Fs(#[from] refrepo_fs::Error),

    #[error("Not a version-controlled repository: {path}")]
    NotARepository { path: PathBuf },
}
