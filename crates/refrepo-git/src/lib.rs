//! Version-control layer for assignment reference repositories
//!
//! Exposes the narrow capability the lifecycle manager drives (create an
//! empty store, stage everything, record a commit, read history) behind the
//! [`VersionStore`] trait, with [`GitStore`] as the `git2` implementation.

pub mod actor;
pub mod commits;
pub mod error;
pub mod git_store;
pub mod store;

pub use actor::Actor;
pub use commits::CommitInfo;
pub use error::{Error, Result};
pub use git_store::GitStore;
pub use store::VersionStore;
