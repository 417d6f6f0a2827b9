//! Filesystem layer for assignment reference repositories
//!
//! Provides the fixed directory layout, per-repository advisory locks,
//! recursive directory copies and safe I/O primitives used by the
//! higher-level crates.

pub mod config;
pub mod constants;
pub mod copy;
pub mod error;
pub mod io;
pub mod layout;
pub mod lock;

pub use config::ConfigStore;
pub use constants::{ASSIGNMENTS_DIR, GIT_DIR, LayoutDir, MARKER_FILE};
pub use copy::copy_dir_contents;
pub use error::{Error, Result};
pub use layout::missing_layout_dirs;
pub use lock::{LockMode, RepoLock};
