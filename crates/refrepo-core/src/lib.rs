//! Lifecycle management for assignment reference repositories
//!
//! Every assignment owns one version-controlled reference repository holding
//! its solution, library modules, tests, assets, documentation and the
//! starter files handed to students. This crate implements:
//!
//! - **Path resolution**: storage root + assignment slug to repository path
//! - **Layout seeding**: the fixed top-level directories with marker files
//! - **Initialization**: exactly-once creation with a single genesis commit
//! - **Starter export**: copying `starter/` into a student's workspace
//! - **Updates and history**: later commits and read-only history access
//!
//! # Architecture
//!
//! ```text
//!              ReferenceRepositories
//!                        |
//!     paths  seeder  initializer  exporter  updater
//!                        |
//!             +----------+----------+
//!             |                     |
//!        refrepo-fs            refrepo-git
//! ```
//!
//! # Concurrency
//!
//! Writers (initialization, updates) hold the repository's exclusive lock,
//! readers (export, history) hold it shared. Locks are per repository, so
//! different assignments never contend.
//!
//! # Example
//!
//! ```no_run
//! use refrepo_core::{PlatformConfig, ReferenceRepositories, Result};
//! use std::path::Path;
//!
//! fn start_attempt(course_root: &Path, workspace: &Path) -> Result<()> {
//!     let repos = ReferenceRepositories::new(PlatformConfig::default());
//!     repos.ensure_initialized(course_root, "hw1-linked-lists", None)?;
//!     repos.export_starter_files(course_root, "hw1-linked-lists", workspace)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod exporter;
pub mod initializer;
pub mod inspect;
pub mod paths;
pub mod repositories;
pub mod seeder;
pub mod updater;

pub use config::PlatformConfig;
pub use error::{Error, Result};
pub use exporter::{ExportOutcome, export_starter_files};
pub use initializer::{GENESIS_MESSAGE, Initialization, ensure_initialized};
pub use inspect::{check_complete, history};
pub use paths::resolve;
pub use repositories::ReferenceRepositories;
pub use seeder::seed;
pub use updater::commit_changes;

pub use refrepo_git::{Actor, CommitInfo, GitStore, VersionStore};
