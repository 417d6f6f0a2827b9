//! Shared test utilities for the reference-repository workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git fixtures and read-only inspection helpers
//! - [`storage`] — [`TestStorage`](storage::TestStorage), a temporary course storage root

pub mod git;
pub mod storage;
