//! Repository path resolution

use std::path::{Path, PathBuf};

use refrepo_fs::ASSIGNMENTS_DIR;

/// Path of the reference repository for `assignment_slug` under a course's
/// storage root: `<storage_root>/assignments/<assignment_slug>`.
///
/// Purely mechanical: no normalization, validation or I/O. The slug must
/// already be filesystem-safe.
pub fn resolve(storage_root: &Path, assignment_slug: &str) -> PathBuf {
    storage_root.join(ASSIGNMENTS_DIR).join(assignment_slug)
}
