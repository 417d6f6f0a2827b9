//! Layout inspection for existing repositories

use std::path::Path;

use crate::LayoutDir;

/// Layout directories that are absent (or not directories) under `root`.
///
/// Returned in seeding order. An empty result means the layout is complete.
pub fn missing_layout_dirs(root: &Path) -> Vec<LayoutDir> {
    LayoutDir::ALL
        .into_iter()
        .filter(|dir| !root.join(dir).is_dir())
        .collect()
}
