//! Layout seeding

use std::path::Path;

use refrepo_fs::{LayoutDir, MARKER_FILE, io};

use crate::Result;

/// Create every layout directory under `repository` with an empty marker file.
///
/// Directories are processed in [`LayoutDir::ALL`] order. Existing
/// directories are reused and existing markers truncated, so seeding twice
/// is harmless.
pub fn seed(repository: &Path) -> Result<()> {
    for dir in LayoutDir::ALL {
        let dir_path = repository.join(dir);
        io::create_dir_all(&dir_path)?;
        io::write_empty(&dir_path.join(MARKER_FILE))?;
        tracing::debug!(%dir, purpose = dir.purpose(), "Seeded layout directory");
    }
    Ok(())
}
