//! Platform-level configuration

use std::path::Path;

use refrepo_fs::ConfigStore;
use refrepo_git::Actor;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Settings shared by every repository operation.
///
/// ```toml
/// [author]
/// name = "Course Platform"
/// email = "noreply@course-platform.local"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Identity used for commits when no user is in context
    pub author: Actor,
}

impl PlatformConfig {
    /// Load from a TOML, JSON or YAML file (chosen by extension).
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(?path, "No platform config found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save atomically in the format implied by the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }
}
