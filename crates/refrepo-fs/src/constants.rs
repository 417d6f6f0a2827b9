//! Fixed names used inside and around a reference repository.

use std::path::Path;

/// Directory under a course storage root that holds every assignment repository.
pub const ASSIGNMENTS_DIR: &str = "assignments";

/// Placeholder file that keeps otherwise-empty layout directories tracked.
pub const MARKER_FILE: &str = ".keep";

/// Version-control metadata directory inside a repository.
pub const GIT_DIR: &str = ".git";

/// Top-level directories every reference repository is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutDir {
    /// Reference solution
    Solution,
    /// Auxiliary library modules
    Lib,
    /// Reference tests
    Test,
    /// Distributable assets
    Assets,
    /// Documentation
    Doc,
    /// Files copied into each student's workspace
    Starter,
}

impl LayoutDir {
    /// Every layout directory, in seeding order.
    pub const ALL: [LayoutDir; 6] = [
        Self::Solution,
        Self::Lib,
        Self::Test,
        Self::Assets,
        Self::Doc,
        Self::Starter,
    ];

    /// Directory name relative to the repository root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solution => "solution",
            Self::Lib => "lib",
            Self::Test => "test",
            Self::Assets => "assets",
            Self::Doc => "doc",
            Self::Starter => "starter",
        }
    }

    /// Human-readable description of what the directory holds.
    pub fn purpose(&self) -> &'static str {
        match self {
            Self::Solution => "reference solution",
            Self::Lib => "auxiliary library modules",
            Self::Test => "reference tests",
            Self::Assets => "distributable assets",
            Self::Doc => "documentation",
            Self::Starter => "starter files for student workspaces",
        }
    }
}

impl AsRef<Path> for LayoutDir {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl std::fmt::Display for LayoutDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
