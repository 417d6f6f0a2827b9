//! Commit author identity

use git2::Signature;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Identity recorded as author and committer of a commit.
///
/// Usually the platform's service identity rather than a human user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    pub name: String,
    pub email: String,
}

impl Actor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The built-in service identity used when nobody else is in context.
    pub fn system() -> Self {
        Self::new("Course Platform", "noreply@course-platform.local")
    }

    /// A signature for this actor stamped with the current time.
    pub fn signature(&self) -> Result<Signature<'static>> {
        Ok(Signature::now(&self.name, &self.email)?)
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
