//! Commit history extraction from git repositories.

use chrono::{DateTime, TimeZone, Utc};
use git2::Repository;

use crate::Result;

/// Information about a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Full commit hash
    pub id: String,

    /// First line of the commit message
    pub message: String,

    /// Author name
    pub author: String,

    /// Author email
    pub email: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

impl CommitInfo {
    /// Abbreviated hash (7 characters).
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(7)]
    }
}

/// List every commit reachable from HEAD, most recent first.
///
/// A repository without commits yields an empty list.
pub fn list_commits(repo: &Repository) -> Result<Vec<CommitInfo>> {
    if repo.is_empty()? {
        return Ok(Vec::new());
    }

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;
    revwalk.set_sorting(git2::Sort::TIME)?;

    let mut commits = Vec::new();
    for oid_result in revwalk {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        let timestamp = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .unwrap_or_default();

        let message = commit
            .message()
            .unwrap_or("")
            .lines()
            .next()
            .unwrap_or("")
            .to_string();

        let author = commit.author();

        commits.push(CommitInfo {
            id: oid.to_string(),
            message,
            author: author.name().unwrap_or("Unknown").to_string(),
            email: author.email().unwrap_or("").to_string(),
            timestamp,
        });
    }

    Ok(commits)
}
