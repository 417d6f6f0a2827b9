//! Git fixtures and inspection helpers.
//!
//! Inspection goes straight through `git2` so assertions do not depend on the
//! code under test.

use std::fs;
use std::path::Path;

/// Creates a `.git` directory that is **not** a valid repository.
///
/// Use for: simulating a repository whose initialization was interrupted
/// after the directory was created.
///
/// # Panics
/// Panics if the filesystem operations fail.
pub fn fake_git_dir(path: &Path) {
    fs::create_dir_all(path.join(".git"))
        .unwrap_or_else(|e| panic!("fake_git_dir: failed to create .git: {e}"));
}

/// Initialises a real git repository using `git2` (no commits).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Full messages of every commit reachable from HEAD, newest first.
///
/// Returns an empty list for a repository without commits.
///
/// # Panics
/// Panics if `path` is not a git repository.
pub fn commit_messages(path: &Path) -> Vec<String> {
    let repo = git2::Repository::open(path)
        .unwrap_or_else(|e| panic!("commit_messages: cannot open {}: {e}", path.display()));
    if repo.is_empty().unwrap() {
        return Vec::new();
    }

    let mut walk = repo.revwalk().unwrap();
    walk.push_head().unwrap();
    walk.map(|oid| {
        let commit = repo.find_commit(oid.unwrap()).unwrap();
        commit.message().unwrap_or("").to_string()
    })
    .collect()
}

/// Number of commits reachable from HEAD.
pub fn commit_count(path: &Path) -> usize {
    commit_messages(path).len()
}

/// Paths (relative, `/`-separated) of every file in HEAD's tree, sorted.
///
/// # Panics
/// Panics if the repository has no HEAD commit.
pub fn tracked_files(path: &Path) -> Vec<String> {
    let repo = git2::Repository::open(path)
        .unwrap_or_else(|e| panic!("tracked_files: cannot open {}: {e}", path.display()));
    let tree = repo.head().unwrap().peel_to_tree().unwrap();

    let mut files = Vec::new();
    tree.walk(git2::TreeWalkMode::PreOrder, |dir, entry| {
        if entry.kind() == Some(git2::ObjectType::Blob) {
            files.push(format!("{dir}{}", entry.name().unwrap_or("")));
        }
        git2::TreeWalkResult::Ok
    })
    .unwrap();
    files.sort();
    files
}

/// Author of the HEAD commit as `(name, email)`.
pub fn head_author(path: &Path) -> (String, String) {
    let repo = git2::Repository::open(path).unwrap();
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    let author = commit.author();
    (
        author.name().unwrap_or("").to_string(),
        author.email().unwrap_or("").to_string(),
    )
}
