//! End-to-end tests for the reference repository lifecycle
//!
//! Exercises the complete flow an assignment goes through: platform config
//! loading -> repository creation -> staff uploads starter code -> students
//! start their attempts.

use pretty_assertions::assert_eq;
use refrepo_core::{
    ExportOutcome, GENESIS_MESSAGE, Initialization, PlatformConfig, ReferenceRepositories,
};
use refrepo_fs::copy_dir_contents;
use refrepo_test_utils::git;
use refrepo_test_utils::storage::TestStorage;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Barrier};
use std::thread;

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    // tests/integration -> ../../test-fixtures
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn staff_repositories() -> ReferenceRepositories {
    let config = PlatformConfig::load(&fixtures_dir().join("platform.toml")).unwrap();
    ReferenceRepositories::new(config)
}

/// Create `slug` and commit the starter-kit fixture into its `starter/`.
fn publish_starter_kit(repos: &ReferenceRepositories, root: &Path, slug: &str) {
    repos.ensure_initialized(root, slug, None).unwrap();
    repos
        .commit_changes(root, slug, None, "Publish starter kit", |repo| {
            copy_dir_contents(&fixtures_dir().join("starter-kit"), &repo.join("starter"))?;
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_new_assignment_has_layout_and_single_genesis_commit() {
    let storage = TestStorage::new();
    let repos = staff_repositories();

    let outcome = repos
        .ensure_initialized(storage.root(), "hw1-linked-lists", None)
        .unwrap();

    let repo = storage.repository_path("hw1-linked-lists");
    assert!(outcome.was_created());
    assert_eq!(
        storage.list_files(&repo)
            .into_iter()
            .filter(|f| !f.starts_with(".git/"))
            .collect::<Vec<_>>(),
        vec![
            "assets/.keep",
            "doc/.keep",
            "lib/.keep",
            "solution/.keep",
            "starter/.keep",
            "test/.keep",
        ]
    );
    assert_eq!(git::commit_messages(&repo), vec![GENESIS_MESSAGE.to_string()]);
    assert_eq!(git::head_author(&repo).1, "staff@cs101.example.edu");
}

#[test]
fn test_repeated_initialization_changes_nothing() {
    let storage = TestStorage::new();
    let repos = staff_repositories();

    repos.ensure_initialized(storage.root(), "hw1", None).unwrap();
    let commits_before = repos.history(storage.root(), "hw1").unwrap();
    for _ in 0..3 {
        let outcome = repos.ensure_initialized(storage.root(), "hw1", None).unwrap();
        assert_eq!(outcome, Initialization::AlreadyPresent);
    }

    assert_eq!(repos.history(storage.root(), "hw1").unwrap(), commits_before);
}

#[test]
fn test_students_receive_identical_starter_files() {
    let storage = TestStorage::new();
    let repos = staff_repositories();
    publish_starter_kit(&repos, storage.root(), "hw1");

    for student in ["alice", "bob"] {
        let workspace = storage.scratch_dir(student);
        let outcome = repos
            .export_starter_files(storage.root(), "hw1", &workspace)
            .unwrap();

        assert_eq!(outcome, ExportOutcome::Copied { files: 4 });
        assert_eq!(
            storage.list_files(&workspace),
            vec![".keep", "README.md", "main.py", "tests/test_main.py"]
        );
        for file in ["README.md", "main.py", "tests/test_main.py"] {
            assert_eq!(
                std::fs::read(workspace.join(file)).unwrap(),
                std::fs::read(fixtures_dir().join("starter-kit").join(file)).unwrap(),
                "{file} differs for {student}"
            );
        }
    }
}

#[test]
fn test_assignment_without_starter_directory_exports_nothing() {
    let storage = TestStorage::new();
    let repos = staff_repositories();
    repos.ensure_initialized(storage.root(), "hw1", None).unwrap();
    repos
        .commit_changes(storage.root(), "hw1", None, "No starter for this one", |repo| {
            let starter = repo.join("starter");
            std::fs::remove_dir_all(&starter)
                .map_err(|e| refrepo_fs::Error::io(&starter, e))?;
            Ok(())
        })
        .unwrap();
    let workspace = storage.scratch_dir("carol");

    let outcome = repos
        .export_starter_files(storage.root(), "hw1", &workspace)
        .unwrap();

    assert_eq!(outcome, ExportOutcome::NoStarterFiles);
    assert!(storage.list_files(&workspace).is_empty());
}

#[test]
fn test_many_students_start_while_staff_initializes() {
    let storage = TestStorage::new();
    let repos = Arc::new(staff_repositories());
    let root = storage.root().to_path_buf();
    let barrier = Arc::new(Barrier::new(6));

    let initializers: Vec<_> = (0..3)
        .map(|_| {
            let repos = Arc::clone(&repos);
            let root = root.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                repos.ensure_initialized(&root, "hw2", None)
            })
        })
        .collect();

    let students: Vec<_> = (0..3)
        .map(|n| {
            let repos = Arc::clone(&repos);
            let root = root.clone();
            let workspace = storage.scratch_dir(&format!("student-{n}"));
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                repos.export_starter_files(&root, "hw2", &workspace)
            })
        })
        .collect();

    let created = initializers
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .filter(Initialization::was_created)
        .count();
    for student in students {
        // Either before creation (nothing to copy) or after (marker only)
        match student.join().unwrap().unwrap() {
            ExportOutcome::NoStarterFiles | ExportOutcome::Copied { files: 1 } => {}
            other => panic!("unexpected export outcome: {other:?}"),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(git::commit_count(&storage.repository_path("hw2")), 1);
}

#[test]
fn test_assignments_are_independent() {
    let storage = TestStorage::new();
    let repos = staff_repositories();
    publish_starter_kit(&repos, storage.root(), "hw1");
    repos.ensure_initialized(storage.root(), "hw2", None).unwrap();

    assert_eq!(repos.history(storage.root(), "hw1").unwrap().len(), 2);
    assert_eq!(repos.history(storage.root(), "hw2").unwrap().len(), 1);

    let workspace = storage.scratch_dir("dave");
    let outcome = repos
        .export_starter_files(storage.root(), "hw2", &workspace)
        .unwrap();
    assert_eq!(outcome, ExportOutcome::Copied { files: 1 });
}
