//! Concurrent callers acting on the same repository

use refrepo_core::{
    Actor, ExportOutcome, GitStore, Initialization, commit_changes, ensure_initialized,
    export_starter_files,
};
use refrepo_test_utils::git;
use refrepo_test_utils::storage::TestStorage;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const FILE_LEN: usize = 64 * 1024;

#[test]
fn test_concurrent_initialization_creates_one_genesis_commit() {
    let storage = TestStorage::new();
    let repo = Arc::new(storage.repository_path("hw1"));

    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let repo = Arc::clone(&repo);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ensure_initialized(&GitStore::new(), &repo, &Actor::system())
            })
        })
        .collect();

    let outcomes: Vec<Initialization> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread should not panic").expect("No caller should fault"))
        .collect();

    let created = outcomes.iter().filter(|o| o.was_created()).count();
    assert_eq!(created, 1);
    assert_eq!(git::commit_count(&repo), 1);
}

#[test]
fn test_export_never_observes_partial_update() {
    let storage = TestStorage::new();
    let repo = storage.repository_path("hw1");
    ensure_initialized(&GitStore::new(), &repo, &Actor::system()).unwrap();

    let writer = {
        let repo = repo.clone();
        thread::spawn(move || {
            for round in 0..8u8 {
                let byte = b'a' + round;
                commit_changes(
                    &GitStore::new(),
                    &repo,
                    &Actor::system(),
                    &format!("Update round {round}"),
                    |root| {
                        let path = root.join("starter/data.txt");
                        let body = vec![byte; FILE_LEN];
                        // Two separate writes leave a visibly truncated file in between
                        fs::write(&path, &body[..FILE_LEN / 2])
                            .map_err(|e| refrepo_fs::Error::io(&path, e))?;
                        thread::sleep(Duration::from_millis(3));
                        fs::write(&path, &body).map_err(|e| refrepo_fs::Error::io(&path, e))?;
                        Ok(())
                    },
                )
                .unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|n| {
            let repo = repo.clone();
            let dest = storage.scratch_dir(&format!("student-{n}"));
            thread::spawn(move || {
                for _ in 0..20 {
                    let outcome = export_starter_files(&repo, &dest).unwrap();
                    assert!(matches!(outcome, ExportOutcome::Copied { .. }));

                    if let Ok(copied) = fs::read(dest.join("data.txt")) {
                        assert_eq!(copied.len(), FILE_LEN, "export saw a truncated file");
                        assert!(copied.iter().all(|b| *b == copied[0]), "export mixed versions");
                    }
                }
            })
        })
        .collect();

    writer.join().expect("writer should not panic");
    for reader in readers {
        reader.join().expect("reader should not panic");
    }
    assert_eq!(git::commit_count(&repo), 9);
}

#[test]
fn test_different_repositories_initialize_in_parallel() {
    let storage = TestStorage::new();
    let slugs = ["hw1", "hw2", "hw3", "hw4"];
    let barrier = Arc::new(Barrier::new(slugs.len()));

    let handles: Vec<_> = slugs
        .iter()
        .map(|slug| {
            let repo = storage.repository_path(slug);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ensure_initialized(&GitStore::new(), &repo, &Actor::system()).map(|_| repo)
            })
        })
        .collect();

    for handle in handles {
        let repo = handle.join().unwrap().unwrap();
        assert_eq!(git::commit_count(&repo), 1);
    }
}
