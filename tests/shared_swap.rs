mod common;

use std::sync::Arc;
use std::thread;

use common::{fixture, now, post, write};
use postindex::{BuildError, Repository, RepositoryBuilder, SharedRepository};
use tempfile::tempdir;

#[test]
fn concurrent_readers_share_one_repository() {
    let shared = Arc::new(SharedRepository::new(
        Repository::load(fixture("repo")).unwrap(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let repo = shared.current();
                for _ in 0..50 {
                    assert_eq!(repo.search("post", now()).unwrap().len(), 3);
                    assert_eq!(repo.find_by_tag("meta", now()).unwrap().len(), 2);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn reload_swaps_in_the_new_build() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.md", &post("A", "2012-01-01", "slugs: [a]\n"));

    let builder = RepositoryBuilder::default();
    let shared = SharedRepository::new(builder.load(dir.path()).unwrap());
    let snapshot = shared.current();

    write(dir.path(), "b.md", &post("B", "2012-02-01", "slugs: [b]\n"));
    let old = shared.reload(&builder, dir.path()).unwrap();

    assert_eq!(old.len(), 1);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(shared.current().len(), 2);
    assert_eq!(shared.current().find_latest(1, now()).titles(), vec!["B"]);
}

#[test]
fn failed_reload_keeps_the_current_repository() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.md", &post("A", "2012-01-01", "slugs: [a]\n"));

    let builder = RepositoryBuilder::default();
    let shared = SharedRepository::new(builder.load(dir.path()).unwrap());
    let before = shared.current().fingerprint().to_string();

    write(dir.path(), "b.md", &post("B", "2012-02-01", "slugs: [a]\n"));
    let result = shared.reload(&builder, dir.path());

    assert!(matches!(result, Err(BuildError::Conflict { .. })));
    assert_eq!(shared.current().fingerprint(), before);
    assert_eq!(shared.current().len(), 1);
}

#[test]
fn replace_returns_the_previous_repository() {
    let shared = SharedRepository::new(Repository::load(fixture("repo")).unwrap());
    let old = shared.replace(Repository::load(fixture("sort")).unwrap());

    assert_eq!(old.find_latest(1, now()).titles(), vec!["My Second Post"]);
    assert_eq!(shared.current().find_latest(1, now()).titles(), vec!["C"]);
}
