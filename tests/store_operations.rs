//! Submission store integration tests
//!
//! Exercises the full load-mutate-rewrite cycle against a real backing file.

use std::sync::Arc;

use submitdb::store::{parse_index, StoreError, Submission, SubmissionStore};
use tempfile::TempDir;

fn submission(name: &str, email: &str) -> Submission {
    Submission::new(name, email, "1", name.to_lowercase(), "00:01")
}

fn store_in(dir: &TempDir) -> SubmissionStore {
    SubmissionStore::new(dir.path().join("db.json"))
}

#[tokio::test]
async fn append_then_get_returns_record_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let record = submission("Alice", "alice@x.com");
    let appended = store.append(record.clone()).await.unwrap();
    assert_eq!(appended, record);

    let count = store.count().await.unwrap();
    let fetched = store.get_at(count as i64 - 1).await.unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn replace_changes_only_its_index() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(submission("Alice", "alice@x.com")).await.unwrap();
    store.append(submission("Bob", "bob@x.com")).await.unwrap();
    store.append(submission("Carol", "carol@x.com")).await.unwrap();

    let replacement = submission("Bobby", "bobby@x.com");
    let returned = store.replace_at(1, replacement.clone()).await.unwrap();
    assert_eq!(returned, replacement);

    assert_eq!(store.get_at(0).await.unwrap().name, "Alice");
    assert_eq!(store.get_at(1).await.unwrap(), replacement);
    assert_eq!(store.get_at(2).await.unwrap().name, "Carol");
    assert_eq!(store.count().await.unwrap(), 3);
}

#[tokio::test]
async fn delete_shifts_later_records_one_position_earlier() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    for name in ["Alice", "Bob", "Carol", "Dave"] {
        store
            .append(submission(name, &format!("{}@x.com", name.to_lowercase())))
            .await
            .unwrap();
    }

    let removed = store.delete_at(1).await.unwrap();
    assert_eq!(removed.name, "Bob");

    assert_eq!(store.count().await.unwrap(), 3);
    assert_eq!(store.get_at(0).await.unwrap().name, "Alice");
    assert_eq!(store.get_at(1).await.unwrap().name, "Carol");
    assert_eq!(store.get_at(2).await.unwrap().name, "Dave");
}

#[tokio::test]
async fn filter_empty_query_returns_everything_in_order() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    for name in ["Alice", "Bob", "Carol"] {
        store
            .append(submission(name, &format!("{}@x.com", name.to_lowercase())))
            .await
            .unwrap();
    }

    let all = store.filter("").await.unwrap();
    let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob", "Carol"]);
}

#[tokio::test]
async fn filter_is_case_insensitive_and_order_preserving() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(submission("Alice", "alice@corp.com")).await.unwrap();
    store.append(submission("Bob", "bob@home.net")).await.unwrap();
    store.append(submission("Malice", "m@corp.com")).await.unwrap();

    let hits = store.filter("ALICE").await.unwrap();
    let names: Vec<_> = hits.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Malice"]);

    let corp = store.filter("corp.com").await.unwrap();
    assert_eq!(corp.len(), 2);

    let none = store.filter("no-such-text").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn load_reflects_exactly_the_last_mutation() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(submission("Alice", "alice@x.com")).await.unwrap();
    store.append(submission("Bob", "bob@x.com")).await.unwrap();
    store.delete_at(0).await.unwrap();

    let loaded = store.load().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Bob");
}

#[tokio::test]
async fn count_and_load_are_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(submission("Alice", "alice@x.com")).await.unwrap();

    let first = store.load().await.unwrap();
    for _ in 0..5 {
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.load().await.unwrap(), first);
    }
}

#[tokio::test]
async fn out_of_range_indices_are_not_found() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    // Empty collection, no backing file yet
    assert!(matches!(
        store.get_at(0).await.unwrap_err(),
        StoreError::NotFound
    ));

    store.append(submission("Alice", "alice@x.com")).await.unwrap();

    assert!(matches!(
        store.get_at(-1).await.unwrap_err(),
        StoreError::NotFound
    ));
    assert!(matches!(
        store.get_at(1).await.unwrap_err(),
        StoreError::NotFound
    ));
    assert!(matches!(
        store.replace_at(1, submission("X", "x@x.com")).await.unwrap_err(),
        StoreError::NotFound
    ));
    assert!(matches!(
        store.delete_at(1).await.unwrap_err(),
        StoreError::NotFound
    ));
}

#[test]
fn textual_index_must_be_an_integer() {
    assert!(matches!(
        parse_index(Some("abc")).unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
    assert!(matches!(
        parse_index(None).unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
    assert_eq!(parse_index(Some("-1")).unwrap(), -1);
}

#[tokio::test]
async fn lifecycle_from_no_backing_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let record = Submission::new("A", "a@x.com", "1", "a", "00:01");
    store.append(record.clone()).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);

    let removed = store.delete_at(0).await.unwrap();
    assert_eq!(removed, record);
    assert_eq!(store.count().await.unwrap(), 0);

    assert!(matches!(
        store.get_at(0).await.unwrap_err(),
        StoreError::NotFound
    ));
}

#[tokio::test]
async fn invalid_record_is_rejected_before_any_write() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(submission("Alice", "alice@x.com")).await.unwrap();
    let before = std::fs::read(store.path()).unwrap();

    let mut invalid = submission("Bob", "bob@x.com");
    invalid.email.clear();

    assert!(matches!(
        store.append(invalid.clone()).await.unwrap_err(),
        StoreError::InvalidArgument(_)
    ));
    assert!(matches!(
        store.replace_at(0, invalid).await.unwrap_err(),
        StoreError::InvalidArgument(_)
    ));

    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[tokio::test]
async fn failed_delete_leaves_file_unchanged() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.append(submission("Alice", "alice@x.com")).await.unwrap();
    let before = std::fs::read(store.path()).unwrap();

    assert!(store.delete_at(5).await.is_err());
    assert_eq!(std::fs::read(store.path()).unwrap(), before);
}

#[tokio::test]
async fn corrupt_backing_file_is_surfaced_not_clobbered() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.json");
    std::fs::write(&path, "][ definitely not json").unwrap();

    let store = SubmissionStore::new(&path);
    assert!(matches!(
        store.count().await.unwrap_err(),
        StoreError::Corrupt(_)
    ));
    assert!(matches!(
        store.append(submission("A", "a@x.com")).await.unwrap_err(),
        StoreError::Corrupt(_)
    ));

    // The unparsable file is left for the operator, not overwritten
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "][ definitely not json"
    );
}

#[tokio::test]
async fn concurrent_appends_lose_no_writes() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir));

    let mut tasks = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            store
                .append(submission(&format!("User{}", i), &format!("u{}@x.com", i)))
                .await
                .unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.count().await.unwrap(), 16);
}

#[tokio::test]
async fn concurrent_mixed_mutations_stay_consistent() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_in(&dir));

    for i in 0..8 {
        store
            .append(submission(&format!("Seed{}", i), &format!("s{}@x.com", i)))
            .await
            .unwrap();
    }

    // Four deletes of index 0 racing four appends: net count is unchanged
    // and the collection stays parsable throughout.
    let mut tasks = Vec::new();
    for i in 0..4 {
        let appender = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            appender
                .append(submission(&format!("New{}", i), &format!("n{}@x.com", i)))
                .await
                .unwrap();
        }));
        let deleter = Arc::clone(&store);
        tasks.push(tokio::spawn(async move {
            deleter.delete_at(0).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(store.count().await.unwrap(), 8);
    store.load().await.unwrap();
}
