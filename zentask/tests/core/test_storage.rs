//! File-backed store tests

use std::sync::Arc;

use uuid::Uuid;
use zentask::models::{TaskPatch, TaskPriority, TaskStatus};
use zentask::storage::{JsonFileStore, KeyValueStore};
use zentask::store::TaskStore;

use super::common::sample_draft;

#[test]
fn test_set_get_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());

    assert!(store.get("tasks_u1").unwrap().is_none());
    store.set("tasks_u1", "[{\"a\":1}]").unwrap();
    assert_eq!(store.get("tasks_u1").unwrap().as_deref(), Some("[{\"a\":1}]"));

    store.remove("tasks_u1").unwrap();
    assert!(store.get("tasks_u1").unwrap().is_none());
}

#[test]
fn test_remove_of_absent_key_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.remove("never_written").unwrap();
}

#[test]
fn test_keys_are_sanitized_into_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.set("odd/key name", "v").unwrap();
    assert_eq!(store.get("odd/key name").unwrap().as_deref(), Some("v"));

    // No file escaped the root
    for entry in std::fs::read_dir(dir.path()).unwrap() {
        let entry = entry.unwrap();
        assert!(entry.file_type().unwrap().is_file());
    }
}

#[test]
fn test_overwrite_replaces_the_value() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
}

#[test]
fn test_task_collection_survives_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(JsonFileStore::new(dir.path()));
    let user_id = Uuid::new_v4();

    let mut store = TaskStore::load(storage.clone(), user_id);
    let a = store.create(sample_draft("a", TaskPriority::High, TaskStatus::Todo));
    store.create(sample_draft("b", TaskPriority::Low, TaskStatus::InProgress));
    store.update(a.id, TaskPatch::status(TaskStatus::Done));

    let reloaded = TaskStore::load(storage, user_id);
    assert_eq!(reloaded.tasks(), store.tasks());

    // A different user sees nothing
    let other = TaskStore::load(Arc::new(JsonFileStore::new(dir.path())), Uuid::new_v4());
    assert!(other.is_empty());
}
