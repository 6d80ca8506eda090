//! Task store tests

use std::sync::Arc;

use uuid::Uuid;
use zentask::models::{
    StatusFilter, SubTask, TaskPatch, TaskPriority, TaskStatus,
};
use zentask::storage::{keys, KeyValueStore, MemoryStore};
use zentask::store::TaskStore;

use super::common::sample_draft;

fn empty_store() -> (Arc<MemoryStore>, TaskStore, Uuid) {
    let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let user_id = Uuid::new_v4();
    let store = TaskStore::load(storage.clone(), user_id);
    (storage, store, user_id)
}

#[test]
fn test_create_sets_ownership_and_defaults() {
    let (_storage, mut store, user_id) = empty_store();
    let task = store.create(sample_draft("Write report", TaskPriority::High, TaskStatus::Todo));

    assert_eq!(task.user_id, user_id);
    assert!(task.sub_tasks.is_empty());
    assert_eq!(task.title, "Write report");
    // created_at is set to a real instant
    assert!(task.created_at.timestamp() > 0);
}

#[test]
fn test_create_prepends_newest_first() {
    let (_storage, mut store, _) = empty_store();
    let first = store.create(sample_draft("first", TaskPriority::Low, TaskStatus::Todo));
    let second = store.create(sample_draft("second", TaskPriority::Low, TaskStatus::Todo));

    let ids: Vec<Uuid> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[test]
fn test_update_then_filter_sees_the_new_status() {
    let (_storage, mut store, _) = empty_store();
    let task = store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    store.create(sample_draft("b", TaskPriority::Low, TaskStatus::Todo));

    let before = store.filter(StatusFilter::All).len();
    let updated = store.update(task.id, TaskPatch::status(TaskStatus::Done)).unwrap();
    assert_eq!(updated.status, TaskStatus::Done);

    let done = store.filter(StatusFilter::Status(TaskStatus::Done));
    assert!(done.iter().any(|t| t.id == task.id));
    // ALL count is invariant under update
    assert_eq!(store.filter(StatusFilter::All).len(), before);
}

#[test]
fn test_update_of_absent_id_is_a_no_op() {
    let (_storage, mut store, _) = empty_store();
    store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    assert!(store
        .update(Uuid::new_v4(), TaskPatch::status(TaskStatus::Done))
        .is_none());
    assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
}

#[test]
fn test_delete_removes_exactly_one_when_confirmed() {
    let (_storage, mut store, _) = empty_store();
    let doomed = store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    store.create(sample_draft("b", TaskPriority::Low, TaskStatus::Todo));

    assert!(store.delete_confirmed(doomed.id, |task| {
        assert_eq!(task.id, doomed.id);
        true
    }));
    assert_eq!(store.len(), 1);
    assert!(store.get(doomed.id).is_none());
}

#[test]
fn test_delete_declined_leaves_state_untouched() {
    let (storage, mut store, user_id) = empty_store();
    let task = store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    let persisted_before = storage.get(&keys::tasks(&user_id)).unwrap();

    assert!(!store.delete_confirmed(task.id, |_| false));
    assert_eq!(store.len(), 1);
    assert_eq!(storage.get(&keys::tasks(&user_id)).unwrap(), persisted_before);
}

#[test]
fn test_delete_of_absent_id_is_a_no_op() {
    let (_storage, mut store, _) = empty_store();
    store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    assert!(!store.delete_confirmed(Uuid::new_v4(), |_| true));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_filter_preserves_collection_order() {
    let (_storage, mut store, _) = empty_store();
    let a = store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    let b = store.create(sample_draft("b", TaskPriority::Low, TaskStatus::Done));
    let c = store.create(sample_draft("c", TaskPriority::Low, TaskStatus::Todo));

    let todos: Vec<Uuid> = store
        .filter(StatusFilter::Status(TaskStatus::Todo))
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(todos, vec![c.id, a.id]);

    let all: Vec<Uuid> = store.filter(StatusFilter::All).iter().map(|t| t.id).collect();
    assert_eq!(all, vec![c.id, b.id, a.id]);
}

#[test]
fn test_stats_counts_per_status() {
    let (_storage, mut store, _) = empty_store();
    store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    store.create(sample_draft("b", TaskPriority::Low, TaskStatus::Todo));
    store.create(sample_draft("c", TaskPriority::Low, TaskStatus::InProgress));
    store.create(sample_draft("d", TaskPriority::Low, TaskStatus::Done));

    let counts = store.stats();
    assert_eq!(counts.todo, 2);
    assert_eq!(counts.in_progress, 1);
    assert_eq!(counts.done, 1);
    assert_eq!(counts.total(), 4);
}

#[test]
fn test_toggle_sub_task_flips_completion() {
    let (_storage, mut store, _) = empty_store();
    let task = store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    let subs = vec![
        SubTask { id: Uuid::new_v4(), title: "one".to_string(), is_done: false },
        SubTask { id: Uuid::new_v4(), title: "two".to_string(), is_done: false },
    ];
    let sub_id = subs[0].id;
    store.set_sub_tasks(task.id, subs).unwrap();

    let updated = store.toggle_sub_task(task.id, sub_id).unwrap();
    assert!(updated.sub_tasks[0].is_done);
    assert_eq!(updated.progress(), 50);

    let updated = store.toggle_sub_task(task.id, sub_id).unwrap();
    assert!(!updated.sub_tasks[0].is_done);
    assert_eq!(updated.progress(), 0);
}

#[test]
fn test_set_sub_tasks_replaces_wholesale() {
    let (_storage, mut store, _) = empty_store();
    let task = store.create(sample_draft("a", TaskPriority::Low, TaskStatus::Todo));
    store
        .set_sub_tasks(
            task.id,
            vec![SubTask { id: Uuid::new_v4(), title: "old".to_string(), is_done: true }],
        )
        .unwrap();

    let replacement = vec![
        SubTask { id: Uuid::new_v4(), title: "new one".to_string(), is_done: false },
        SubTask { id: Uuid::new_v4(), title: "new two".to_string(), is_done: false },
    ];
    let updated = store.set_sub_tasks(task.id, replacement.clone()).unwrap();
    assert_eq!(updated.sub_tasks, replacement);
}

#[test]
fn test_mutations_mirror_to_storage_and_reload_equal() {
    let (storage, mut store, user_id) = empty_store();
    let task = store.create(sample_draft("a", TaskPriority::High, TaskStatus::Todo));
    store.create(sample_draft("b", TaskPriority::Low, TaskStatus::InProgress));
    store.update(task.id, TaskPatch::status(TaskStatus::Done));

    let reloaded = TaskStore::load(storage, user_id);
    assert_eq!(reloaded.tasks(), store.tasks());
}

#[test]
fn test_load_treats_malformed_payload_as_empty() {
    let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let user_id = Uuid::new_v4();
    storage.set(&keys::tasks(&user_id), "[{broken").unwrap();

    let store = TaskStore::load(storage, user_id);
    assert!(store.is_empty());
}

#[test]
fn test_foreign_tasks_cannot_be_updated_or_deleted() {
    // A corrupted payload could carry another user's task; mutations
    // must refuse to touch it.
    let storage: Arc<MemoryStore> = Arc::new(MemoryStore::new());
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();

    let mut seed = TaskStore::load(storage.clone(), intruder);
    let foreign = seed.create(sample_draft("theirs", TaskPriority::Low, TaskStatus::Todo));
    // Re-home the intruder's payload under the owner's key
    let payload = storage.get(&keys::tasks(&intruder)).unwrap().unwrap();
    storage.set(&keys::tasks(&owner), &payload).unwrap();

    let mut store = TaskStore::load(storage, owner);
    assert_eq!(store.len(), 1);
    assert!(store
        .update(foreign.id, TaskPatch::status(TaskStatus::Done))
        .is_none());
    assert!(!store.delete_confirmed(foreign.id, |_| true));
    assert_eq!(store.tasks()[0].status, TaskStatus::Todo);
}
