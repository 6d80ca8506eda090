//! Authoritative task collection for one user
//!
//! The store owns the in-memory list; the key-value store holds a derived
//! serialized copy, rewritten in full after every mutation. Writes are
//! fire-and-forget relative to the caller: a failed mirror write is
//! logged, and the in-memory state remains the source of truth.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::models::{StatusCounts, StatusFilter, SubTask, Task, TaskDraft, TaskPatch, TaskStatus};
use crate::session::Session;
use crate::storage::{keys, KeyValueStore};

pub struct TaskStore {
    user_id: Uuid,
    tasks: Vec<Task>,
    store: Arc<dyn KeyValueStore>,
}

impl TaskStore {
    /// Load the collection for the session user
    pub fn open(session: &Session) -> Self {
        Self::load(session.store(), session.user_id())
    }

    /// Load the collection for `user_id`
    ///
    /// Absent or malformed payloads yield an empty collection.
    pub fn load(store: Arc<dyn KeyValueStore>, user_id: Uuid) -> Self {
        let tasks = match store.get(&keys::tasks(&user_id)) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Task>>(&payload) {
                Ok(tasks) => tasks,
                Err(err) => {
                    warn!(%user_id, %err, "stored task collection is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%user_id, %err, "could not read task collection, starting empty");
                Vec::new()
            }
        };
        Self {
            user_id,
            tasks,
            store,
        }
    }

    /// Create a task from `draft`, newest first
    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            category: draft.category,
            due_date: draft.due_date,
            user_id: self.user_id,
            created_at: Utc::now(),
            sub_tasks: Vec::new(),
        };
        self.tasks.insert(0, task.clone());
        self.persist();
        task
    }

    /// Merge `patch` into the task matching `id`
    ///
    /// Returns the updated task, or `None` when the id is absent (no-op).
    pub fn update(&mut self, id: Uuid, patch: TaskPatch) -> Option<Task> {
        let task = self.owned_task_mut(id)?;
        patch.apply_to(task);
        let updated = task.clone();
        self.persist();
        Some(updated)
    }

    /// Remove the task matching `id` after the caller confirms
    ///
    /// `confirm` receives the doomed task; returning `false` leaves the
    /// collection untouched. Returns whether a task was removed.
    pub fn delete_confirmed(&mut self, id: Uuid, confirm: impl FnOnce(&Task) -> bool) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        if self.tasks[index].user_id != self.user_id {
            warn!(%id, "refusing to delete a task owned by another user");
            return false;
        }
        if !confirm(&self.tasks[index]) {
            return false;
        }
        self.tasks.remove(index);
        self.persist();
        true
    }

    /// Stable subset of the collection matching `filter`
    pub fn filter(&self, filter: StatusFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Per-status counts for the summary display
    pub fn stats(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for task in &self.tasks {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Done => counts.done += 1,
            }
        }
        counts
    }

    /// Replace a task's sub-task list wholesale
    pub fn set_sub_tasks(&mut self, id: Uuid, sub_tasks: Vec<SubTask>) -> Option<Task> {
        self.update(id, TaskPatch::sub_tasks(sub_tasks))
    }

    /// Flip one sub-task's completion state
    pub fn toggle_sub_task(&mut self, task_id: Uuid, sub_task_id: Uuid) -> Option<Task> {
        let task = self.owned_task_mut(task_id)?;
        let sub_task = task.sub_tasks.iter_mut().find(|s| s.id == sub_task_id)?;
        sub_task.is_done = !sub_task.is_done;
        let updated = task.clone();
        self.persist();
        Some(updated)
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Mutable access to a task, guarding the one-user-per-store invariant
    fn owned_task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        let user_id = self.user_id;
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if task.user_id != user_id {
            warn!(%id, "refusing to touch a task owned by another user");
            return None;
        }
        Some(task)
    }

    /// Mirror the whole collection to storage
    fn persist(&self) {
        let payload = match serde_json::to_string(&self.tasks) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(user_id = %self.user_id, %err, "could not serialize task collection");
                return;
            }
        };
        if let Err(err) = self.store.set(&keys::tasks(&self.user_id), &payload) {
            warn!(user_id = %self.user_id, %err, "could not persist task collection");
        }
    }
}
