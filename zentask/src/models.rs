//! Data model shared across the core
//!
//! Wire names are camelCase and enum values SCREAMING_SNAKE so persisted
//! collections stay compatible with the documents the original client
//! wrote to local storage.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated (mock) user for one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Fabricated bearer token, never validated
    pub token: String,
}

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        };
        f.write_str(label)
    }
}

/// Urgency of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::High => "HIGH",
        };
        f.write_str(label)
    }
}

/// Boolean-completion checklist item attached to a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTask {
    pub id: Uuid,
    pub title: String,
    pub is_done: bool,
}

/// A user-owned unit of work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: String,
    pub due_date: NaiveDate,
    /// Owning user, fixed at creation
    pub user_id: Uuid,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Populated wholesale by decomposition, toggled item-by-item
    #[serde(default)]
    pub sub_tasks: Vec<SubTask>,
}

impl Task {
    /// Sub-task completion as a whole percentage; 0 with no sub-tasks
    pub fn progress(&self) -> u8 {
        let total = self.sub_tasks.len();
        if total == 0 {
            return 0;
        }
        let done = self.sub_tasks.iter().filter(|s| s.is_done).count();
        ((done as f64 / total as f64) * 100.0).round() as u8
    }
}

/// Fields the caller supplies when creating or editing a task
///
/// Ids, ownership, and the creation timestamp are the store's business.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub category: String,
    pub due_date: NaiveDate,
}

impl TaskDraft {
    /// A draft with the form's defaults: TODO, medium priority, due today
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::Medium,
            category: "Deep Work".to_string(),
            due_date: Utc::now().date_naive(),
        }
    }
}

/// Partial update merged into an existing task
///
/// `None` fields are left untouched; `sub_tasks` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub sub_tasks: Option<Vec<SubTask>>,
}

impl TaskPatch {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn sub_tasks(sub_tasks: Vec<SubTask>) -> Self {
        Self {
            sub_tasks: Some(sub_tasks),
            ..Self::default()
        }
    }

    /// Merge this patch into `task`
    pub fn apply_to(self, task: &mut Task) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(sub_tasks) = self.sub_tasks {
            task.sub_tasks = sub_tasks;
        }
    }
}

/// Filter over the collection: a single status or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Status(TaskStatus),
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(status) => task.status == *status,
        }
    }
}

/// Per-status counts for the summary display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}
