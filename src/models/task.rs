use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Number of tasks returned by a listing when the caller gives no `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 5;
/// Upper bound applied to any requested `limit`.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 4 and 24 characters.
    #[validate(length(
        min = 4,
        max = 24,
        message = "title must be between 4 and 24 characters"
    ))]
    pub title: String,
}

/// A sparse update of a task. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TaskPatch {
    #[validate(length(
        min = 1,
        max = 24,
        message = "title must be between 1 and 24 characters"
    ))]
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Represents a task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// Identifier of the user who owns/created the task. Never changes.
    pub user_id: i32,
    /// The title of the task.
    pub title: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Timestamp of when the task was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of the last update to the task.
    pub updated_at: DateTime<Utc>,
}

/// Query parameters accepted when listing tasks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TaskQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// A resolved page window: `limit` items starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl From<TaskQuery> for Pagination {
    fn from(query: TaskQuery) -> Self {
        Pagination {
            limit: query
                .limit
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .min(MAX_PAGE_LIMIT),
            offset: query.offset.unwrap_or(0),
        }
    }
}

impl Task {
    /// Creates a new, not yet completed `Task` owned by `user_id`.
    pub fn new(title: String, user_id: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TaskPatch {
    /// Applies the present fields to `task` and bumps `updated_at`.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        task.updated_at = Utc::now();
    }
}
