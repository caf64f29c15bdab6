//!
//! # Task Ownership Service
//!
//! CRUD over task records where every operation is scoped to the calling user. The caller id
//! always comes from the request identity resolved by `AuthMiddleware`, never from a body.
//!
//! Reads that find a task owned by someone else fail with [`TaskError::Forbidden`], which is
//! distinct from [`TaskError::NotFound`]. Mutations repeat the owner in the store write
//! itself, so a task deleted or reassigned between the check and the write is reported as
//! `NotFound` rather than touched.

use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Pagination, Task, TaskPatch};
use crate::store::{StoreError, TaskRepository};

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task not found")]
    NotFound,
    #[error("task belongs to another user")]
    Forbidden,
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    /// Creates a not-yet-completed task owned by `caller_id`. `title` is validated upstream.
    pub async fn create(&self, caller_id: i32, title: String) -> Result<Task, TaskError> {
        let task = Task::new(title, caller_id);
        let created = self.tasks.create_task(&task).await?;
        log::debug!("user {} created task {}", caller_id, created.id);
        Ok(created)
    }

    pub async fn get(&self, caller_id: i32, task_id: Uuid) -> Result<Task, TaskError> {
        let task = self
            .tasks
            .find_task(task_id)
            .await?
            .ok_or(TaskError::NotFound)?;

        if task.user_id != caller_id {
            log::warn!(
                "user {} denied access to task {} owned by {}",
                caller_id,
                task_id,
                task.user_id
            );
            return Err(TaskError::Forbidden);
        }
        Ok(task)
    }

    pub async fn list(&self, caller_id: i32, page: Pagination) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.list_tasks(caller_id, page).await?)
    }

    /// Applies only the fields present in `patch`.
    pub async fn update(
        &self,
        caller_id: i32,
        task_id: Uuid,
        patch: &TaskPatch,
    ) -> Result<Task, TaskError> {
        self.get(caller_id, task_id).await?;
        self.tasks
            .update_task(task_id, caller_id, patch)
            .await?
            .ok_or(TaskError::NotFound)
    }

    /// Removes the task and returns the state it had before deletion.
    pub async fn delete(&self, caller_id: i32, task_id: Uuid) -> Result<Task, TaskError> {
        self.get(caller_id, task_id).await?;
        let deleted = self
            .tasks
            .delete_task(task_id, caller_id)
            .await?
            .ok_or(TaskError::NotFound)?;
        log::debug!("user {} deleted task {}", caller_id, task_id);
        Ok(deleted)
    }
}
