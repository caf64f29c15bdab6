//!
//! # Credential Store
//!
//! Data access contracts for user and task records. The services only ever see these traits;
//! [`PgStore`] backs them with PostgreSQL and [`MemoryStore`] keeps everything in process.
//!
//! Ownership-sensitive writes (`update_task`, `delete_task`) take the owner id and must only
//! touch a row whose `(id, user_id)` pair matches, so the check holds even if a caller skips
//! the preceding read.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Pagination, Task, TaskPatch, User};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// SQLSTATE reported by PostgreSQL for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    /// A write collided with an existing unique key (e.g. a duplicate email).
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> StoreError {
        match &error {
            sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                StoreError::UniqueViolation
            }
            _ => StoreError::Database(error),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact-match lookup; emails are compared case-sensitively.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a user. Fails with [`StoreError::UniqueViolation`] if the email is taken.
    /// `Ok(None)` means the store accepted the write but returned no record.
    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError>;
}

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create_task(&self, task: &Task) -> Result<Task, StoreError>;

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, StoreError>;

    /// Tasks owned by `owner_id` in creation order, windowed by `page`.
    async fn list_tasks(&self, owner_id: i32, page: Pagination) -> Result<Vec<Task>, StoreError>;

    /// Applies `patch` to the task only if it is owned by `owner_id`.
    async fn update_task(
        &self,
        id: Uuid,
        owner_id: i32,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, StoreError>;

    /// Removes the task only if it is owned by `owner_id`, returning its prior state.
    async fn delete_task(&self, id: Uuid, owner_id: i32) -> Result<Option<Task>, StoreError>;
}
