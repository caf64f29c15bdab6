use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TaskRepository, UserRepository};
use crate::models::{Pagination, Task, TaskPatch, User};

/// In-process store used when no `DATABASE_URL` is configured, and by the test suite.
///
/// Every check-then-write runs under a single write guard, which gives it the same
/// atomicity as the conditional statements in [`super::PgStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    users: Vec<User>,
    tasks: Vec<Task>,
    last_user_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn create_user(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut state = self.state.write().await;
        if state.users.iter().any(|u| u.email == email) {
            return Err(StoreError::UniqueViolation);
        }
        state.last_user_id += 1;
        let user = User {
            id: state.last_user_id,
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        Ok(Some(user))
    }
}

#[async_trait]
impl TaskRepository for MemoryStore {
    async fn create_task(&self, task: &Task) -> Result<Task, StoreError> {
        let mut state = self.state.write().await;
        if state.tasks.iter().any(|t| t.id == task.id) {
            return Err(StoreError::UniqueViolation);
        }
        state.tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn find_task(&self, id: Uuid) -> Result<Option<Task>, StoreError> {
        let state = self.state.read().await;
        Ok(state.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(&self, owner_id: i32, page: Pagination) -> Result<Vec<Task>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .tasks
            .iter()
            .filter(|t| t.user_id == owner_id)
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update_task(
        &self,
        id: Uuid,
        owner_id: i32,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, StoreError> {
        let mut state = self.state.write().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id && t.user_id == owner_id);
        Ok(task.map(|task| {
            patch.apply(task);
            task.clone()
        }))
    }

    async fn delete_task(&self, id: Uuid, owner_id: i32) -> Result<Option<Task>, StoreError> {
        let mut state = self.state.write().await;
        let position = state
            .tasks
            .iter()
            .position(|t| t.id == id && t.user_id == owner_id);
        Ok(position.map(|index| state.tasks.remove(index)))
    }
}
