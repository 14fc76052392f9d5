//! Task service — CRUD plus the task-with-user read aggregation.
//!
//! DESIGN
//! ======
//! `get_with_user` joins a task with its owning user across the service
//! boundary at query time. The local task lookup decides the outcome: an
//! absent task is `NotFound`, and once the task is found the operation
//! cannot fail. The profile lookup is best-effort enrichment — any failure
//! (unreachable service, timeout, non-success status, bad body) is absorbed
//! into a `null` user field, logged at WARN, and counted. The caller never
//! sees the dependency failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use contracts::{CreateTaskRequest, TaskResponse, TaskStatus, TaskWithUserResponse, UpdateTaskStatusRequest};
use profile_client::ProfileApi;
use uuid::Uuid;

use crate::store::{NewTask, TaskRecord, TaskStore};

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(Uuid),
    #[error("invalid request: {0}")]
    Validation(&'static str),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

pub struct TaskService {
    store: Arc<dyn TaskStore>,
    users: Arc<dyn ProfileApi>,
    user_lookup_failures: AtomicU64,
}

impl TaskService {
    #[must_use]
    pub fn new(store: Arc<dyn TaskStore>, users: Arc<dyn ProfileApi>) -> Self {
        Self { store, users, user_lookup_failures: AtomicU64::new(0) }
    }

    /// Create a task. New tasks always start as `PENDING`.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty fields and a database error if
    /// the insert fails.
    pub async fn create(&self, request: CreateTaskRequest) -> Result<TaskResponse, TaskError> {
        if request.user_id.trim().is_empty() {
            return Err(TaskError::Validation("userId must not be empty"));
        }
        if request.title.trim().is_empty() {
            return Err(TaskError::Validation("title must not be empty"));
        }

        let task = self
            .store
            .save(NewTask { user_id: request.user_id, title: request.title, status: TaskStatus::Pending })
            .await?;
        Ok(to_response(task))
    }

    /// List all tasks.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list(&self) -> Result<Vec<TaskResponse>, TaskError> {
        let rows = self.store.find_all().await?;
        Ok(rows.into_iter().map(to_response).collect())
    }

    /// Fetch a task by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the task is absent.
    pub async fn get(&self, id: Uuid) -> Result<TaskResponse, TaskError> {
        let task = self.store.find_by_id(id).await?.ok_or(TaskError::NotFound(id))?;
        Ok(to_response(task))
    }

    /// Fetch a task joined with its owning user.
    ///
    /// The task lookup always precedes the remote call, and the remote call
    /// never fails the read: on any lookup failure the user field is `None`
    /// and the task fields are returned intact.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the task is absent; the profile dependency
    /// cannot produce an error here.
    pub async fn get_with_user(&self, id: Uuid) -> Result<TaskWithUserResponse, TaskError> {
        let task = self.store.find_by_id(id).await?.ok_or(TaskError::NotFound(id))?;

        let user = match self.users.get_user_by_id(&task.user_id).await {
            Ok(user) => Some(user),
            Err(e) => {
                self.user_lookup_failures.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    error = %e,
                    task_id = %id,
                    user_id = %task.user_id,
                    "user lookup failed; returning task without user"
                );
                None
            }
        };

        Ok(TaskWithUserResponse {
            id: task.id,
            user_id: task.user_id,
            title: task.title,
            status: task.status,
            user,
        })
    }

    /// List tasks owned by one user.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<TaskResponse>, TaskError> {
        let rows = self.store.find_by_user_id(user_id).await?;
        Ok(rows.into_iter().map(to_response).collect())
    }

    /// Rewrite a task's status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the task is absent.
    pub async fn update_status(&self, id: Uuid, request: UpdateTaskStatusRequest) -> Result<TaskResponse, TaskError> {
        let task = self
            .store
            .update_status(id, request.status)
            .await?
            .ok_or(TaskError::NotFound(id))?;
        Ok(to_response(task))
    }

    /// Delete a task. The lookup runs first so absence surfaces as
    /// `NotFound`, never as a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the task is absent.
    pub async fn delete(&self, id: Uuid) -> Result<(), TaskError> {
        let task = self.store.find_by_id(id).await?.ok_or(TaskError::NotFound(id))?;
        self.store.delete_by_id(task.id).await?;
        Ok(())
    }

    /// Number of absorbed user-lookup failures since startup.
    #[must_use]
    pub fn user_lookup_failures(&self) -> u64 {
        self.user_lookup_failures.load(Ordering::Relaxed)
    }
}

fn to_response(task: TaskRecord) -> TaskResponse {
    TaskResponse { id: task.id, user_id: task.user_id, title: task.title, status: task.status }
}

#[cfg(test)]
#[path = "task_test.rs"]
mod tests;
