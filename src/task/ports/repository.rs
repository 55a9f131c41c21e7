//! Repository port for task storage and identity-preserving mutation.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Absent records are a normal outcome everywhere: lookups return `None`
/// and mutations return `false`, never an error. Implementations are the
/// seam for durability; a database-backed adapter replaces the in-memory
/// one without changes elsewhere.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns a fresh snapshot of all tasks, ordered by creation time
    /// descending (most recently created first).
    async fn get_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn get_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Creates a task from the draft and returns the stored record.
    ///
    /// Assigns a fresh id unless the draft carries one, stamps the creation
    /// timestamp with the current time regardless of caller input, and
    /// stamps the completion timestamp when the draft arrives completed
    /// without one.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when a caller-supplied
    /// id already exists in storage.
    async fn create(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Overwrites the mutable fields of the stored task with the patch,
    /// mutating the stored record in place (identity preserved).
    ///
    /// A completion flag flipping to `true` stamps the completion timestamp
    /// with the current time; flipping to `false` clears it.
    ///
    /// Returns `Ok(false)` when no task matches the id.
    async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskRepositoryResult<bool>;

    /// Removes the task with the given id.
    ///
    /// Returns `Ok(false)` when no task matches the id.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
