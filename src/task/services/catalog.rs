//! Service layer enforcing validation and query semantics over task storage.

use crate::task::{
    domain::{
        StatusFilter, Task, TaskDomainError, TaskDraft, TaskId, TaskPatch, TaskPriority, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: TaskPriority,
    tags: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
            priority: TaskPriority::Medium,
            tags: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Request payload replacing every mutable field of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: Option<String>,
    is_completed: bool,
    due_date: Option<DateTime<Utc>>,
    priority: TaskPriority,
    tags: Vec<String>,
}

impl UpdateTaskRequest {
    /// Creates a request with the required title and default remaining
    /// fields.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            is_completed: false,
            due_date: None,
            priority: TaskPriority::Medium,
            tags: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn completed(mut self, is_completed: bool) -> Self {
        self.is_completed = is_completed;
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the priority level.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the tags.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed. Boundary layers surface this as a client
    /// input error.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
///
/// Every query re-derives its answer from a fresh repository snapshot; the
/// service holds no state of its own, so all callers observe a consistent
/// view. Absent tasks are reported as `Ok(false)` or `Ok(None)`, never as
/// errors.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists tasks, newest first, optionally narrowed by completion status
    /// and a free-text search term.
    ///
    /// The two filters compose with AND. A blank search term applies no
    /// narrowing; a non-blank term is matched as given, surrounding
    /// whitespace included.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn get_all_tasks(
        &self,
        status: Option<StatusFilter>,
        search: Option<&str>,
    ) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.get_all().await?;

        if let Some(filter) = status {
            tasks.retain(|task| match filter {
                StatusFilter::Completed => task.is_completed(),
                StatusFilter::Pending => !task.is_completed(),
                StatusFilter::Overdue => task.is_overdue(&*self.clock),
            });
        }

        if let Some(term) = search
            && !term.trim().is_empty()
        {
            tasks.retain(|task| task.matches_search(term));
        }

        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the lookup fails.
    pub async fn get_task_by_id(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    /// Creates a task from the request.
    ///
    /// Titles and descriptions are trimmed. Tasks always start incomplete
    /// through this path, whatever the caller intends.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the title is empty or
    /// whitespace-only, or [`TaskServiceError::Repository`] when storage
    /// rejects the record.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let mut draft = TaskDraft::new(title);
        draft.description = request
            .description
            .map(|description| description.trim().to_owned())
            .unwrap_or_default();
        draft.due_date = request.due_date;
        draft.priority = request.priority;
        draft.tags = request.tags;

        Ok(self.repository.create(draft).await?)
    }

    /// Replaces the mutable fields of an existing task.
    ///
    /// Returns `Ok(false)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the replacement title
    /// is empty or whitespace-only, or [`TaskServiceError::Repository`]
    /// when storage fails.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskServiceResult<bool> {
        let title = TaskTitle::new(request.title)?;
        let patch = TaskPatch {
            title,
            description: request.description.unwrap_or_default(),
            is_completed: request.is_completed,
            due_date: request.due_date,
            priority: request.priority,
            tags: request.tags,
        };
        Ok(self.repository.update(id, patch).await?)
    }

    /// Flips a task's completion flag, keeping the completion timestamp
    /// consistent with the new state.
    ///
    /// Returns `Ok(false)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn toggle_task_completion(&self, id: TaskId) -> TaskServiceResult<bool> {
        let Some(task) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };

        let mut patch = task.to_patch();
        patch.is_completed = !patch.is_completed;
        Ok(self.repository.update(id, patch).await?)
    }

    /// Removes a task.
    ///
    /// Returns `Ok(false)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }

    /// Lists incomplete tasks whose due date has passed, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn get_overdue_tasks(&self) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.get_all().await?;
        tasks.retain(|task| task.is_overdue(&*self.clock));
        Ok(tasks)
    }

    /// Lists tasks whose title, description, or tags contain the term,
    /// compared case-insensitively. The term is matched as given,
    /// surrounding whitespace included.
    ///
    /// A blank term yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn search_tasks(&self, term: &str) -> TaskServiceResult<Vec<Task>> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut tasks = self.repository.get_all().await?;
        tasks.retain(|task| task.matches_search(term));
        Ok(tasks)
    }

    /// Lists tasks with exactly the given priority, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn get_tasks_by_priority(
        &self,
        priority: TaskPriority,
    ) -> TaskServiceResult<Vec<Task>> {
        let mut tasks = self.repository.get_all().await?;
        tasks.retain(|task| task.priority() == priority);
        Ok(tasks)
    }

    /// Lists tasks carrying a tag equal to the given label under
    /// case-insensitive comparison.
    ///
    /// A blank tag yields an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the snapshot cannot be
    /// read.
    pub async fn get_tasks_by_tag(&self, tag: &str) -> TaskServiceResult<Vec<Task>> {
        if tag.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut tasks = self.repository.get_all().await?;
        tasks.retain(|task| task.has_tag(tag));
        Ok(tasks)
    }
}
