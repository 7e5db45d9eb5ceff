//! Service layer for task lifecycle orchestration.
//!
//! The lifecycle service is the only component callers address directly. It
//! confirms existence before every mutation that targets an existing record,
//! generates identifiers, and stamps timestamps; raw text from commands is
//! validated into domain scalars here.

use crate::person::domain::PersonId;
use crate::task::{
    domain::{
        DueDatePatch, Priority, Task, TaskDescription, TaskDomainError, TaskDraft, TaskId,
        TaskPatch, TaskStatus, TaskTitle,
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
    description: String,
    status: TaskStatus,
    priority: Priority,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
            priority,
            due_date: None,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Request payload for partially updating a task.
///
/// Every field is optional; the due date is tri-state, so "clear the due
/// date" and "leave it alone" stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    due_date: DueDatePatch,
}

impl UpdateTaskRequest {
    /// Creates an empty update request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets a replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the tri-state due-date update.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DueDatePatch) -> Self {
        self.due_date = due_date;
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task {0} not found")]
    NotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    async fn find_task_or_error(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }

    /// Creates a new task.
    ///
    /// Identifier and timestamps are assigned here, never by the caller;
    /// the assignment set starts empty and the due date is taken verbatim
    /// from the request.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title or description
    /// is invalid, or [`TaskLifecycleError::Repository`] when persistence
    /// fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = TaskDraft {
            title: TaskTitle::new(request.title)?,
            description: TaskDescription::new(request.description)?,
            status: request.status,
            priority: request.priority,
            due_date: request.due_date,
        };

        let task = Task::new(draft, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// Reads never refresh `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, or repository errors from the lookup.
    pub async fn get_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(id).await
    }

    /// Lists all tasks, unfiltered, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns repository errors from the listing.
    pub async fn list_tasks(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_all().await?)
    }

    /// Applies a partial update to an existing task.
    ///
    /// Existence is confirmed before any field is touched; `updated_at`
    /// refreshes even when the request changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, domain errors for invalid replacement values, or repository
    /// errors from the merge.
    pub async fn update_task(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(id).await?;

        let patch = TaskPatch {
            title: request.title.map(TaskTitle::new).transpose()?,
            description: request.description.map(TaskDescription::new).transpose()?,
            status: request.status,
            priority: request.priority,
            due_date: request.due_date,
            updated_at: self.clock.utc(),
        };

        Ok(self.repository.update(id, &patch).await?)
    }

    /// Deletes a task.
    ///
    /// A second delete of the same identifier fails with
    /// [`TaskLifecycleError::NotFound`]; deletion leaves no residual trace.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, or repository errors from the removal.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.find_task_or_error(id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Assigns a person to a task.
    ///
    /// Idempotent on the assignment set; `updated_at` refreshes even when
    /// the person is already assigned. The person identifier is not checked
    /// against the person repository.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, or repository errors from the mutation.
    pub async fn assign_person(
        &self,
        task_id: TaskId,
        person_id: PersonId,
    ) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(task_id).await?;
        Ok(self
            .repository
            .assign_person(task_id, person_id, self.clock.utc())
            .await?)
    }

    /// Unassigns a person from a task.
    ///
    /// Removing a person who was never assigned succeeds; only a missing
    /// task is a failure. `updated_at` refreshes either way.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when no task has the given
    /// ID, or repository errors from the mutation.
    pub async fn unassign_person(
        &self,
        task_id: TaskId,
        person_id: PersonId,
    ) -> TaskLifecycleResult<Task> {
        self.find_task_or_error(task_id).await?;
        Ok(self
            .repository
            .unassign_person(task_id, person_id, self.clock.utc())
            .await?)
    }
}
