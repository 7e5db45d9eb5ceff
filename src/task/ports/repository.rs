//! Repository port for task persistence, lookup, and assignment management.

use crate::person::domain::PersonId;
use crate::task::domain::{Task, TaskId, TaskPatch};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations own the keyed collection and no business rules beyond
/// "does this key exist": every mutating operation re-checks existence at
/// the moment of mutation, so callers' check-then-mutate sequences cannot
/// observe partial states. Timestamps are supplied by the caller, keeping
/// implementations clock-free.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns all stored tasks in insertion order.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist; a missing key is never
    /// an error here.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task or fully replaces an existing record with the same
    /// identifier.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Applies a field-level partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> TaskRepositoryResult<Task>;

    /// Removes a task, reporting whether a record was removed.
    ///
    /// A missing identifier is reported as `false`, never as an error.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Adds a person to a task's assignment set and stamps `updated_at`.
    ///
    /// Adding an already-assigned person is a no-op on the set but still
    /// stamps the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn assign_person(
        &self,
        task_id: TaskId,
        person_id: PersonId,
        at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;

    /// Removes a person from a task's assignment set and stamps
    /// `updated_at`.
    ///
    /// Removing a person who was never assigned is a no-op on the set but
    /// still stamps the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn unassign_person(
        &self,
        task_id: TaskId,
        person_id: PersonId,
        at: DateTime<Utc>,
    ) -> TaskRepositoryResult<Task>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
