//! Repository port for person persistence and lookup.

use crate::person::domain::{Person, PersonId, PersonPatch};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for person repository operations.
pub type PersonRepositoryResult<T> = Result<T, PersonRepositoryError>;

/// Person persistence contract.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Returns all stored people in insertion order.
    async fn find_all(&self) -> PersonRepositoryResult<Vec<Person>>;

    /// Finds a person by identifier.
    ///
    /// Returns `None` when the person does not exist.
    async fn find_by_id(&self, id: &PersonId) -> PersonRepositoryResult<Option<Person>>;

    /// Stores a new person or fully replaces an existing record with the
    /// same identifier.
    async fn store(&self, person: &Person) -> PersonRepositoryResult<()>;

    /// Applies a field-level partial update to an existing person.
    ///
    /// # Errors
    ///
    /// Returns [`PersonRepositoryError::NotFound`] when the person does not
    /// exist.
    async fn update(&self, id: &PersonId, patch: &PersonPatch) -> PersonRepositoryResult<Person>;

    /// Removes a person, reporting whether a record was removed.
    ///
    /// A missing identifier is reported as `false`, never as an error.
    async fn delete(&self, id: &PersonId) -> PersonRepositoryResult<bool>;
}

/// Errors returned by person repository implementations.
#[derive(Debug, Clone, Error)]
pub enum PersonRepositoryError {
    /// The person was not found.
    #[error("person not found: {0}")]
    NotFound(PersonId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl PersonRepositoryError {
    /// Wraps a persistence-layer failure.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
