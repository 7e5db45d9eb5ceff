//! In-memory repository for person records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::person::{
    domain::{Person, PersonId, PersonPatch},
    ports::{PersonRepository, PersonRepositoryError, PersonRepositoryResult},
};

/// Thread-safe in-memory person repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonRepository {
    state: Arc<RwLock<InMemoryPersonState>>,
}

#[derive(Debug, Default)]
struct InMemoryPersonState {
    people: HashMap<PersonId, Person>,
    order: Vec<PersonId>,
}

impl InMemoryPersonRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> PersonRepositoryResult<Vec<Person>> {
        let state = self.state.read().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.people.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &PersonId) -> PersonRepositoryResult<Option<Person>> {
        let state = self.state.read().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.people.get(id).cloned())
    }

    async fn store(&self, person: &Person) -> PersonRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if !state.people.contains_key(person.id()) {
            state.order.push(person.id().clone());
        }
        state.people.insert(person.id().clone(), person.clone());
        Ok(())
    }

    async fn update(&self, id: &PersonId, patch: &PersonPatch) -> PersonRepositoryResult<Person> {
        let mut state = self.state.write().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let person = state
            .people
            .get_mut(id)
            .ok_or_else(|| PersonRepositoryError::NotFound(id.clone()))?;
        person.apply_patch(patch);
        Ok(person.clone())
    }

    async fn delete(&self, id: &PersonId) -> PersonRepositoryResult<bool> {
        let mut state = self.state.write().map_err(|err| {
            PersonRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let removed = state.people.remove(id).is_some();
        if removed {
            state.order.retain(|stored| stored != id);
        }
        Ok(removed)
    }
}
