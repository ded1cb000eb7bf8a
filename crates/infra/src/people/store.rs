use std::sync::Arc;

use thiserror::Error;

use amigo_core::{NewPerson, Person, PersonFilter, PersonId, PersonScope, PersonUpdate};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error in {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn database(operation: &'static str, source: sqlx::Error) -> Self {
        Self::Database { operation, source }
    }
}

/// Data-access contract for person records.
///
/// Absence is `Ok(None)`; `Err` is reserved for storage failures. Every
/// mutation is scoped by (event, group); lookups go through `PersonFilter`
/// so callers decide which criteria apply.
#[async_trait::async_trait]
pub trait PeopleStore: Send + Sync {
    /// All people in a group, ordered by id.
    async fn get_all(&self, scope: PersonScope) -> Result<Vec<Person>, StoreError>;

    async fn get_one(&self, filter: &PersonFilter) -> Result<Option<Person>, StoreError>;

    async fn add(&self, person: NewPerson) -> Result<Person, StoreError>;

    /// Apply a partial update; `None` when no person exists in the scope.
    async fn update(
        &self,
        scope: PersonScope,
        id: PersonId,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, StoreError>;

    /// Delete and return the removed record.
    async fn remove(&self, scope: PersonScope, id: PersonId) -> Result<Option<Person>, StoreError>;
}

#[async_trait::async_trait]
impl<S> PeopleStore for Arc<S>
where
    S: PeopleStore + ?Sized,
{
    async fn get_all(&self, scope: PersonScope) -> Result<Vec<Person>, StoreError> {
        (**self).get_all(scope).await
    }

    async fn get_one(&self, filter: &PersonFilter) -> Result<Option<Person>, StoreError> {
        (**self).get_one(filter).await
    }

    async fn add(&self, person: NewPerson) -> Result<Person, StoreError> {
        (**self).add(person).await
    }

    async fn update(
        &self,
        scope: PersonScope,
        id: PersonId,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, StoreError> {
        (**self).update(scope, id, update).await
    }

    async fn remove(&self, scope: PersonScope, id: PersonId) -> Result<Option<Person>, StoreError> {
        (**self).remove(scope, id).await
    }
}
