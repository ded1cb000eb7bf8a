use std::collections::BTreeMap;
use std::sync::RwLock;

use amigo_core::{NewPerson, Person, PersonFilter, PersonId, PersonScope, PersonUpdate};

use super::store::{PeopleStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    people: BTreeMap<PersonId, Person>,
}

/// In-memory people store for tests/dev.
///
/// Ids are assigned from a counter starting at 1 and never reused.
#[derive(Debug, Default)]
pub struct InMemoryPeopleStore {
    inner: RwLock<Inner>,
}

impl InMemoryPeopleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Unavailable("in-memory people store lock poisoned".to_string())
    }
}

#[async_trait::async_trait]
impl PeopleStore for InMemoryPeopleStore {
    async fn get_all(&self, scope: PersonScope) -> Result<Vec<Person>, StoreError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner
            .people
            .values()
            .filter(|p| p.id_event == scope.id_event && p.id_group == scope.id_group)
            .cloned()
            .collect())
    }

    async fn get_one(&self, filter: &PersonFilter) -> Result<Option<Person>, StoreError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(inner.people.values().find(|p| filter.matches(p)).cloned())
    }

    async fn add(&self, person: NewPerson) -> Result<Person, StoreError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        inner.next_id += 1;
        let record = Person {
            id: PersonId::new(inner.next_id),
            id_event: person.id_event,
            id_group: person.id_group,
            name: person.name,
            cpf: person.cpf.into_inner(),
            matched: String::new(),
        };
        inner.people.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        scope: PersonScope,
        id: PersonId,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        let filter = PersonFilter::scoped(scope, id);
        match inner.people.get_mut(&id) {
            Some(person) if filter.matches(person) => {
                update.apply_to(person);
                Ok(Some(person.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn remove(&self, scope: PersonScope, id: PersonId) -> Result<Option<Person>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        let filter = PersonFilter::scoped(scope, id);
        if !inner.people.get(&id).is_some_and(|p| filter.matches(p)) {
            return Ok(None);
        }
        Ok(inner.people.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amigo_core::{Cpf, EventId, GroupId};

    fn scope() -> PersonScope {
        PersonScope::new(EventId::new(1), GroupId::new(2))
    }

    fn new_person(name: &str, cpf: &str) -> NewPerson {
        NewPerson::new(EventId::new(1), GroupId::new(2), name, Cpf::parse(cpf).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn add_assigns_ids_and_stores_normalized_cpf() {
        let store = InMemoryPeopleStore::new();
        let a = store.add(new_person("Ana", "111.111.111-11")).await.unwrap();
        let b = store.add(new_person("Bia", "222.222.222-22")).await.unwrap();

        assert_eq!(a.id, PersonId::new(1));
        assert_eq!(b.id, PersonId::new(2));

        let fetched = store
            .get_one(&PersonFilter::scoped(scope(), a.id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.cpf, "11111111111");
        assert!(!fetched.is_matched());
    }

    #[tokio::test]
    async fn get_all_is_scoped_and_ordered() {
        let store = InMemoryPeopleStore::new();
        store.add(new_person("Ana", "1")).await.unwrap();
        store
            .add(NewPerson::new(EventId::new(1), GroupId::new(3), "Other", Cpf::parse("2").unwrap()).unwrap())
            .await
            .unwrap();
        store.add(new_person("Bia", "3")).await.unwrap();

        let names: Vec<_> = store
            .get_all(scope())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Bia"]);
    }

    #[tokio::test]
    async fn update_outside_scope_is_none() {
        let store = InMemoryPeopleStore::new();
        let a = store.add(new_person("Ana", "1")).await.unwrap();
        let wrong = PersonScope::new(EventId::new(1), GroupId::new(99));
        let update = PersonUpdate {
            name: Some("Changed".to_string()),
            ..PersonUpdate::default()
        };

        assert!(store.update(wrong, a.id, &update).await.unwrap().is_none());
        let updated = store.update(scope(), a.id, &update).await.unwrap().unwrap();
        assert_eq!(updated.name, "Changed");
    }

    #[tokio::test]
    async fn remove_returns_deleted_record_once() {
        let store = InMemoryPeopleStore::new();
        let a = store.add(new_person("Ana", "1")).await.unwrap();

        let removed = store.remove(scope(), a.id).await.unwrap().unwrap();
        assert_eq!(removed, a);
        assert!(store.remove(scope(), a.id).await.unwrap().is_none());
        assert!(store.get_all(scope()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_remove() {
        let store = InMemoryPeopleStore::new();
        let a = store.add(new_person("Ana", "1")).await.unwrap();
        store.remove(scope(), a.id).await.unwrap();
        let b = store.add(new_person("Bia", "2")).await.unwrap();
        assert_ne!(a.id, b.id);
    }
}
