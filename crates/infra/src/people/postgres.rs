//! Postgres-backed people store.
//!
//! Expects an `event_people` table:
//!
//! ```sql
//! CREATE TABLE event_people (
//!     id        BIGSERIAL PRIMARY KEY,
//!     id_event  BIGINT NOT NULL,
//!     id_group  BIGINT NOT NULL,
//!     name      TEXT   NOT NULL,
//!     cpf       TEXT   NOT NULL,
//!     matched   TEXT   NOT NULL DEFAULT ''
//! );
//! ```
//!
//! The schema is owned outside this crate; nothing here creates or migrates it.

use std::sync::Arc;

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use amigo_core::{EventId, GroupId, NewPerson, Person, PersonFilter, PersonId, PersonScope, PersonUpdate};

use super::store::{PeopleStore, StoreError};

const COLUMNS: &str = "id, id_event, id_group, name, cpf, matched";

/// Postgres people store.
///
/// Every query carries `id_event` in its WHERE clause; mutations also carry
/// `id_group`.
#[derive(Debug, Clone)]
pub struct PostgresPeopleStore {
    pool: Arc<PgPool>,
}

impl PostgresPeopleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Arc::new(pool) }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| StoreError::database("connect", e))?;
        Ok(Self::new(pool))
    }
}

fn row_to_person(row: &PgRow) -> Result<Person, sqlx::Error> {
    Ok(Person {
        id: PersonId::new(row.try_get("id")?),
        id_event: EventId::new(row.try_get("id_event")?),
        id_group: GroupId::new(row.try_get("id_group")?),
        name: row.try_get("name")?,
        cpf: row.try_get("cpf")?,
        matched: row.try_get::<Option<String>, _>("matched")?.unwrap_or_default(),
    })
}

#[async_trait::async_trait]
impl PeopleStore for PostgresPeopleStore {
    #[instrument(skip(self), fields(operation = "people.get_all"))]
    async fn get_all(&self, scope: PersonScope) -> Result<Vec<Person>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM event_people WHERE id_event = $1 AND id_group = $2 ORDER BY id"
        ))
        .bind(scope.id_event.get())
        .bind(scope.id_group.get())
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| StoreError::database("get_all", e))?;

        rows.iter()
            .map(row_to_person)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::database("get_all", e))
    }

    #[instrument(skip(self), fields(operation = "people.get_one"))]
    async fn get_one(&self, filter: &PersonFilter) -> Result<Option<Person>, StoreError> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {COLUMNS}
            FROM event_people
            WHERE id_event = $1
                AND ($2::bigint IS NULL OR id = $2)
                AND ($3::bigint IS NULL OR id_group = $3)
                AND ($4::text IS NULL OR cpf = $4)
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(filter.id_event.get())
        .bind(filter.id.map(PersonId::get))
        .bind(filter.id_group.map(GroupId::get))
        .bind(filter.cpf.as_deref())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| StoreError::database("get_one", e))?;

        row.as_ref()
            .map(row_to_person)
            .transpose()
            .map_err(|e| StoreError::database("get_one", e))
    }

    #[instrument(skip(self, person), fields(operation = "people.add"))]
    async fn add(&self, person: NewPerson) -> Result<Person, StoreError> {
        let row = sqlx::query(&format!(
            "INSERT INTO event_people (id_event, id_group, name, cpf) VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(person.id_event.get())
        .bind(person.id_group.get())
        .bind(&person.name)
        .bind(person.cpf.as_str())
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| StoreError::database("add", e))?;

        row_to_person(&row).map_err(|e| StoreError::database("add", e))
    }

    #[instrument(skip(self, update), fields(operation = "people.update"))]
    async fn update(
        &self,
        scope: PersonScope,
        id: PersonId,
        update: &PersonUpdate,
    ) -> Result<Option<Person>, StoreError> {
        let row = sqlx::query(&format!(
            r#"
            UPDATE event_people
            SET name = COALESCE($4, name),
                cpf = COALESCE($5, cpf),
                matched = COALESCE($6, matched)
            WHERE id = $1 AND id_event = $2 AND id_group = $3
            RETURNING {COLUMNS}
            "#
        ))
        .bind(id.get())
        .bind(scope.id_event.get())
        .bind(scope.id_group.get())
        .bind(update.name.as_deref())
        .bind(update.cpf.as_ref().map(|c| c.as_str()))
        .bind(update.matched.as_deref())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| StoreError::database("update", e))?;

        row.as_ref()
            .map(row_to_person)
            .transpose()
            .map_err(|e| StoreError::database("update", e))
    }

    #[instrument(skip(self), fields(operation = "people.remove"))]
    async fn remove(&self, scope: PersonScope, id: PersonId) -> Result<Option<Person>, StoreError> {
        let row = sqlx::query(&format!(
            "DELETE FROM event_people WHERE id = $1 AND id_event = $2 AND id_group = $3 RETURNING {COLUMNS}"
        ))
        .bind(id.get())
        .bind(scope.id_event.get())
        .bind(scope.id_group.get())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| StoreError::database("remove", e))?;

        row.as_ref()
            .map(row_to_person)
            .transpose()
            .map_err(|e| StoreError::database("remove", e))
    }
}
