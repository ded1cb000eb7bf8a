use serde::{Deserialize, Serialize};

use crate::cpf::Cpf;
use crate::error::{DomainError, DomainResult};
use crate::id::{EventId, GroupId, PersonId};

/// A person registered in a group of an event.
///
/// `cpf` is always stored normalized. `matched` holds the encrypted id of the
/// person this one was paired with, or an empty string when unpaired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub id_event: EventId,
    pub id_group: GroupId,
    pub name: String,
    pub cpf: String,
    #[serde(default)]
    pub matched: String,
}

impl Person {
    pub fn is_matched(&self) -> bool {
        !self.matched.is_empty()
    }

    pub fn summary(&self) -> PersonSummary {
        PersonSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Public view of a person (what the CPF search exposes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: PersonId,
    pub name: String,
}

/// A validated person ready to be persisted (id assigned by storage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub id_event: EventId,
    pub id_group: GroupId,
    pub name: String,
    pub cpf: Cpf,
}

impl NewPerson {
    pub fn new(id_event: EventId, id_group: GroupId, name: impl Into<String>, cpf: Cpf) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id_event,
            id_group,
            name,
            cpf,
        })
    }
}

/// Partial update of a person. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub cpf: Option<Cpf>,
    pub matched: Option<String>,
}

impl PersonUpdate {
    pub fn apply_to(&self, person: &mut Person) {
        if let Some(name) = &self.name {
            person.name = name.clone();
        }
        if let Some(cpf) = &self.cpf {
            person.cpf = cpf.as_str().to_string();
        }
        if let Some(matched) = &self.matched {
            person.matched = matched.clone();
        }
    }
}

/// Event + group pair every directory operation is scoped by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PersonScope {
    pub id_event: EventId,
    pub id_group: GroupId,
}

impl PersonScope {
    pub fn new(id_event: EventId, id_group: GroupId) -> Self {
        Self { id_event, id_group }
    }
}

/// Single-record lookup. The event is mandatory; every other criterion is
/// optional and all present criteria must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFilter {
    pub id_event: EventId,
    pub id: Option<PersonId>,
    pub id_group: Option<GroupId>,
    pub cpf: Option<String>,
}

impl PersonFilter {
    pub fn in_event(id_event: EventId) -> Self {
        Self {
            id_event,
            id: None,
            id_group: None,
            cpf: None,
        }
    }

    /// Lookup by id inside a full (event, group) scope.
    pub fn scoped(scope: PersonScope, id: PersonId) -> Self {
        Self::in_event(scope.id_event).with_group(scope.id_group).with_id(id)
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_group(mut self, id_group: GroupId) -> Self {
        self.id_group = Some(id_group);
        self
    }

    pub fn with_cpf(mut self, cpf: &Cpf) -> Self {
        self.cpf = Some(cpf.as_str().to_string());
        self
    }

    pub fn matches(&self, person: &Person) -> bool {
        person.id_event == self.id_event
            && self.id.is_none_or(|id| person.id == id)
            && self.id_group.is_none_or(|g| person.id_group == g)
            && self.cpf.as_deref().is_none_or(|cpf| person.cpf == cpf)
    }
}
