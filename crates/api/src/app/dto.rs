use serde::Deserialize;

use amigo_core::{Cpf, DomainResult, EventId, GroupId, NewPerson, PersonId, PersonScope, PersonUpdate};

// -------------------------
// Path parameters
// -------------------------

#[derive(Debug, Deserialize)]
pub struct EventPath {
    pub id_event: EventId,
}

#[derive(Debug, Deserialize)]
pub struct GroupPath {
    pub id_event: EventId,
    pub id_group: GroupId,
}

impl GroupPath {
    pub fn scope(&self) -> PersonScope {
        PersonScope::new(self.id_event, self.id_group)
    }
}

#[derive(Debug, Deserialize)]
pub struct PersonPath {
    pub id_event: EventId,
    pub id_group: GroupId,
    pub id: PersonId,
}

impl PersonPath {
    pub fn scope(&self) -> PersonScope {
        PersonScope::new(self.id_event, self.id_group)
    }
}

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AddPersonRequest {
    pub name: String,
    pub cpf: String,
}

impl AddPersonRequest {
    pub fn into_new_person(self, scope: PersonScope) -> DomainResult<NewPerson> {
        let cpf = Cpf::parse(&self.cpf)?;
        NewPerson::new(scope.id_event, scope.id_group, self.name, cpf)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub matched: Option<String>,
}

impl UpdatePersonRequest {
    /// Every field is optional and any string is accepted; a supplied CPF is
    /// normalized, even when that leaves it empty.
    pub fn into_update(self) -> PersonUpdate {
        PersonUpdate {
            name: self.name,
            cpf: self.cpf.as_deref().map(Cpf::normalize),
            matched: self.matched,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub cpf: String,
}

impl SearchQuery {
    pub fn cpf(&self) -> Cpf {
        Cpf::normalize(&self.cpf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_request_normalizes_cpf() {
        let req: AddPersonRequest =
            serde_json::from_str(r#"{"name":"Ana","cpf":"123.456.789-00"}"#).unwrap();
        let scope = PersonScope::new(EventId::new(1), GroupId::new(2));
        let person = req.into_new_person(scope).unwrap();
        assert_eq!(person.cpf.as_str(), "12345678900");
        assert_eq!(person.id_group, GroupId::new(2));
    }

    #[test]
    fn add_request_requires_string_fields() {
        assert!(serde_json::from_str::<AddPersonRequest>(r#"{"name":"Ana"}"#).is_err());
        assert!(serde_json::from_str::<AddPersonRequest>(r#"{"name":"Ana","cpf":123}"#).is_err());
    }

    #[test]
    fn empty_update_request_is_an_empty_update() {
        let req: UpdatePersonRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.into_update(), PersonUpdate::default());
    }

    #[test]
    fn update_request_keeps_cpf_that_normalizes_to_empty() {
        let req = UpdatePersonRequest {
            cpf: Some("-.-".to_string()),
            ..UpdatePersonRequest::default()
        };
        let update = req.into_update();
        assert_eq!(update.cpf.as_ref().map(|c| c.as_str()), Some(""));
    }

    #[test]
    fn search_query_normalizes_without_rejecting() {
        let query: SearchQuery = serde_json::from_str(r#"{"cpf":""}"#).unwrap();
        assert_eq!(query.cpf().as_str(), "");
        let query: SearchQuery = serde_json::from_str(r#"{"cpf":"111.111.111-11"}"#).unwrap();
        assert_eq!(query.cpf().as_str(), "11111111111");
    }

    #[test]
    fn login_request_requires_string_password() {
        assert!(serde_json::from_str::<LoginRequest>(r#"{}"#).is_err());
        assert!(serde_json::from_str::<LoginRequest>(r#"{"password":1234}"#).is_err());
        assert!(serde_json::from_str::<LoginRequest>(r#"{"password":""}"#).is_ok());
    }
}
