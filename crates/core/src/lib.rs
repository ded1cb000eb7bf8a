//! `amigo-core` — people directory domain building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod cpf;
pub mod error;
pub mod id;
pub mod person;

pub use cpf::{normalize_cpf, Cpf};
pub use error::{DomainError, DomainResult};
pub use id::{EventId, GroupId, PersonId};
pub use person::{NewPerson, Person, PersonFilter, PersonScope, PersonSummary, PersonUpdate};
