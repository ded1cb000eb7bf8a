//! Infrastructure layer: people storage adapters.

pub mod people;

pub use people::{InMemoryPeopleStore, PeopleStore, PostgresPeopleStore, StoreError};
