//! People directory storage: the data-access layer behind the admin API.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryPeopleStore;
pub use postgres::PostgresPeopleStore;
pub use store::{PeopleStore, StoreError};
