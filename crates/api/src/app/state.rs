use std::sync::Arc;

use amigo_auth::{AdminGate, MatchCipher};
use amigo_infra::PeopleStore;

/// Per-process handles shared by every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PeopleStore>,
    pub gate: Arc<AdminGate>,
    pub cipher: Arc<MatchCipher>,
}
