//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `state.rs`: shared handles (people store, admin gate, match cipher)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and their validation
//! - `errors.rs`: the three wire-level error outcomes

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use amigo_auth::{AdminGate, MatchCipher};
use amigo_infra::{InMemoryPeopleStore, PeopleStore, PostgresPeopleStore};

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod state;

pub use state::AppState;

/// Build the full HTTP router from process configuration (entrypoint used by `main.rs`).
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let people: Arc<dyn PeopleStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("using postgres people store");
            Arc::new(PostgresPeopleStore::connect(url).await?)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory people store");
            Arc::new(InMemoryPeopleStore::new())
        }
    };

    let state = AppState {
        people,
        gate: Arc::new(AdminGate::new(config.admin_password.clone(), config.token_key.clone())),
        cipher: Arc::new(MatchCipher::from_key_material(&config.match_key)),
    };

    Ok(build_router(state))
}

/// Build the router around already-wired state.
pub fn build_router(state: AppState) -> Router {
    // Admin routes: require the bearer token.
    let protected = routes::admin_router().layer(axum::middleware::from_fn_with_state(
        state.gate.clone(),
        middleware::admin_auth,
    ));

    Router::new()
        .merge(routes::public_router())
        .merge(protected)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(Extension(state)),
        )
}
