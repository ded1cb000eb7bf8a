use axum::{
    routing::{get, post},
    Router,
};

pub mod auth;
pub mod people;
pub mod search;
pub mod system;

/// Routes reachable without a token.
pub fn public_router() -> Router {
    Router::new()
        .route("/ping", get(system::ping))
        .route("/admin/login", post(auth::login))
        .route("/events/:id_event/search", get(search::search_person))
}

/// Routes behind the admin gate.
pub fn admin_router() -> Router {
    Router::new()
        .route("/admin/ping", get(system::admin_ping))
        .route(
            "/admin/events/:id_event/groups/:id_group/people",
            get(people::get_all).post(people::add_person),
        )
        .route(
            "/admin/events/:id_event/groups/:id_group/people/:id",
            get(people::get_person)
                .put(people::update_person)
                .delete(people::delete_person),
        )
}
