use axum::{response::IntoResponse, Json};

pub async fn ping() -> impl IntoResponse {
    Json(serde_json::json!({ "pong": true }))
}

/// Reachable only with a valid admin token; lets clients check a stored token.
pub async fn admin_ping() -> impl IntoResponse {
    Json(serde_json::json!({ "pong": true, "admin": true }))
}
