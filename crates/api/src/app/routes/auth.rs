use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    Json,
};

use crate::app::errors::{self, ApiError};
use crate::app::{dto, AppState};

/// Exchange the admin password for the bearer token.
pub async fn login(
    Extension(state): Extension<AppState>,
    body: Result<Json<dto::LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = errors::accept(body)?;
    let token = state.gate.login(&body.password)?;
    Ok(Json(serde_json::json!({ "token": token })))
}
