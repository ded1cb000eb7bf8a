use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    response::IntoResponse,
    Json,
};

use amigo_core::PersonFilter;

use crate::app::errors::{self, ApiError};
use crate::app::{dto, AppState};

pub async fn get_all(
    Extension(state): Extension<AppState>,
    path: Result<Path<dto::GroupPath>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(path) = errors::accept(path)?;
    let people = state.people.get_all(path.scope()).await?;
    Ok(Json(serde_json::json!({ "people": people })))
}

pub async fn get_person(
    Extension(state): Extension<AppState>,
    path: Result<Path<dto::PersonPath>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(path) = errors::accept(path)?;
    let person = state
        .people
        .get_one(&PersonFilter::scoped(path.scope(), path.id))
        .await?
        .ok_or(ApiError::OperationFailed)?;
    Ok(Json(serde_json::json!({ "person": person })))
}

pub async fn add_person(
    Extension(state): Extension<AppState>,
    path: Result<Path<dto::GroupPath>, PathRejection>,
    body: Result<Json<dto::AddPersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(path) = errors::accept(path)?;
    let Json(body) = errors::accept(body)?;
    let new_person = body.into_new_person(path.scope())?;

    let person = state.people.add(new_person).await?;
    tracing::info!(id = %person.id, id_event = %person.id_event, id_group = %person.id_group, "person added");
    Ok(Json(serde_json::json!({ "person": person })))
}

/// Apply a partial update, then answer with the record as re-read by (event, id).
///
/// The re-read does not filter by group.
pub async fn update_person(
    Extension(state): Extension<AppState>,
    path: Result<Path<dto::PersonPath>, PathRejection>,
    body: Result<Json<dto::UpdatePersonRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(path) = errors::accept(path)?;
    let Json(body) = errors::accept(body)?;
    let update = body.into_update();

    state
        .people
        .update(path.scope(), path.id, &update)
        .await?
        .ok_or(ApiError::OperationFailed)?;

    let person = state
        .people
        .get_one(&PersonFilter::in_event(path.id_event).with_id(path.id))
        .await?
        .ok_or(ApiError::OperationFailed)?;
    tracing::info!(id = %person.id, id_event = %person.id_event, "person updated");
    Ok(Json(serde_json::json!({ "person": person })))
}

pub async fn delete_person(
    Extension(state): Extension<AppState>,
    path: Result<Path<dto::PersonPath>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(path) = errors::accept(path)?;
    let person = state
        .people
        .remove(path.scope(), path.id)
        .await?
        .ok_or(ApiError::OperationFailed)?;
    tracing::info!(id = %person.id, id_event = %person.id_event, "person removed");
    Ok(Json(serde_json::json!({ "person": person })))
}
