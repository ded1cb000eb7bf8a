use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    response::IntoResponse,
    Json,
};

use amigo_core::PersonFilter;

use crate::app::errors::{self, ApiError};
use crate::app::{dto, AppState};

/// Resolve a person by CPF and reveal who they were matched with.
///
/// Only `{id, name}` of either person leaves the server. A missing person, an
/// unmatched person, an unreadable `matched` value and a dangling link all
/// produce the same generic error.
pub async fn search_person(
    Extension(state): Extension<AppState>,
    path: Result<Path<dto::EventPath>, PathRejection>,
    query: Result<Query<dto::SearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(path) = errors::accept(path)?;
    let Query(query) = errors::accept(query)?;
    let cpf = query.cpf();

    let person = state
        .people
        .get_one(&PersonFilter::in_event(path.id_event).with_cpf(&cpf))
        .await?
        .filter(|p| p.is_matched())
        .ok_or(ApiError::OperationFailed)?;

    let matched_id = state.cipher.decrypt_match(&person.matched)?;

    let matched = state
        .people
        .get_one(&PersonFilter::in_event(path.id_event).with_id(matched_id))
        .await?
        .ok_or(ApiError::OperationFailed)?;

    Ok(Json(serde_json::json!({
        "person": person.summary(),
        "personMatched": matched.summary(),
    })))
}
