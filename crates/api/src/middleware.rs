use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use amigo_auth::{extract_bearer, AdminGate};

use crate::app::errors::ApiError;

/// Refuse the request unless it carries the admin bearer token.
///
/// On failure nothing downstream runs and the body is never read.
pub async fn admin_auth(
    State(gate): State<Arc<AdminGate>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .map(|v| v.to_str().map_err(|_| ApiError::AccessDenied))
        .transpose()?;

    let token = extract_bearer(header).ok_or(ApiError::AccessDenied)?;
    gate.validate_token(token)?;

    Ok(next.run(req).await)
}

/// Tag every request and response with an `x-request-id`.
pub async fn request_id(req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();

    let span = tracing::info_span!("request", request_id = %id, method = %req.method(), path = %req.uri().path());
    let mut resp = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        resp.headers_mut().insert("x-request-id", value);
    }
    resp
}
