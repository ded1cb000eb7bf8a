//! Error responses.
//!
//! The wire format has three outcomes, each a `{"error": <message>}` body:
//! invalid input and operation failures are sent with 200, access denied
//! with 403. Clients of the existing API depend on those status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use amigo_auth::{AuthError, CipherError};
use amigo_core::DomainError;
use amigo_infra::StoreError;

pub const INVALID_INPUT: &str = "Dados inválidos";
pub const ACCESS_DENIED: &str = "Acesso Negado";
pub const OPERATION_FAILED: &str = "Ocorreu um erro";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("invalid input")]
    InvalidInput,

    #[error("access denied")]
    AccessDenied,

    #[error("operation failed")]
    OperationFailed,
}

impl ApiError {
    pub fn status(self) -> StatusCode {
        match self {
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::InvalidInput | ApiError::OperationFailed => StatusCode::OK,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ApiError::InvalidInput => INVALID_INPUT,
            ApiError::AccessDenied => ACCESS_DENIED,
            ApiError::OperationFailed => OPERATION_FAILED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(_) | DomainError::InvalidId(_) => ApiError::InvalidInput,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::AccessDenied
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "people store failed");
        ApiError::OperationFailed
    }
}

impl From<CipherError> for ApiError {
    fn from(err: CipherError) -> Self {
        tracing::warn!(error = %err, "matched reference could not be opened");
        ApiError::OperationFailed
    }
}

/// Map an extractor rejection (bad JSON, bad path segment, missing query) to
/// the invalid-input outcome.
pub fn accept<T, E: core::fmt::Display>(extracted: Result<T, E>) -> Result<T, ApiError> {
    extracted.map_err(|rejection| {
        tracing::debug!(%rejection, "request rejected by validation");
        ApiError::InvalidInput
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_access_denied_changes_status() {
        assert_eq!(ApiError::AccessDenied.status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::InvalidInput.status(), StatusCode::OK);
        assert_eq!(ApiError::OperationFailed.status(), StatusCode::OK);
    }

    #[test]
    fn domain_errors_map_to_coarse_outcomes() {
        assert_eq!(ApiError::from(DomainError::validation("x")), ApiError::InvalidInput);
        assert_eq!(ApiError::from(DomainError::invalid_id("x")), ApiError::InvalidInput);
        assert_eq!(ApiError::from(AuthError::InvalidToken), ApiError::AccessDenied);
        assert_eq!(ApiError::from(CipherError::DecryptionFailed), ApiError::OperationFailed);
    }
}
