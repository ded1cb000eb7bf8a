//! Shared-secret admin gate.
//!
//! There is exactly one credential: the configured admin password. A
//! successful login yields a token derived from that password and the
//! configured token key, so the token is the same for every login and is
//! never stored. Validation re-derives it and compares.

use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    InvalidToken,
}

/// Gate in front of the admin API.
#[derive(Clone)]
pub struct AdminGate {
    password: String,
    token_key: String,
}

impl AdminGate {
    pub fn new(password: impl Into<String>, token_key: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            token_key: token_key.into(),
        }
    }

    pub fn validate_password(&self, password: &str) -> bool {
        password == self.password
    }

    /// Derive the bearer token for the configured secret.
    ///
    /// Deterministic: hex(SHA-256(token_key ":" password)).
    pub fn issue_token(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.token_key.as_bytes());
        hasher.update(b":");
        hasher.update(self.password.as_bytes());
        hex::encode(hasher.finalize())
    }

    pub fn login(&self, password: &str) -> Result<String, AuthError> {
        if !self.validate_password(password) {
            tracing::warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        tracing::info!("admin login accepted");
        Ok(self.issue_token())
    }

    pub fn validate_token(&self, token: &str) -> Result<(), AuthError> {
        if token.is_empty() || token != self.issue_token() {
            return Err(AuthError::InvalidToken);
        }
        Ok(())
    }
}

impl core::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdminGate")
            .field("password", &"<redacted>")
            .field("token_key", &"<redacted>")
            .finish()
    }
}

/// Take the token out of an `Authorization` header value.
///
/// The token is the second whitespace-delimited segment (`Bearer <token>`).
/// Returns `None` when the header is absent or has no second segment.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    let mut parts = header?.split_whitespace();
    let _scheme = parts.next()?;
    parts.next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AdminGate {
        AdminGate::new("20261016", "token-key")
    }

    #[test]
    fn login_with_configured_password_issues_token() {
        let gate = gate();
        let token = gate.login("20261016").unwrap();
        assert_eq!(token, gate.issue_token());
        assert_eq!(token.len(), 64);
    }

    #[test]
    fn login_with_other_password_is_denied() {
        let gate = gate();
        for attempt in ["", "2026101", "20261016 ", "admin"] {
            assert_eq!(gate.login(attempt), Err(AuthError::InvalidCredentials));
        }
    }

    #[test]
    fn token_is_stable_across_logins() {
        let gate = gate();
        assert_eq!(gate.login("20261016").unwrap(), gate.login("20261016").unwrap());
    }

    #[test]
    fn token_depends_on_token_key() {
        let other = AdminGate::new("20261016", "another-key");
        assert_ne!(gate().issue_token(), other.issue_token());
    }

    #[test]
    fn validate_token_accepts_only_the_issued_token() {
        let gate = gate();
        let token = gate.issue_token();
        assert!(gate.validate_token(&token).is_ok());
        assert_eq!(gate.validate_token(""), Err(AuthError::InvalidToken));
        assert_eq!(gate.validate_token("20261016"), Err(AuthError::InvalidToken));
        assert_eq!(gate.validate_token(&token[1..]), Err(AuthError::InvalidToken));
    }

    #[test]
    fn extract_bearer_takes_second_segment() {
        assert_eq!(extract_bearer(Some("Bearer abc")), Some("abc"));
        assert_eq!(extract_bearer(Some("Bearer   abc  ")), Some("abc"));
        assert_eq!(extract_bearer(Some("Bearer")), None);
        assert_eq!(extract_bearer(Some("")), None);
        assert_eq!(extract_bearer(None), None);
    }

    #[test]
    fn debug_output_hides_secrets() {
        let rendered = format!("{:?}", gate());
        assert!(!rendered.contains("20261016"));
        assert!(!rendered.contains("token-key"));
    }
}
