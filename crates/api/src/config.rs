//! Process configuration, read from the environment.

use std::env;

use anyhow::Context;

const DEV_PASSWORD: &str = "dev-password";
const DEV_TOKEN_KEY: &str = "dev-token-key";

#[derive(Clone)]
pub struct AppConfig {
    /// HTTP listen port.
    pub port: u16,

    /// The single admin password accepted by `/admin/login`.
    pub admin_password: String,

    /// Key mixed into the derived bearer token.
    pub token_key: String,

    /// Key material for the `matched` cipher; falls back to `token_key`.
    pub match_key: String,

    /// Postgres connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().with_context(|| format!("PORT is not a valid port: {raw}"))?,
            None => 8080,
        };

        let admin_password = lookup("ADMIN_PASSWORD").unwrap_or_else(|| {
            tracing::warn!("ADMIN_PASSWORD not set; using insecure dev default");
            DEV_PASSWORD.to_string()
        });

        let token_key = lookup("TOKEN_KEY").unwrap_or_else(|| {
            tracing::warn!("TOKEN_KEY not set; using insecure dev default");
            DEV_TOKEN_KEY.to_string()
        });

        let match_key = lookup("MATCH_KEY")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| token_key.clone());

        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            admin_password,
            token_key,
            match_key,
            database_url,
        })
    }
}

impl core::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.admin_password, DEV_PASSWORD);
        assert_eq!(config.match_key, config.token_key);
        assert!(config.database_url.is_none());
    }

    #[test]
    fn explicit_values_win() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("ADMIN_PASSWORD", "secret"),
            ("TOKEN_KEY", "tk"),
            ("MATCH_KEY", "mk"),
            ("DATABASE_URL", "postgres://localhost/amigo"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.admin_password, "secret");
        assert_eq!(config.token_key, "tk");
        assert_eq!(config.match_key, "mk");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/amigo"));
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).is_err());
    }

    #[test]
    fn debug_hides_secrets() {
        let config = AppConfig::from_lookup(lookup_from(&[("ADMIN_PASSWORD", "hunter2")])).unwrap();
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
