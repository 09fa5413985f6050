//! Startup configuration read from the process environment

use std::net::SocketAddr;
use thiserror::Error;

pub const SUPABASE_URL: &str = "SUPABASE_URL";
pub const SUPABASE_KEY: &str = "SUPABASE_KEY";
pub const FITLOG_STORE: &str = "FITLOG_STORE";
pub const FITLOG_STRICT_STORE: &str = "FITLOG_STRICT_STORE";
pub const FITLOG_BIND_ADDR: &str = "FITLOG_BIND_ADDR";
pub const FITLOG_CORS_ORIGINS: &str = "FITLOG_CORS_ORIGINS";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("SUPABASE_URL and SUPABASE_KEY must be set when FITLOG_STRICT_STORE is enabled")]
    MissingStoreCredentials,
}

/// Which table store backs the data routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Hosted store over its REST interface
    #[default]
    Rest,
    /// Process-local store, lost on exit
    Memory,
}

/// Origins allowed by the CORS layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<String>),
}

/// Remote store endpoint and credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend: StoreBackend,
    /// `None` when either variable is unset or empty
    pub credentials: Option<StoreCredentials>,
    pub strict_store: bool,
    pub bind_addr: SocketAddr,
    pub cors_origins: CorsOrigins,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend = match get(FITLOG_STORE).as_deref() {
            None | Some("rest") => StoreBackend::Rest,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    var: FITLOG_STORE,
                    value: other.to_string(),
                })
            }
        };

        let strict_store = match get(FITLOG_STRICT_STORE) {
            None => false,
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue {
                var: FITLOG_STRICT_STORE,
                value,
            })?,
        };

        let credentials = match (get(SUPABASE_URL), get(SUPABASE_KEY)) {
            (Some(url), Some(key)) => Some(StoreCredentials { url, key }),
            _ => None,
        };

        if strict_store && backend == StoreBackend::Rest && credentials.is_none() {
            return Err(ConfigError::MissingStoreCredentials);
        }

        let bind_addr = get(FITLOG_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                var: FITLOG_BIND_ADDR,
                value: bind_addr.clone(),
            })?;

        let cors_origins = match get(FITLOG_CORS_ORIGINS) {
            None => CorsOrigins::Any,
            Some(origins) if origins == "*" => CorsOrigins::Any,
            Some(origins) => CorsOrigins::List(
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            ),
        };

        Ok(Self {
            backend,
            credentials,
            strict_store,
            bind_addr,
            cors_origins,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.backend, StoreBackend::Rest);
        assert_eq!(config.credentials, None);
        assert!(!config.strict_store);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8000");
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn test_credentials_need_both_values() {
        let config = config(&[(SUPABASE_URL, "https://db.example.com")]).unwrap();
        assert_eq!(config.credentials, None);

        let config = config_with_both();
        assert_eq!(
            config.credentials,
            Some(StoreCredentials {
                url: "https://db.example.com".to_string(),
                key: "secret".to_string(),
            })
        );
    }

    fn config_with_both() -> Config {
        config(&[
            (SUPABASE_URL, "https://db.example.com"),
            (SUPABASE_KEY, " secret "),
        ])
        .unwrap()
    }

    #[test]
    fn test_strict_mode_requires_credentials() {
        assert_eq!(
            config(&[(FITLOG_STRICT_STORE, "true")]),
            Err(ConfigError::MissingStoreCredentials)
        );
        assert_eq!(
            config(&[(FITLOG_STRICT_STORE, "1"), (SUPABASE_KEY, "")]),
            Err(ConfigError::MissingStoreCredentials)
        );
        // The memory backend never needs credentials
        assert!(config(&[(FITLOG_STRICT_STORE, "true"), (FITLOG_STORE, "memory")]).is_ok());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[(FITLOG_STORE, "sqlite")]),
            Err(ConfigError::InvalidValue { var: FITLOG_STORE, .. })
        ));
        assert!(matches!(
            config(&[(FITLOG_STRICT_STORE, "maybe")]),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config(&[(FITLOG_BIND_ADDR, "localhost")]),
            Err(ConfigError::InvalidValue { var: FITLOG_BIND_ADDR, .. })
        ));
    }

    #[test]
    fn test_cors_origins() {
        let config = config(&[(
            FITLOG_CORS_ORIGINS,
            "http://localhost:5173, https://app.example.com,",
        )])
        .unwrap();
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                "http://localhost:5173".to_string(),
                "https://app.example.com".to_string(),
            ])
        );
    }
}
