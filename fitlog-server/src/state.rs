//! Application state

use crate::config::{Config, StoreBackend};
use crate::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};
use fitlog_core::{MemoryStore, RestStore, StoreResult, TableStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Table store, or the reason there is none
    pub store: StoreHandle,
}

/// Outcome of initializing the table store
#[derive(Clone)]
pub enum StoreHandle {
    Ready(Arc<dyn TableStore>),
    /// Credentials were not configured; data routes fail without a remote call
    Unavailable,
}

impl AppState {
    /// Create application state from startup configuration
    pub fn new(config: &Config) -> StoreResult<Self> {
        let store = match (config.backend, &config.credentials) {
            (StoreBackend::Memory, _) => {
                tracing::warn!("Using in-memory store; data is lost on exit");
                StoreHandle::Ready(Arc::new(MemoryStore::new()))
            }
            (StoreBackend::Rest, Some(credentials)) => {
                let store = RestStore::new(&credentials.url, &credentials.key)?;
                tracing::info!("Using remote store at {}", store.base_url());
                StoreHandle::Ready(Arc::new(store))
            }
            (StoreBackend::Rest, None) => {
                tracing::warn!("Store credentials missing; data routes will return 500");
                StoreHandle::Unavailable
            }
        };

        Ok(Self { store })
    }

    /// State backed by the given store
    pub fn with_store(store: Arc<dyn TableStore>) -> Self {
        Self {
            store: StoreHandle::Ready(store),
        }
    }

    /// State with no store configured
    pub fn unavailable() -> Self {
        Self {
            store: StoreHandle::Unavailable,
        }
    }
}

/// Extractor guarding every data route: yields the ready store or rejects
pub struct Store(pub Arc<dyn TableStore>);

#[axum::async_trait]
impl FromRequestParts<AppState> for Store {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match &state.store {
            StoreHandle::Ready(store) => Ok(Store(Arc::clone(store))),
            StoreHandle::Unavailable => Err(ApiError::StoreUnavailable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CorsOrigins, StoreCredentials};

    fn config(backend: StoreBackend, credentials: Option<StoreCredentials>) -> Config {
        Config {
            backend,
            credentials,
            strict_store: false,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            cors_origins: CorsOrigins::Any,
        }
    }

    #[test]
    fn test_missing_credentials_is_unavailable() {
        let state = AppState::new(&config(StoreBackend::Rest, None)).unwrap();
        assert!(matches!(state.store, StoreHandle::Unavailable));
    }

    #[test]
    fn test_memory_backend_is_ready() {
        let state = AppState::new(&config(StoreBackend::Memory, None)).unwrap();
        assert!(matches!(state.store, StoreHandle::Ready(_)));
    }

    #[test]
    fn test_bad_store_url_is_fatal() {
        let credentials = StoreCredentials {
            url: "not a url".to_string(),
            key: "secret".to_string(),
        };
        assert!(AppState::new(&config(StoreBackend::Rest, Some(credentials))).is_err());
    }
}
