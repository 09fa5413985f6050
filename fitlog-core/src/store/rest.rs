use super::{Table, TableStore};
use crate::error::{StoreError, StoreResult};
use crate::types::Row;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

/// Client for the hosted store's PostgREST interface
///
/// Every call is a single request: no retries, no timeouts beyond reqwest's.
#[derive(Debug, Clone)]
pub struct RestStore {
    http: Client,
    base_url: String,
    api_key: String,
}

/// Error body returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl RestStore {
    /// Build a client for the store at `base_url`, authenticating with `api_key`
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> StoreResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let api_key = api_key.into().trim().to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(StoreError::InvalidConfig(format!(
                "store URL must be http(s), got '{}'",
                base_url
            )));
        }
        if api_key.is_empty() {
            return Err(StoreError::InvalidConfig("empty access key".to_string()));
        }

        let http = Client::builder()
            .user_agent(concat!("fitlog/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
        })
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.as_str())
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Turn a response into rows, or into an upstream error for non-2xx
    async fn read_rows(response: Response) -> StoreResult<Vec<Row>> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StoreError::Upstream {
                status: status.as_u16(),
                message: error_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
            });
        }

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
    }
}

/// Pick the most useful text out of an error body
fn error_message(body: &str) -> Option<String> {
    if let Ok(err) = serde_json::from_str::<PostgrestError>(body) {
        if let Some(text) = err.message.or(err.details).or(err.hint) {
            return Some(text);
        }
    }

    let body = body.trim();
    (!body.is_empty()).then(|| body.to_string())
}

#[async_trait]
impl TableStore for RestStore {
    async fn insert(&self, table: Table, row: Row) -> StoreResult<Vec<Row>> {
        tracing::debug!(%table, "inserting row");
        let response = self
            .authorized(self.http.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await?;
        Self::read_rows(response).await
    }

    async fn select_all(&self, table: Table) -> StoreResult<Vec<Row>> {
        tracing::debug!(%table, "selecting all rows");
        let response = self
            .authorized(self.http.get(self.table_url(table)))
            .query(&[("select", "*")])
            .send()
            .await?;
        Self::read_rows(response).await
    }
}
