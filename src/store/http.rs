//! HTTP implementation of the remote table store.
//!
//! Talks JSON to a spreadsheet-backed HTTP service:
//!
//! - `GET  {base_url}/tables/{worksheet}` -> `{"values": [[..], ..]}`
//! - `PUT  {base_url}/tables/{worksheet}` <- `{"values": [[..], ..]}`
//!
//! The first row of `values` is the header row. Requests carry a bearer
//! token when an API key is configured, and every request is bounded by the
//! configured timeout so a save fails instead of hanging.

use serde::{Deserialize, Serialize};

use super::{StoreError, TableStore};
use crate::config::StoreConfig;
use crate::models::{Grid, TableKind};

#[derive(Debug, Serialize, Deserialize)]
struct ValuesPayload {
    values: Grid,
}

/// Remote table store client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTableStore {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    timeout_secs: u64,
}

impl HttpTableStore {
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn table_url(&self, kind: TableKind) -> String {
        format!("{}/tables/{}", self.base_url, kind.worksheet())
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> StoreError {
        if e.is_timeout() {
            StoreError::Timeout(self.timeout_secs)
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

impl TableStore for HttpTableStore {
    async fn read(&self, kind: TableKind) -> Result<Grid, StoreError> {
        let url = self.table_url(kind);
        tracing::debug!("GET {}", url);

        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        let payload: ValuesPayload = response
            .json()
            .await
            .map_err(|e| StoreError::Payload(e.to_string()))?;

        Ok(payload.values)
    }

    async fn write(&self, kind: TableKind, grid: Grid) -> Result<(), StoreError> {
        let url = self.table_url(kind);
        tracing::debug!("PUT {} ({} rows)", url, grid.len().saturating_sub(1));

        let response = self
            .authorize(self.client.put(&url))
            .json(&ValuesPayload { values: grid })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(StoreError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
