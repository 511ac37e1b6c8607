use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{CatalogError, Result};
use crate::fetch::CatalogFetch;

/// Default timeout for catalog requests (10 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The production [`CatalogFetch`] implementation.
///
/// Holds one [`reqwest::Client`] for the lifetime of the fetcher so the
/// connection pool persists between calls.
pub struct HttpCatalogFetcher {
    client: reqwest::Client,
}

impl HttpCatalogFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogFetch for HttpCatalogFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
