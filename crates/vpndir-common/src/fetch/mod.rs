//! The fetch seam between the client and the remote catalog.
//!
//! Everything network-shaped goes through [`CatalogFetch`]: one HTTP GET,
//! decoded as JSON. The trait exists so the rest of the library can be
//! exercised against a canned fetcher in tests; production code uses
//! [`HttpCatalogFetcher`].

pub mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CatalogError, Result};

pub use http::HttpCatalogFetcher;

/// Boundary collaborator for the remote catalog service.
///
/// Contract: perform one GET of `url`, surface any non-2xx status as
/// [`CatalogError::Status`], and decode the body as JSON, surfacing decode
/// failures as [`CatalogError::Decode`] so callers can tell "service
/// unreachable" apart from "service returned malformed data".
/// Implementations never retry.
#[async_trait]
pub trait CatalogFetch: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Fetches `url` and decodes the payload into the caller's shape.
///
/// A payload that is valid JSON but does not match `T` is a
/// [`CatalogError::Decode`], same as an undecodable body.
pub async fn fetch_as<T: DeserializeOwned>(fetcher: &dyn CatalogFetch, url: &str) -> Result<T> {
    let value = fetcher.fetch_json(url).await?;
    serde_json::from_value(value).map_err(|source| CatalogError::Decode {
        url: url.to_string(),
        source,
    })
}
