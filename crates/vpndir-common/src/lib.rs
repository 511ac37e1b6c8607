//! vpndir common types and fetch seam
//!
//! This crate provides the catalog record types, the error taxonomy and the
//! HTTP fetch boundary for the vpndir client library.
//!
//! # Overview
//!
//! vpndir is a client-side library for querying a VPN provider's server
//! directory. This crate contains the shared pieces the client crate builds
//! on:
//!
//! - **Catalog layer**: decoded record types for servers, countries, groups
//!   and technologies
//! - **Fetch layer**: the [`CatalogFetch`] trait and its reqwest-backed
//!   implementation
//!
//! # Components
//!
//! - [`catalog`] - Decoded catalog record types
//! - [`fetch`] - The fetch seam ([`CatalogFetch`], [`HttpCatalogFetcher`])
//! - [`error`] - [`CatalogError`] and the crate-wide [`Result`] alias
//!
//! # Example
//!
//! ```no_run
//! use vpndir_common::fetch::{fetch_as, HttpCatalogFetcher};
//! use vpndir_common::catalog::Country;
//!
//! # async fn example() -> vpndir_common::Result<()> {
//! let fetcher = HttpCatalogFetcher::new()?;
//! let countries: Vec<Country> =
//!     fetch_as(&fetcher, "https://api.nordvpn.com/v1/servers/countries").await?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod fetch;

pub use error::{CatalogError, Result};
pub use fetch::{CatalogFetch, HttpCatalogFetcher};
