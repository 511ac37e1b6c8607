//! vpndir client
//!
//! Client-side library for querying a VPN provider's server directory:
//! fetch candidate servers, countries, groups and technologies from the
//! remote catalog, compose declarative filters over them, and rank the
//! resulting server list by operationally relevant metrics.
//!
//! # Components
//!
//! - [`filter`] - The [`Filter`] capability contract and [`FilterList`]
//!   conjunction
//! - [`registry`] - Cached lookup tables for the enumerable dimensions
//! - [`server_list`] - [`ServerList`] with load, distance and latency
//!   ranking
//! - [`probe`] - The concurrent [`LatencyProber`]
//! - [`client`] - The [`CatalogClient`] facade tying the above together
//!
//! # Example
//!
//! ```no_run
//! use vpndir_client::{CatalogClient, FilterList, Limit, LatencyProber};
//! use vpndir_common::catalog::Group;
//!
//! # async fn example() -> vpndir_common::Result<()> {
//! let client = CatalogClient::new()?;
//!
//! let filters = FilterList::new()
//!     .with(Group::new(19, "europe", "Europe"))
//!     .with(Limit(20));
//! let mut servers = client.recommendations(&filters).await?;
//!
//! servers.sort_by_latency(&LatencyProber::new(4)).await;
//! let best = servers.first()?;
//! println!("{} ({})", best.hostname, best.load);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod country_list;
pub mod filter;
pub mod probe;
pub mod registry;
pub mod server_list;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use country_list::CountryList;
pub use filter::{Filter, FilterList, Limit, MaxLoad};
pub use probe::LatencyProber;
pub use registry::{Registry, RegistryEntry};
pub use server_list::ServerList;
