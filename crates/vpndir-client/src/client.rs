//! The catalog client facade.

use std::sync::Arc;

use tracing::debug;

use vpndir_common::catalog::{Country, Group, Server, Technology};
use vpndir_common::error::Result;
use vpndir_common::fetch::{fetch_as, CatalogFetch, HttpCatalogFetcher};

use crate::country_list::CountryList;
use crate::filter::Filter;
use crate::registry::Registry;
use crate::server_list::ServerList;

/// Default base URL of the public catalog service.
pub const DEFAULT_BASE_URL: &str = "https://api.nordvpn.com/v1";

/// Client for the remote server directory.
///
/// Owns the fetch handle and one registry cache per enumerable dimension.
/// The registries are explicit members rather than process globals, so two
/// clients never share (or corrupt) each other's caches, and tests can run
/// against a canned fetcher.
pub struct CatalogClient {
    fetcher: Arc<dyn CatalogFetch>,
    base_url: String,
    groups: Registry<Group>,
    technologies: Registry<Technology>,
}

impl CatalogClient {
    /// Client against the default catalog endpoint over HTTP.
    pub fn new() -> Result<Self> {
        Ok(Self::with_fetcher(
            Arc::new(HttpCatalogFetcher::new()?),
            DEFAULT_BASE_URL,
        ))
    }

    /// Client with an injected fetcher, for tests and alternate deployments.
    pub fn with_fetcher(fetcher: Arc<dyn CatalogFetch>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            groups: Registry::new(&base_url, Group::well_known()),
            technologies: Registry::new(&base_url, Technology::well_known()),
            fetcher,
            base_url,
        }
    }

    /// The complete server catalog. This is a large response; prefer
    /// [`recommendations`](Self::recommendations) with a [`Limit`] filter
    /// when only a handful of candidates is needed.
    ///
    /// [`Limit`]: crate::filter::Limit
    pub async fn servers(&self) -> Result<ServerList> {
        let url = format!("{}/servers", self.base_url);
        let servers: Vec<Server> = fetch_as(self.fetcher.as_ref(), &url).await?;
        Ok(ServerList::new(servers))
    }

    /// Servers the service itself ranks as the best match for `filter`.
    ///
    /// The filter's query fragment becomes the request's query string; an
    /// empty fragment means no `?` suffix at all.
    pub async fn recommendations(&self, filter: &dyn Filter) -> Result<ServerList> {
        let mut url = format!("{}/servers/recommendations", self.base_url);
        let fragment = filter.query_fragment();
        if !fragment.is_empty() {
            url.push('?');
            url.push_str(&fragment);
        }
        debug!(%url, filter = %filter.label(), "fetching recommendations");

        let servers: Vec<Server> = fetch_as(self.fetcher.as_ref(), &url).await?;
        Ok(ServerList::new(servers))
    }

    /// Every country the provider has servers in.
    pub async fn countries(&self) -> Result<CountryList> {
        let url = format!("{}/servers/countries", self.base_url);
        let countries: Vec<Country> = fetch_as(self.fetcher.as_ref(), &url).await?;
        Ok(CountryList::new(countries))
    }

    /// Fresh enumeration of server groups (merged into the cache).
    pub async fn groups(&self) -> Result<Vec<Group>> {
        self.groups.list_all(self.fetcher.as_ref()).await
    }

    /// Fresh enumeration of technologies (merged into the cache).
    pub async fn technologies(&self) -> Result<Vec<Technology>> {
        self.technologies.list_all(self.fetcher.as_ref()).await
    }

    /// Group lookup by stable identifier, cached.
    pub async fn group(&self, identifier: &str) -> Result<Group> {
        self.groups.lookup(self.fetcher.as_ref(), identifier).await
    }

    /// Technology lookup by stable identifier, cached.
    pub async fn technology(&self, identifier: &str) -> Result<Technology> {
        self.technologies
            .lookup(self.fetcher.as_ref(), identifier)
            .await
    }

    /// The catalog record for one hostname.
    pub async fn server_by_hostname(&self, hostname: &str) -> Result<Server> {
        let servers = self.servers().await?;
        Ok(servers.hostname(hostname)?.clone())
    }
}
