//! Registry caches for the enumerable catalog dimensions.
//!
//! Groups and technologies are small, append-only enumerations whose stable
//! identifiers never change server-side. A [`Registry`] is an explicit
//! cache handle for one such dimension: seeded with the well-known entries
//! at construction, grown by merging remote enumerations on miss, and never
//! torn down.
//!
//! # Concurrency
//!
//! One mutex covers both the read scan and the merge write, so readers
//! never observe a partially merged set and duplicate identifiers never
//! appear. The lock is released around the network fetch; two lookups
//! racing on unknown identifiers may both fetch, which is tolerated because
//! the merge is idempotent. Fetches are deliberately not serialized across
//! identifiers; one slow enumeration must not block unrelated lookups.

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use tracing::debug;

use vpndir_common::catalog::{Group, Technology};
use vpndir_common::error::{CatalogError, Result};
use vpndir_common::fetch::{fetch_as, CatalogFetch};

/// An entry type cacheable by a [`Registry`].
pub trait RegistryEntry: Clone {
    /// Dimension name used in lookup errors and diagnostics.
    const DIMENSION: &'static str;
    /// Path of the full enumeration below the catalog base URL.
    const ENDPOINT: &'static str;

    fn identifier(&self) -> &str;
}

impl RegistryEntry for Group {
    const DIMENSION: &'static str = "group";
    const ENDPOINT: &'static str = "/servers/groups";

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl RegistryEntry for Technology {
    const DIMENSION: &'static str = "technology";
    const ENDPOINT: &'static str = "/servers/technologies";

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Lazily populated, deduplicating cache for one enumerable dimension.
pub struct Registry<T> {
    url: String,
    entries: Mutex<Vec<T>>,
}

impl<T: RegistryEntry + DeserializeOwned> Registry<T> {
    /// Creates a registry for the dimension's enumeration under `base_url`,
    /// seeded with `seed`. Seeded entries are never evicted or updated.
    pub fn new(base_url: &str, seed: Vec<T>) -> Self {
        Self {
            url: format!("{}{}", base_url, T::ENDPOINT),
            entries: Mutex::new(seed),
        }
    }

    /// Looks up an entry by its stable identifier.
    ///
    /// The fast path is a lock-scan-return with no I/O. On miss the full
    /// remote enumeration is fetched (the protocol has no point lookup) and
    /// merged into the cache; an identifier still absent after the merge is
    /// [`CatalogError::UnknownIdentifier`].
    pub async fn lookup(&self, fetcher: &dyn CatalogFetch, identifier: &str) -> Result<T> {
        if let Some(entry) = self.find(identifier) {
            return Ok(entry);
        }

        debug!(
            dimension = T::DIMENSION,
            identifier, "cache miss, fetching enumeration"
        );
        let fetched: Vec<T> = fetch_as(fetcher, &self.url).await?;
        self.merge(&fetched);

        self.find(identifier)
            .ok_or_else(|| CatalogError::UnknownIdentifier {
                dimension: T::DIMENSION,
                identifier: identifier.to_string(),
            })
    }

    /// Fetches the current remote enumeration, merges it into the cache and
    /// returns the freshly fetched set, not the merged cache. Callers who
    /// want "the known set so far" use [`lookup`](Self::lookup) semantics.
    pub async fn list_all(&self, fetcher: &dyn CatalogFetch) -> Result<Vec<T>> {
        let fetched: Vec<T> = fetch_as(fetcher, &self.url).await?;
        self.merge(&fetched);
        Ok(fetched)
    }

    /// Snapshot of everything cached so far, seed and learned entries alike.
    pub fn known(&self) -> Vec<T> {
        self.entries.lock().unwrap().clone()
    }

    fn find(&self, identifier: &str) -> Option<T> {
        let entries = self.entries.lock().unwrap();
        entries
            .iter()
            .find(|entry| entry.identifier() == identifier)
            .cloned()
    }

    fn merge(&self, fetched: &[T]) {
        let mut entries = self.entries.lock().unwrap();
        for entry in fetched {
            if entries
                .iter()
                .any(|existing| existing.identifier() == entry.identifier())
            {
                continue;
            }
            entries.push(entry.clone());
        }
    }
}
