//! The fetched server catalog and its ranking pipeline.
//!
//! A [`ServerList`] keeps response order until a ranking operation reorders
//! it in place. All three rankings (load, distance, latency) share one
//! primitive: the metric for every server is computed exactly once into a
//! parallel array, an index permutation is stable-sorted by that metric,
//! and the permutation is applied to the server vector in a single pass.
//! Metric functions never run inside the comparator; for floating-point
//! metrics that is a correctness requirement, not just a fast path.
//!
//! Lists are single-owner values: ranking mutates in place and there is no
//! internal locking.

use std::cmp::Ordering;
use std::time::Duration;

use vpndir_common::catalog::{Coordinates, Server};
use vpndir_common::error::{CatalogError, Result};

use crate::filter::Filter;
use crate::probe::LatencyProber;

#[derive(Debug, Clone, Default)]
pub struct ServerList {
    servers: Vec<Server>,
}

impl ServerList {
    pub fn new(servers: Vec<Server>) -> Self {
        Self { servers }
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Server> {
        self.servers.iter()
    }

    pub fn as_slice(&self) -> &[Server] {
        &self.servers
    }

    pub fn into_vec(self) -> Vec<Server> {
        self.servers
    }

    /// The first server, or [`CatalogError::ServerNotFound`] when the list
    /// is empty (the "empty recommendation result" control-flow case).
    pub fn first(&self) -> Result<&Server> {
        self.servers.first().ok_or(CatalogError::ServerNotFound)
    }

    /// New list holding only the servers the filter matches. Order is
    /// preserved and the source list is untouched; no network access.
    pub fn filter(&self, filter: &dyn Filter) -> ServerList {
        ServerList {
            servers: self
                .servers
                .iter()
                .filter(|server| filter.matches(server))
                .cloned()
                .collect(),
        }
    }

    /// The server with the given hostname.
    pub fn hostname(&self, hostname: &str) -> Result<&Server> {
        self.servers
            .iter()
            .find(|server| server.hostname == hostname)
            .ok_or(CatalogError::ServerNotFound)
    }

    /// The server with the given catalog ID.
    pub fn by_id(&self, id: u64) -> Result<&Server> {
        self.servers
            .iter()
            .find(|server| server.id == id)
            .ok_or(CatalogError::ServerNotFound)
    }

    /// Stable ascending sort by reported load; ties keep response order.
    pub fn sort_by_load(&mut self) {
        let metrics: Vec<u8> = self.servers.iter().map(|server| server.load).collect();
        self.rank_by(&metrics, |a, b| a.cmp(b));
    }

    /// Stable ascending sort by great-circle angular distance from
    /// `origin`. Servers without a reported location rank last.
    pub fn sort_by_distance(&mut self, origin: Coordinates) {
        let metrics: Vec<f64> = self
            .servers
            .iter()
            .map(|server| {
                server
                    .coordinates()
                    .map_or(f64::INFINITY, |coordinates| origin.central_angle(&coordinates))
            })
            .collect();
        self.rank_by(&metrics, |a, b| f64::total_cmp(a, b));
    }

    /// Probes every server concurrently, waits for all probes, then
    /// stable-sorts ascending by mean round-trip time with unreachable
    /// servers (`None`) after every reachable one.
    ///
    /// Returns the measured metrics permuted alongside the list, so
    /// `returned[i]` is the latency of the server now at position `i`.
    pub async fn sort_by_latency(&mut self, prober: &LatencyProber) -> Vec<Option<Duration>> {
        let metrics = prober.measure_all(&self.servers).await;
        let order = self.rank_by(&metrics, cmp_latency);
        order.iter().map(|&index| metrics[index]).collect()
    }

    /// Shared ranking primitive: stable-sorts an index permutation by the
    /// precomputed metric array, then applies it to the server vector once.
    /// Returns the permutation so callers can reorder auxiliary arrays in
    /// lock-step.
    fn rank_by<M>(&mut self, metrics: &[M], cmp: impl Fn(&M, &M) -> Ordering) -> Vec<usize> {
        debug_assert_eq!(metrics.len(), self.servers.len());

        let mut order: Vec<usize> = (0..self.servers.len()).collect();
        order.sort_by(|&a, &b| cmp(&metrics[a], &metrics[b]));

        let mut slots: Vec<Option<Server>> = self.servers.drain(..).map(Some).collect();
        self.servers = order
            .iter()
            .map(|&index| slots[index].take().expect("index appears once per permutation"))
            .collect();
        order
    }
}

impl From<Vec<Server>> for ServerList {
    fn from(servers: Vec<Server>) -> Self {
        ServerList::new(servers)
    }
}

/// Orders measured latencies ascending with the unreachable sentinel
/// (`None`) after every real measurement.
fn cmp_latency(a: &Option<Duration>, b: &Option<Duration>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
