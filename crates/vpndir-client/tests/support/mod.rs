//! Shared helpers for the integration tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use vpndir_common::error::{CatalogError, Result};
use vpndir_common::fetch::CatalogFetch;

/// Canned-response fetcher: replies from a prefix-matched route table and
/// records every requested URL.
pub struct StaticFetcher {
    routes: Vec<(&'static str, Value)>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new(routes: Vec<(&'static str, Value)>) -> Self {
        Self {
            routes,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogFetch for StaticFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        self.requested.lock().unwrap().push(url.to_string());
        for (prefix, payload) in &self.routes {
            if url.starts_with(prefix) {
                return Ok(payload.clone());
            }
        }
        Err(CatalogError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// A server record pointing its station at the given address.
pub fn server_json(id: u64, load: u8, station: &str, group: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": format!("server #{id}"),
        "hostname": format!("s{id}.example.com"),
        "station": station,
        "load": load,
        "locations": [{
            "id": id,
            "latitude": 52.0 + id as f64,
            "longitude": 4.0,
            "country": { "id": 81, "name": "Germany", "code": "DE" }
        }],
        "groups": [
            { "id": 19, "identifier": group, "title": group }
        ],
        "technologies": [
            { "id": 35, "identifier": "wireguard_udp", "name": "WireGuard" }
        ]
    })
}
