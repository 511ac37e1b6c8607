use serde::Deserialize;

use crate::catalog::Coordinates;

/// A country in which the provider operates servers.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub id: u64,
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub cities: Vec<City>,
}

/// A city with at least one server.
#[derive(Debug, Clone, Deserialize)]
pub struct City {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub dns_name: String,
    #[serde(flatten)]
    pub coordinates: Coordinates,
}
