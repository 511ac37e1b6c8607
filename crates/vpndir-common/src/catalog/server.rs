use serde::Deserialize;

use crate::catalog::Country;

/// A single server record from the remote catalog.
///
/// Servers are immutable once fetched; all ranking and filtering happens on
/// the list that owns them. The `station` field is the reachability address
/// clients actually connect to, as opposed to `hostname` which is the
/// catalog-facing DNS name.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub id: u64,
    pub name: String,
    pub hostname: String,
    pub station: String,
    pub load: u8,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub groups: Vec<ServerGroup>,
    #[serde(default)]
    pub technologies: Vec<ServerTechnology>,
}

impl Server {
    /// The country of the server's first location, if the catalog reported one.
    pub fn country(&self) -> Option<&Country> {
        self.locations.first().map(|location| &location.country)
    }

    /// The coordinate of the server's first location.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.locations.first().map(|location| location.coordinates)
    }

    /// Whether the server belongs to the group with the given identifier.
    pub fn supports_group(&self, identifier: &str) -> bool {
        self.groups.iter().any(|group| group.identifier == identifier)
    }

    /// Whether the server supports the technology with the given identifier.
    pub fn supports_technology(&self, identifier: &str) -> bool {
        self.technologies
            .iter()
            .any(|technology| technology.identifier == identifier)
    }
}

/// Physical location of a server.
#[derive(Debug, Clone, Deserialize)]
pub struct Location {
    pub id: u64,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    pub country: Country,
}

/// A geographic coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Great-circle angular distance to `other`, in radians.
    ///
    /// Haversine form. The result is the central angle on a unit sphere;
    /// callers only ever compare distances, so multiplying by an earth
    /// radius would be dead weight.
    pub fn central_angle(&self, other: &Coordinates) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = (other.latitude - self.latitude).to_radians();
        let dlon = (other.longitude - self.longitude).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        2.0 * h.sqrt().asin()
    }
}

/// Group membership entry embedded in a server record.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerGroup {
    pub id: u32,
    #[serde(default)]
    pub identifier: String,
    pub title: String,
}

/// Technology membership entry embedded in a server record.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTechnology {
    pub id: u32,
    pub identifier: String,
    #[serde(default)]
    pub name: String,
}
