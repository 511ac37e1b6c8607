use serde::Deserialize;

/// A server group, one of the enumerable catalog dimensions.
///
/// Equality is by the stable string identifier: two `Group` values naming
/// the same identifier are the same group no matter where they were decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct Group {
    pub id: u32,
    pub identifier: String,
    pub title: String,
}

impl Group {
    pub fn new(id: u32, identifier: &str, title: &str) -> Self {
        Self {
            id,
            identifier: identifier.to_string(),
            title: title.to_string(),
        }
    }

    /// The well-known groups the catalog has carried since its first public
    /// version. Identifiers are stable server-side, so these seed the
    /// registry cache and answer common lookups without a round trip.
    pub fn well_known() -> Vec<Group> {
        vec![
            Group::new(1, "legacy_double_vpn", "Double VPN"),
            Group::new(3, "legacy_onion_over_vpn", "Onion Over VPN"),
            Group::new(5, "legacy_ultra_fast_tv", "Ultra fast TV"),
            Group::new(7, "legacy_anti_ddos", "Anti DDoS"),
            Group::new(9, "legacy_dedicated_ip", "Dedicated IP"),
            Group::new(11, "legacy_standard", "Standard VPN servers"),
            Group::new(13, "legacy_netflix_usa", "Netflix USA"),
            Group::new(15, "legacy_p2p", "P2P"),
            Group::new(17, "legacy_obfuscated_servers", "Obfuscated Servers"),
            Group::new(19, "europe", "Europe"),
            Group::new(21, "the_americas", "The Americas"),
            Group::new(23, "asia_pacific", "Asia Pacific"),
            Group::new(25, "africa_the_middle_east_and_india", "Africa, the Middle East and India"),
        ]
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Group {}
