use serde::Deserialize;

/// A connection technology a server can support, the second enumerable
/// catalog dimension. Equality is by identifier, like [`Group`].
///
/// [`Group`]: crate::catalog::Group
#[derive(Debug, Clone, Deserialize)]
pub struct Technology {
    pub id: u32,
    pub identifier: String,
    pub title: String,
}

impl Technology {
    pub fn new(id: u32, identifier: &str, title: &str) -> Self {
        Self {
            id,
            identifier: identifier.to_string(),
            title: title.to_string(),
        }
    }

    /// Seed set for the registry cache, mirroring [`Group::well_known`].
    ///
    /// [`Group::well_known`]: crate::catalog::Group::well_known
    pub fn well_known() -> Vec<Technology> {
        vec![
            Technology::new(1, "ikev2", "IKEv2/IPSec"),
            Technology::new(3, "openvpn_udp", "OpenVPN UDP"),
            Technology::new(5, "openvpn_tcp", "OpenVPN TCP"),
            Technology::new(7, "socks", "Socks 5"),
            Technology::new(9, "proxy", "HTTP Proxy"),
            Technology::new(11, "pptp", "PPTP"),
            Technology::new(13, "l2tp", "L2TP/IPSec"),
            Technology::new(15, "openvpn_xor_udp", "OpenVPN UDP Obfuscated"),
            Technology::new(17, "openvpn_xor_tcp", "OpenVPN TCP Obfuscated"),
            Technology::new(19, "proxy_cybersec", "HTTP CyberSec Proxy"),
            Technology::new(21, "proxy_ssl", "HTTP Proxy (SSL)"),
            Technology::new(23, "proxy_ssl_cybersec", "HTTP CyberSec Proxy (SSL)"),
            Technology::new(26, "ikev2_v6", "IKEv2/IPSec IPv6"),
            Technology::new(29, "openvpn_udp_v6", "OpenVPN UDP IPv6"),
            Technology::new(32, "openvpn_tcp_v6", "OpenVPN TCP IPv6"),
            Technology::new(35, "wireguard_udp", "WireGuard"),
            Technology::new(38, "openvpn_udp_tls_crypt", "OpenVPN UDP TLS Crypt"),
            Technology::new(41, "openvpn_tcp_tls_crypt", "OpenVPN TCP TLS Crypt"),
        ]
    }
}

impl PartialEq for Technology {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Technology {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_identifier() {
        let a = Technology::new(35, "wireguard_udp", "WireGuard");
        let b = Technology::new(0, "wireguard_udp", "wg");
        assert_eq!(a, b);
    }

    #[test]
    fn test_well_known_has_no_duplicate_identifiers() {
        let technologies = Technology::well_known();
        for (i, a) in technologies.iter().enumerate() {
            for b in &technologies[i + 1..] {
                assert_ne!(a.identifier, b.identifier);
            }
        }
    }
}
