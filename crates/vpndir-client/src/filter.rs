//! Declarative server filters.
//!
//! A [`Filter`] is a constraint with two faces: a query-string fragment the
//! remote catalog understands, and a local predicate over an
//! already-fetched [`Server`] record. The two never disagree on intent, but
//! not every filter has both faces: a filter that cannot be expressed
//! remotely returns an empty fragment, and a remote-only bound like
//! [`Limit`] matches every server locally.
//!
//! Filters compose through [`FilterList`], which is a logical AND.

use vpndir_common::catalog::{Country, Group, Server, Technology};

/// A composable server constraint.
pub trait Filter: Send + Sync {
    /// The URL query fragment for this filter, of the form
    /// `filters[<dimension>]=<value>` or
    /// `filters[<dimension>][identifier]=<value>`.
    ///
    /// Returns the empty string when the filter has no remote expression;
    /// composition skips empty fragments instead of emitting stray
    /// separators.
    fn query_fragment(&self) -> String;

    /// Whether `server` satisfies the filter. Pure: no I/O, no state.
    fn matches(&self, server: &Server) -> bool;

    /// Short human-readable label, defaulting to the stable identifier.
    fn label(&self) -> String;
}

impl Filter for Country {
    fn query_fragment(&self) -> String {
        format!("filters[country_id]={}", self.id)
    }

    fn matches(&self, server: &Server) -> bool {
        server.country().is_some_and(|country| country.id == self.id)
    }

    fn label(&self) -> String {
        if self.name.is_empty() {
            format!("country_{}", self.id)
        } else {
            self.name.clone()
        }
    }
}

impl Filter for Group {
    fn query_fragment(&self) -> String {
        // A group with no identifier cannot be expressed as a remote
        // constraint; emitting `filters[servers_groups][identifier]=` would
        // be a malformed query.
        if self.identifier.is_empty() {
            return String::new();
        }
        format!("filters[servers_groups][identifier]={}", self.identifier)
    }

    fn matches(&self, server: &Server) -> bool {
        server.supports_group(&self.identifier)
    }

    fn label(&self) -> String {
        self.identifier.clone()
    }
}

impl Filter for Technology {
    fn query_fragment(&self) -> String {
        if self.identifier.is_empty() {
            return String::new();
        }
        format!("filters[servers_technologies][identifier]={}", self.identifier)
    }

    fn matches(&self, server: &Server) -> bool {
        server.supports_technology(&self.identifier)
    }

    fn label(&self) -> String {
        self.identifier.clone()
    }
}

/// Local-only constraint on reported load. Load is not a dimension the
/// remote query grammar knows, so the fragment is empty.
#[derive(Debug, Clone, Copy)]
pub struct MaxLoad(pub u8);

impl Filter for MaxLoad {
    fn query_fragment(&self) -> String {
        String::new()
    }

    fn matches(&self, server: &Server) -> bool {
        server.load <= self.0
    }

    fn label(&self) -> String {
        format!("load<={}", self.0)
    }
}

/// Remote-only bound on the result count.
#[derive(Debug, Clone, Copy)]
pub struct Limit(pub u32);

impl Filter for Limit {
    fn query_fragment(&self) -> String {
        format!("limit={}", self.0)
    }

    fn matches(&self, _server: &Server) -> bool {
        true
    }

    fn label(&self) -> String {
        format!("limit_{}", self.0)
    }
}

/// An ordered conjunction of filters.
///
/// The empty list is the identity element of AND: it produces an empty
/// query fragment and matches every server.
#[derive(Default)]
pub struct FilterList {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filter: impl Filter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, filter: impl Filter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Filter for FilterList {
    fn query_fragment(&self) -> String {
        let mut out = String::new();
        for fragment in self.filters.iter().map(|filter| filter.query_fragment()) {
            if fragment.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&fragment);
        }
        out
    }

    fn matches(&self, server: &Server) -> bool {
        self.filters.iter().all(|filter| filter.matches(server))
    }

    fn label(&self) -> String {
        self.filters
            .iter()
            .map(|filter| filter.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vpndir_common::catalog::{ServerGroup, ServerTechnology};

    fn server() -> Server {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Germany #650",
            "hostname": "de650.example.com",
            "station": "194.99.104.33",
            "load": 21,
            "locations": [{
                "id": 133,
                "latitude": 50.116667,
                "longitude": 8.683333,
                "country": { "id": 81, "name": "Germany", "code": "DE" }
            }],
            "groups": [
                { "id": 11, "identifier": "legacy_standard", "title": "Standard VPN servers" },
                { "id": 19, "identifier": "europe", "title": "Europe" }
            ],
            "technologies": [
                { "id": 35, "identifier": "wireguard_udp", "name": "WireGuard" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_country_fragment_and_predicate() {
        let germany = Country {
            id: 81,
            name: "Germany".to_string(),
            code: "DE".to_string(),
            cities: vec![],
        };
        assert_eq!(germany.query_fragment(), "filters[country_id]=81");
        assert!(germany.matches(&server()));

        let poland = Country {
            id: 174,
            name: "Poland".to_string(),
            code: "PL".to_string(),
            cities: vec![],
        };
        assert!(!poland.matches(&server()));
    }

    #[test]
    fn test_group_fragment_and_predicate() {
        let group = Group::new(19, "europe", "Europe");
        assert_eq!(
            group.query_fragment(),
            "filters[servers_groups][identifier]=europe"
        );
        assert!(group.matches(&server()));
        assert!(!Group::new(15, "legacy_p2p", "P2P").matches(&server()));
    }

    #[test]
    fn test_unrecognized_group_has_no_remote_expression() {
        let unknown = Group::new(0, "", "");
        assert_eq!(unknown.query_fragment(), "");
    }

    #[test]
    fn test_technology_fragment_and_predicate() {
        let wireguard = Technology::new(35, "wireguard_udp", "WireGuard");
        assert_eq!(
            wireguard.query_fragment(),
            "filters[servers_technologies][identifier]=wireguard_udp"
        );
        assert!(wireguard.matches(&server()));
        assert!(!Technology::new(3, "openvpn_udp", "OpenVPN UDP").matches(&server()));
    }

    #[test]
    fn test_max_load_is_local_only() {
        assert_eq!(MaxLoad(30).query_fragment(), "");
        assert!(MaxLoad(30).matches(&server()));
        assert!(!MaxLoad(20).matches(&server()));
    }

    #[test]
    fn test_limit_is_remote_only() {
        assert_eq!(Limit(5).query_fragment(), "limit=5");
        assert!(Limit(0).matches(&server()));
    }

    #[test]
    fn test_empty_list_is_identity() {
        let list = FilterList::new();
        assert_eq!(list.query_fragment(), "");
        assert!(list.matches(&server()));
    }

    #[test]
    fn test_list_joins_fragments_in_member_order() {
        let list = FilterList::new()
            .with(Group::new(19, "europe", "Europe"))
            .with(Technology::new(35, "wireguard_udp", "WireGuard"))
            .with(Limit(3));
        assert_eq!(
            list.query_fragment(),
            "filters[servers_groups][identifier]=europe\
             &filters[servers_technologies][identifier]=wireguard_udp\
             &limit=3"
        );
    }

    #[test]
    fn test_list_skips_empty_fragments_without_stray_separators() {
        let list = FilterList::new()
            .with(MaxLoad(30))
            .with(Group::new(19, "europe", "Europe"))
            .with(MaxLoad(80));
        assert_eq!(
            list.query_fragment(),
            "filters[servers_groups][identifier]=europe"
        );
    }

    #[test]
    fn test_fragment_token_count_matches_non_empty_members() {
        let list = FilterList::new()
            .with(Country {
                id: 81,
                name: String::new(),
                code: String::new(),
                cities: vec![],
            })
            .with(MaxLoad(50))
            .with(Limit(10));
        let fragment = list.query_fragment();
        assert_eq!(fragment.split('&').count(), 2);
    }

    #[test]
    fn test_list_is_a_conjunction() {
        let matching = FilterList::new()
            .with(Group::new(19, "europe", "Europe"))
            .with(MaxLoad(30));
        assert!(matching.matches(&server()));

        let failing = FilterList::new()
            .with(Group::new(19, "europe", "Europe"))
            .with(MaxLoad(10));
        assert!(!failing.matches(&server()));
    }

    #[test]
    fn test_matches_is_pure() {
        let group = Group::new(19, "europe", "Europe");
        let s = server();
        assert_eq!(group.matches(&s), group.matches(&s));
    }

    #[test]
    fn test_list_label_joins_member_labels() {
        let list = FilterList::new()
            .with(Group::new(19, "europe", "Europe"))
            .with(MaxLoad(30));
        assert_eq!(list.label(), "europe load<=30");
    }

    #[test]
    fn test_server_group_and_technology_entries_decode() {
        let group: ServerGroup = serde_json::from_value(serde_json::json!({
            "id": 11, "identifier": "legacy_standard", "title": "Standard VPN servers"
        }))
        .unwrap();
        assert_eq!(group.identifier, "legacy_standard");

        let technology: ServerTechnology = serde_json::from_value(serde_json::json!({
            "id": 35, "identifier": "wireguard_udp", "name": "WireGuard"
        }))
        .unwrap();
        assert_eq!(technology.identifier, "wireguard_udp");
    }
}
