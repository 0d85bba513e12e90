//! Hub airport allow-list.
//!
//! Some airports are busy enough that transfers there carry extra friction
//! (long terminal distances, congestion, re-screening). The engine tags
//! layovers at these airports so the risk classifier can surface a higher
//! informational minimum-connection time. Hub status never filters results.

use std::collections::HashSet;

use crate::domain::AirportCode;

/// A fixed allow-list of hub airports.
#[derive(Debug, Clone, Default)]
pub struct HubSet {
    hubs: HashSet<AirportCode>,
}

impl HubSet {
    /// Create an empty hub set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an airport to the set.
    pub fn add(&mut self, code: AirportCode) {
        self.hubs.insert(code);
    }

    /// Whether the airport is on the allow-list.
    pub fn contains(&self, code: AirportCode) -> bool {
        self.hubs.contains(&code)
    }

    /// Number of hubs.
    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    /// True if the set holds no hubs.
    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }
}

/// Builder for hub sets.
#[derive(Debug, Default)]
pub struct HubSetBuilder {
    inner: HubSet,
}

impl HubSetBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hub by code; silently skips invalid codes.
    pub fn add(mut self, code: &str) -> Self {
        if let Ok(code) = AirportCode::parse(code) {
            self.inner.add(code);
        }
        self
    }

    /// Build the hub set.
    pub fn build(self) -> HubSet {
        self.inner
    }
}

/// The default allow-list of major international hubs.
pub fn major_hubs() -> HubSet {
    HubSetBuilder::new()
        // North America
        .add("ATL")
        .add("ORD")
        .add("DFW")
        .add("LAX")
        .add("JFK")
        .add("SFO")
        .add("YYZ")
        // Europe
        .add("LHR")
        .add("CDG")
        .add("FRA")
        .add("AMS")
        .add("IST")
        // Middle East
        .add("DXB")
        .add("DOH")
        // Asia-Pacific
        .add("MNL")
        .add("SIN")
        .add("HKG")
        .add("NRT")
        .add("HND")
        .add("ICN")
        .add("PEK")
        .add("PVG")
        .add("BKK")
        .add("SYD")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    #[test]
    fn empty_set() {
        let hubs = HubSet::new();
        assert!(hubs.is_empty());
        assert_eq!(hubs.len(), 0);
        assert!(!hubs.contains(code("LAX")));
    }

    #[test]
    fn add_and_contains() {
        let mut hubs = HubSet::new();
        hubs.add(code("LAX"));

        assert!(hubs.contains(code("LAX")));
        assert!(!hubs.contains(code("POM")));
        assert_eq!(hubs.len(), 1);
    }

    #[test]
    fn builder_ignores_invalid_codes() {
        let hubs = HubSetBuilder::new()
            .add("INVALID")
            .add("12X")
            .add("LAX")
            .build();

        assert_eq!(hubs.len(), 1);
        assert!(hubs.contains(code("LAX")));
    }

    #[test]
    fn major_hubs_cover_known_airports() {
        let hubs = major_hubs();

        assert!(!hubs.is_empty());
        assert!(hubs.contains(code("LAX")));
        assert!(hubs.contains(code("MNL")));
        assert!(hubs.contains(code("NRT")));
        // Port Moresby is no hub
        assert!(!hubs.contains(code("POM")));
    }
}
