//! In-memory flight leg and airport store.
//!
//! Backs the composer tests and small demos; behaves identically to the
//! SQLite store as far as the engine can observe.

use std::collections::HashMap;

use crate::domain::{Airport, AirportCode, FlightLeg};

use super::{AirportStore, LegFilter, LegStore, StoreError};

/// A flat in-memory collection of legs and airports.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    legs: Vec<FlightLeg>,
    airports: HashMap<AirportCode, Airport>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leg.
    pub fn add_leg(&mut self, leg: FlightLeg) {
        self.legs.push(leg);
    }

    /// Add an airport record.
    pub fn add_airport(&mut self, airport: Airport) {
        self.airports.insert(airport.code, airport);
    }

    /// Number of legs held.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }
}

impl LegStore for MemoryStore {
    fn find_legs(&self, filter: &LegFilter) -> Result<Vec<FlightLeg>, StoreError> {
        Ok(self
            .legs
            .iter()
            .filter(|leg| filter.matches(leg))
            .cloned()
            .collect())
    }
}

impl AirportStore for MemoryStore {
    fn airport(&self, code: AirportCode) -> Result<Option<Airport>, StoreError> {
        Ok(self.airports.get(&code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, LegStatus};

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn leg(origin: &str, destination: &str, status: LegStatus) -> FlightLeg {
        FlightLeg::new(
            "PR101",
            "PR",
            "Philippine Airlines",
            code(origin),
            code(destination),
            ClockTime::parse_hhmm("08:00").unwrap(),
            ClockTime::parse_hhmm("10:00").unwrap(),
            120,
        )
        .unwrap()
        .with_status(status)
    }

    #[test]
    fn filters_like_the_sqlite_store() {
        let mut store = MemoryStore::new();
        store.add_leg(leg("MNL", "NRT", LegStatus::Active));
        store.add_leg(leg("MNL", "CEB", LegStatus::Active));
        store.add_leg(leg("MNL", "NRT", LegStatus::Cancelled));

        let between = store
            .find_legs(&LegFilter::active_between(code("MNL"), code("NRT")))
            .unwrap();
        assert_eq!(between.len(), 1);

        let all = store.find_legs(&LegFilter::default()).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn airport_lookup_misses_return_none() {
        let mut store = MemoryStore::new();
        store.add_airport(Airport {
            code: code("MNL"),
            name: "Ninoy Aquino International".into(),
            city: "Manila".into(),
            country: "Philippines".into(),
            timezone: "Asia/Manila".into(),
            latitude: Some(14.5086),
            longitude: Some(121.0194),
        });

        assert!(store.airport(code("MNL")).unwrap().is_some());
        assert!(store.airport(code("ZZZ")).unwrap().is_none());
    }
}
