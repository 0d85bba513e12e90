//! Flight leg and airport stores.
//!
//! The engine consumes a flat list of flight legs regardless of where they
//! came from; these traits are the seam between the engine and storage.
//! [`SqliteStore`] is the production implementation; [`MemoryStore`] backs
//! tests and demos.

mod error;
mod memory;
mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::domain::{Airport, AirportCode, FlightLeg, LegStatus};

/// Predicate for leg queries. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegFilter {
    /// Match legs departing this airport.
    pub origin: Option<AirportCode>,

    /// Match legs arriving at this airport.
    pub destination: Option<AirportCode>,

    /// Match legs with this status.
    pub status: Option<LegStatus>,
}

impl LegFilter {
    /// Active legs departing `origin`.
    pub fn active_from(origin: AirportCode) -> Self {
        Self {
            origin: Some(origin),
            destination: None,
            status: Some(LegStatus::Active),
        }
    }

    /// Active legs arriving at `destination`.
    pub fn active_to(destination: AirportCode) -> Self {
        Self {
            origin: None,
            destination: Some(destination),
            status: Some(LegStatus::Active),
        }
    }

    /// Active legs for an origin/destination pair.
    pub fn active_between(origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin: Some(origin),
            destination: Some(destination),
            status: Some(LegStatus::Active),
        }
    }

    /// Whether a leg satisfies the filter.
    pub fn matches(&self, leg: &FlightLeg) -> bool {
        self.origin.is_none_or(|o| leg.origin() == o)
            && self.destination.is_none_or(|d| leg.destination() == d)
            && self.status.is_none_or(|s| leg.status() == s)
    }
}

/// Query interface over the flight leg store.
///
/// This abstraction allows the composer to be tested against in-memory
/// data and lets storage failures surface as [`StoreError`] without the
/// engine knowing anything about the backend.
pub trait LegStore {
    /// All legs matching the filter, in unspecified order.
    fn find_legs(&self, filter: &LegFilter) -> Result<Vec<FlightLeg>, StoreError>;
}

/// Lookup interface over airport reference data.
///
/// Used only for display enrichment and the best-effort international
/// annotation; absence of a record must never fail a search.
pub trait AirportStore {
    /// The airport record for `code`, if one exists.
    fn airport(&self, code: AirportCode) -> Result<Option<Airport>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;

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
    fn default_filter_matches_everything() {
        let filter = LegFilter::default();
        assert!(filter.matches(&leg("MNL", "NRT", LegStatus::Active)));
        assert!(filter.matches(&leg("LAX", "JFK", LegStatus::Cancelled)));
    }

    #[test]
    fn active_between_filters_all_fields() {
        let filter = LegFilter::active_between(code("MNL"), code("NRT"));

        assert!(filter.matches(&leg("MNL", "NRT", LegStatus::Active)));
        assert!(!filter.matches(&leg("MNL", "NRT", LegStatus::Cancelled)));
        assert!(!filter.matches(&leg("MNL", "CEB", LegStatus::Active)));
        assert!(!filter.matches(&leg("CEB", "NRT", LegStatus::Active)));
    }

    #[test]
    fn origin_only_and_destination_only() {
        let from_mnl = LegFilter::active_from(code("MNL"));
        assert!(from_mnl.matches(&leg("MNL", "NRT", LegStatus::Active)));
        assert!(from_mnl.matches(&leg("MNL", "CEB", LegStatus::Active)));
        assert!(!from_mnl.matches(&leg("CEB", "MNL", LegStatus::Active)));

        let to_lax = LegFilter::active_to(code("LAX"));
        assert!(to_lax.matches(&leg("MNL", "LAX", LegStatus::Active)));
        assert!(!to_lax.matches(&leg("LAX", "MNL", LegStatus::Active)));
    }
}
