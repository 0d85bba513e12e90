//! Composed itinerary types.
//!
//! An `Itinerary` is a complete routing from origin to destination,
//! computed on demand by the composer and never persisted. Connecting
//! variants carry one `Layover` per connection airport.

use std::fmt;

use super::{AirportCode, DomainError, FlightLeg};

/// Risk classification of a layover, derived solely from its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// Short display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "RISKY",
            RiskTier::Medium => "TIGHT",
            RiskTier::Low => "COMFORTABLE",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The gap between an arriving leg and a connecting departure at a shared
/// airport.
///
/// `is_hub` and `is_international` are informational annotations; the tier
/// depends only on `minutes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Layover {
    airport: AirportCode,
    minutes: i64,
    is_hub: bool,
    is_international: bool,
    tier: RiskTier,
}

impl Layover {
    /// Construct a layover.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `minutes <= 0`; the composer discards such
    /// connections before classification.
    pub fn new(
        airport: AirportCode,
        minutes: i64,
        is_hub: bool,
        is_international: bool,
        tier: RiskTier,
    ) -> Result<Self, DomainError> {
        if minutes <= 0 {
            return Err(DomainError::InvalidLayover(minutes));
        }
        Ok(Self {
            airport,
            minutes,
            is_hub,
            is_international,
            tier,
        })
    }

    /// Connection airport.
    pub fn airport(&self) -> AirportCode {
        self.airport
    }

    /// Layover duration in minutes (guaranteed positive).
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Whether the connection airport is on the hub allow-list.
    pub fn is_hub(&self) -> bool {
        self.is_hub
    }

    /// Whether the overall routing is (nominally) international.
    pub fn is_international(&self) -> bool {
        self.is_international
    }

    /// Risk tier for this layover.
    pub fn tier(&self) -> RiskTier {
        self.tier
    }
}

/// A complete routing from origin to destination.
///
/// # Invariants
///
/// - Consecutive legs share an airport (arrival airport of one leg is the
///   departure airport of the next).
/// - No connection airport equals the overall origin or final destination.
/// - Each layover's airport is the shared airport of the legs around it.
///
/// All variants are validated by their constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum Itinerary {
    /// A single nonstop leg.
    Direct { leg: FlightLeg },

    /// Two legs joined at one connection airport.
    OneStop {
        first: FlightLeg,
        second: FlightLeg,
        layover: Layover,
    },

    /// Three legs joined at two connection airports.
    TwoStop {
        first: FlightLeg,
        second: FlightLeg,
        third: FlightLeg,
        layovers: [Layover; 2],
    },
}

impl Itinerary {
    /// A direct itinerary over one leg.
    pub fn direct(leg: FlightLeg) -> Self {
        Itinerary::Direct { leg }
    }

    /// A one-stop itinerary, validating connectivity.
    ///
    /// The no-revisit rule is implied here: the connection airport can only
    /// equal an endpoint if one of the legs were a self-loop, which
    /// [`FlightLeg::new`] already rejects.
    pub fn one_stop(
        first: FlightLeg,
        second: FlightLeg,
        layover: Layover,
    ) -> Result<Self, DomainError> {
        if first.destination() != second.origin() {
            return Err(DomainError::LegsNotConnected(
                first.destination(),
                second.origin(),
            ));
        }
        debug_assert_eq!(layover.airport(), first.destination());

        Ok(Itinerary::OneStop {
            first,
            second,
            layover,
        })
    }

    /// A two-stop itinerary, validating connectivity and that all four
    /// airports on the routing are pairwise distinct.
    pub fn two_stop(
        first: FlightLeg,
        second: FlightLeg,
        third: FlightLeg,
        layovers: [Layover; 2],
    ) -> Result<Self, DomainError> {
        if first.destination() != second.origin() {
            return Err(DomainError::LegsNotConnected(
                first.destination(),
                second.origin(),
            ));
        }
        if second.destination() != third.origin() {
            return Err(DomainError::LegsNotConnected(
                second.destination(),
                third.origin(),
            ));
        }
        debug_assert_eq!(layovers[0].airport(), first.destination());
        debug_assert_eq!(layovers[1].airport(), second.destination());

        let stops = [
            first.origin(),
            first.destination(),
            second.destination(),
            third.destination(),
        ];
        for i in 0..stops.len() {
            for j in (i + 1)..stops.len() {
                if stops[i] == stops[j] {
                    return Err(DomainError::RevisitsEndpoint(stops[i]));
                }
            }
        }

        Ok(Itinerary::TwoStop {
            first,
            second,
            third,
            layovers,
        })
    }

    /// Overall origin.
    pub fn origin(&self) -> AirportCode {
        match self {
            Itinerary::Direct { leg } => leg.origin(),
            Itinerary::OneStop { first, .. } => first.origin(),
            Itinerary::TwoStop { first, .. } => first.origin(),
        }
    }

    /// Final destination.
    pub fn final_destination(&self) -> AirportCode {
        match self {
            Itinerary::Direct { leg } => leg.destination(),
            Itinerary::OneStop { second, .. } => second.destination(),
            Itinerary::TwoStop { third, .. } => third.destination(),
        }
    }

    /// All legs in travel order.
    pub fn legs(&self) -> Vec<&FlightLeg> {
        match self {
            Itinerary::Direct { leg } => vec![leg],
            Itinerary::OneStop { first, second, .. } => vec![first, second],
            Itinerary::TwoStop {
                first,
                second,
                third,
                ..
            } => vec![first, second, third],
        }
    }

    /// All layovers in travel order (empty for direct itineraries).
    pub fn layovers(&self) -> &[Layover] {
        match self {
            Itinerary::Direct { .. } => &[],
            Itinerary::OneStop { layover, .. } => std::slice::from_ref(layover),
            Itinerary::TwoStop { layovers, .. } => layovers,
        }
    }

    /// Number of stops (0 for direct).
    pub fn stop_count(&self) -> usize {
        self.layovers().len()
    }

    /// True if this is a nonstop routing.
    pub fn is_direct(&self) -> bool {
        matches!(self, Itinerary::Direct { .. })
    }

    /// Sum of flight durations, excluding layovers.
    pub fn total_flight_minutes(&self) -> i64 {
        self.legs().iter().map(|l| l.duration_minutes()).sum()
    }

    /// Sum of layover durations.
    pub fn total_layover_minutes(&self) -> i64 {
        self.layovers().iter().map(|l| l.minutes()).sum()
    }

    /// Total travel time: flight time plus layover time.
    pub fn total_travel_minutes(&self) -> i64 {
        self.total_flight_minutes() + self.total_layover_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;

    fn code(s: &str) -> AirportCode {
        AirportCode::parse(s).unwrap()
    }

    fn time(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn leg(number: &str, origin: &str, destination: &str, dep: &str, arr: &str, mins: i64) -> FlightLeg {
        FlightLeg::new(
            number,
            "PR",
            "Philippine Airlines",
            code(origin),
            code(destination),
            time(dep),
            time(arr),
            mins,
        )
        .unwrap()
    }

    fn layover(airport: &str, minutes: i64) -> Layover {
        Layover::new(code(airport), minutes, false, false, RiskTier::Medium).unwrap()
    }

    #[test]
    fn layover_rejects_non_positive_minutes() {
        assert!(Layover::new(code("MNL"), 0, false, false, RiskTier::High).is_err());
        assert!(Layover::new(code("MNL"), -20, false, false, RiskTier::High).is_err());
        assert!(Layover::new(code("MNL"), 1, false, false, RiskTier::High).is_ok());
    }

    #[test]
    fn direct_accessors() {
        let it = Itinerary::direct(leg("PR101", "MNL", "NRT", "22:05", "02:35", 270));

        assert!(it.is_direct());
        assert_eq!(it.stop_count(), 0);
        assert_eq!(it.origin(), code("MNL"));
        assert_eq!(it.final_destination(), code("NRT"));
        assert_eq!(it.legs().len(), 1);
        assert!(it.layovers().is_empty());
        assert_eq!(it.total_flight_minutes(), 270);
        assert_eq!(it.total_layover_minutes(), 0);
        assert_eq!(it.total_travel_minutes(), 270);
    }

    #[test]
    fn one_stop_valid() {
        let it = Itinerary::one_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR102", "MNL", "LAX", "23:35", "19:20", 705),
            layover("MNL", 1095),
        )
        .unwrap();

        assert!(!it.is_direct());
        assert_eq!(it.stop_count(), 1);
        assert_eq!(it.origin(), code("POM"));
        assert_eq!(it.final_destination(), code("LAX"));
        assert_eq!(it.total_flight_minutes(), 865);
        assert_eq!(it.total_layover_minutes(), 1095);
        assert_eq!(it.total_travel_minutes(), 1960);
    }

    #[test]
    fn one_stop_rejects_disconnected_legs() {
        let result = Itinerary::one_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR431", "CEB", "NRT", "09:45", "15:10", 265),
            layover("MNL", 265),
        );

        assert!(matches!(result, Err(DomainError::LegsNotConnected(_, _))));
    }

    #[test]
    fn one_stop_legs_iterate_in_travel_order() {
        let it = Itinerary::one_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR102", "MNL", "LAX", "23:35", "19:20", 705),
            layover("MNL", 1095),
        )
        .unwrap();

        let numbers: Vec<&str> = it.legs().iter().map(|l| l.flight_number()).collect();
        assert_eq!(numbers, vec!["PR216", "PR102"]);
        assert_eq!(it.layovers()[0].airport(), code("MNL"));
    }

    #[test]
    fn two_stop_valid() {
        let it = Itinerary::two_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR431", "MNL", "NRT", "09:45", "15:10", 265),
            leg("NH6", "NRT", "LAX", "19:05", "12:30", 605),
            [layover("MNL", 265), layover("NRT", 235)],
        )
        .unwrap();

        assert_eq!(it.stop_count(), 2);
        assert_eq!(it.origin(), code("POM"));
        assert_eq!(it.final_destination(), code("LAX"));
        assert_eq!(it.total_flight_minutes(), 160 + 265 + 605);
        assert_eq!(it.total_layover_minutes(), 500);
    }

    #[test]
    fn two_stop_rejects_repeated_airport() {
        // POM -> MNL -> NRT -> MNL revisits MNL as final destination
        let result = Itinerary::two_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR431", "MNL", "NRT", "09:45", "15:10", 265),
            leg("PR432", "NRT", "MNL", "18:00", "22:00", 240),
            [layover("MNL", 265), layover("NRT", 170)],
        );

        assert!(matches!(result, Err(DomainError::RevisitsEndpoint(_))));
    }

    #[test]
    fn two_stop_rejects_disconnected_legs() {
        let result = Itinerary::two_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR431", "MNL", "NRT", "09:45", "15:10", 265),
            leg("KE12", "ICN", "LAX", "14:30", "09:10", 640),
            [layover("MNL", 265), layover("NRT", 200)],
        );

        assert!(matches!(result, Err(DomainError::LegsNotConnected(_, _))));
    }

    #[test]
    fn risk_tier_labels() {
        assert_eq!(RiskTier::High.label(), "RISKY");
        assert_eq!(RiskTier::Medium.label(), "TIGHT");
        assert_eq!(RiskTier::Low.label(), "COMFORTABLE");
        assert_eq!(RiskTier::Low.to_string(), "COMFORTABLE");
    }
}
