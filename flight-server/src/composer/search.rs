//! Itinerary composition.
//!
//! Builds candidate direct, one-stop and two-stop itineraries by joining
//! flight legs on shared airports, applies the layover admissibility
//! window, classifies each layover, and ranks the results.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    AirportCode, FlightLeg, Itinerary, Layover, layover_minutes,
};
use crate::hubs::HubSet;
use crate::store::{AirportStore, LegFilter, LegStore, StoreError};

use super::config::{SearchConfig, SearchOptions};
use super::rank::{rank_direct, rank_one_stop, rank_two_stop};
use super::risk::classify;

/// Error from itinerary search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Malformed origin or destination code; surfaced before any storage
    /// access.
    #[error("invalid {field} code: {value:?}")]
    InvalidCode { field: &'static str, value: String },

    /// The leg store failed. The whole search aborts; no retries, no
    /// partial results.
    #[error("flight store unavailable: {0}")]
    Storage(#[from] StoreError),
}

/// Composed itineraries for one origin/destination query.
///
/// An outcome with all three categories empty is a successful "no
/// connections found" result, not an error.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Normalized origin code.
    pub origin: AirportCode,

    /// Normalized destination code.
    pub destination: AirportCode,

    /// Nonstop itineraries, ordered by departure time. Never capped.
    pub direct: Vec<Itinerary>,

    /// One-stop itineraries, best first, capped at the requested maximum.
    pub one_stop: Vec<Itinerary>,

    /// Two-stop itineraries from the fallback search; empty unless both
    /// direct and one-stop came up empty.
    pub two_stop: Vec<Itinerary>,
}

impl SearchOutcome {
    /// True if no itinerary of any shape was found.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.one_stop.is_empty() && self.two_stop.is_empty()
    }

    /// Total number of composed itineraries.
    pub fn len(&self) -> usize {
        self.direct.len() + self.one_stop.len() + self.two_stop.len()
    }
}

/// Itinerary composer.
///
/// Holds references to its collaborators; constructing one is free and a
/// single composer can serve any number of searches. Searches never mutate
/// shared state, so composers for different queries are independent.
pub struct Composer<'a, L: LegStore, A: AirportStore> {
    legs: &'a L,
    airports: &'a A,
    hubs: &'a HubSet,
    config: &'a SearchConfig,
}

impl<'a, L: LegStore, A: AirportStore> Composer<'a, L, A> {
    /// Create a new composer.
    pub fn new(legs: &'a L, airports: &'a A, hubs: &'a HubSet, config: &'a SearchConfig) -> Self {
        Self {
            legs,
            airports,
            hubs,
            config,
        }
    }

    /// Search with the default options and an explicit connecting-result
    /// cap.
    pub fn search(
        &self,
        origin: &str,
        destination: &str,
        max_results: usize,
    ) -> Result<SearchOutcome, SearchError> {
        self.search_with_options(
            origin,
            destination,
            &SearchOptions {
                max_results: Some(max_results),
                ..SearchOptions::default()
            },
        )
    }

    /// Search for itineraries from `origin` to `destination`.
    ///
    /// Codes are case-normalized before lookup. Only active legs
    /// participate. Two-stop composition runs only when the direct and
    /// one-stop searches both found nothing (before capping).
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidCode`] for malformed codes (checked before
    /// any storage access); [`SearchError::Storage`] when a leg query
    /// fails.
    pub fn search_with_options(
        &self,
        origin: &str,
        destination: &str,
        options: &SearchOptions,
    ) -> Result<SearchOutcome, SearchError> {
        let origin = AirportCode::parse_normalized(origin).map_err(|_| {
            SearchError::InvalidCode {
                field: "origin",
                value: origin.to_string(),
            }
        })?;
        let destination = AirportCode::parse_normalized(destination).map_err(|_| {
            SearchError::InvalidCode {
                field: "destination",
                value: destination.to_string(),
            }
        })?;

        let max_results = options.max_results.unwrap_or(self.config.max_results);
        let min_layover = options
            .min_layover_mins
            .unwrap_or(self.config.min_layover_mins);
        let max_layover = self.config.max_layover_mins;

        // International is a best-effort annotation from airport metadata;
        // lookup failures must not abort the search.
        let international = self.is_international(origin, destination);

        let mut direct = self.find_direct(origin, destination, options)?;
        rank_direct(&mut direct);

        let mut one_stop =
            self.find_one_stop(origin, destination, international, min_layover, max_layover, options)?;
        let one_stop_found = !one_stop.is_empty();
        rank_one_stop(&mut one_stop);
        one_stop.truncate(max_results);

        // Fallback gating: two-stop composition only runs when nothing
        // else was found, judged before the one-stop cap was applied.
        let mut two_stop = Vec::new();
        if direct.is_empty() && !one_stop_found {
            two_stop = self.find_two_stop(
                origin,
                destination,
                international,
                min_layover,
                max_layover,
                options,
            )?;
            rank_two_stop(&mut two_stop);
            two_stop.truncate(self.config.two_stop_cap);
        }

        debug!(
            %origin,
            %destination,
            direct = direct.len(),
            one_stop = one_stop.len(),
            two_stop = two_stop.len(),
            "search complete"
        );

        Ok(SearchOutcome {
            origin,
            destination,
            direct,
            one_stop,
            two_stop,
        })
    }

    /// Nonstop legs for the pair, as direct itineraries.
    fn find_direct(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        options: &SearchOptions,
    ) -> Result<Vec<Itinerary>, SearchError> {
        let legs = self
            .legs
            .find_legs(&LegFilter::active_between(origin, destination))?;

        Ok(legs
            .into_iter()
            .filter(|leg| operates(leg, options))
            .map(Itinerary::direct)
            .collect())
    }

    /// All admissible one-stop itineraries, uncapped and unranked.
    fn find_one_stop(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        international: bool,
        min_layover: i64,
        max_layover: i64,
        options: &SearchOptions,
    ) -> Result<Vec<Itinerary>, SearchError> {
        let outbound = self.legs.find_legs(&LegFilter::active_from(origin))?;
        let inbound = self.legs.find_legs(&LegFilter::active_to(destination))?;

        let inbound_by_origin = index_by_origin(&inbound);
        let mut results = Vec::new();

        for first in &outbound {
            let connection = first.destination();
            // A connection through either endpoint would revisit it.
            if connection == origin || connection == destination {
                continue;
            }
            if !operates(first, options) {
                continue;
            }

            let Some(candidates) = inbound_by_origin.get(&connection) else {
                continue;
            };

            for second in candidates {
                let minutes = layover_minutes(first.arrival(), second.departure());
                if minutes <= 0 {
                    // Malformed data; the wraparound rule makes this
                    // unreachable, but a bad row must not abort the search.
                    continue;
                }
                if minutes < min_layover || minutes > max_layover {
                    continue;
                }

                let layover = self.build_layover(connection, minutes, international);
                if let Ok(itinerary) =
                    Itinerary::one_stop(first.clone(), (*second).clone(), layover)
                {
                    results.push(itinerary);
                }
            }
        }

        Ok(results)
    }

    /// All admissible two-stop itineraries, uncapped and unranked.
    ///
    /// Only called when the direct and one-stop searches found nothing.
    fn find_two_stop(
        &self,
        origin: AirportCode,
        destination: AirportCode,
        international: bool,
        min_layover: i64,
        max_layover: i64,
        options: &SearchOptions,
    ) -> Result<Vec<Itinerary>, SearchError> {
        let outbound = self.legs.find_legs(&LegFilter::active_from(origin))?;
        let inbound = self.legs.find_legs(&LegFilter::active_to(destination))?;

        let inbound_by_origin = index_by_origin(&inbound);

        // One middle-leg query per distinct first stop.
        let mut middles: HashMap<AirportCode, Vec<FlightLeg>> = HashMap::new();

        let mut results = Vec::new();

        for first in &outbound {
            let stop_one = first.destination();
            if stop_one == origin || stop_one == destination {
                continue;
            }
            if !operates(first, options) {
                continue;
            }

            let middle_legs = match middles.entry(stop_one) {
                std::collections::hash_map::Entry::Occupied(e) => e.into_mut(),
                std::collections::hash_map::Entry::Vacant(e) => {
                    e.insert(self.legs.find_legs(&LegFilter::active_from(stop_one))?)
                }
            };

            for second in middle_legs.iter() {
                let stop_two = second.destination();
                // Four pairwise-distinct airports on the routing.
                if stop_two == origin || stop_two == destination || stop_two == stop_one {
                    continue;
                }

                let first_layover = layover_minutes(first.arrival(), second.departure());
                if first_layover < min_layover || first_layover > max_layover {
                    continue;
                }

                let Some(finals) = inbound_by_origin.get(&stop_two) else {
                    continue;
                };

                for third in finals {
                    let second_layover = layover_minutes(second.arrival(), third.departure());
                    if second_layover < min_layover || second_layover > max_layover {
                        continue;
                    }

                    let layovers = [
                        self.build_layover(stop_one, first_layover, international),
                        self.build_layover(stop_two, second_layover, international),
                    ];
                    if let Ok(itinerary) = Itinerary::two_stop(
                        first.clone(),
                        second.clone(),
                        (*third).clone(),
                        layovers,
                    ) {
                        results.push(itinerary);
                    }
                }
            }
        }

        Ok(results)
    }

    /// Classify and assemble a layover at `airport`.
    fn build_layover(&self, airport: AirportCode, minutes: i64, international: bool) -> Layover {
        let is_hub = self.hubs.contains(airport);
        let assessment = classify(minutes, is_hub, international);
        // Safe: callers only pass admissible (positive) durations.
        Layover::new(airport, minutes, is_hub, international, assessment.tier)
            .expect("admissible layover is positive")
    }

    /// Best-effort international annotation: compare countries of the
    /// overall origin and final destination when both are known.
    fn is_international(&self, origin: AirportCode, destination: AirportCode) -> bool {
        match (self.country_of(origin), self.country_of(destination)) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    fn country_of(&self, code: AirportCode) -> Option<String> {
        match self.airports.airport(code) {
            Ok(airport) => airport.map(|a| a.country),
            Err(e) => {
                // Enrichment only; a metadata failure never fails a search.
                debug!(%code, error = %e, "airport metadata lookup failed");
                None
            }
        }
    }
}

/// Group legs by their origin airport.
fn index_by_origin(legs: &[FlightLeg]) -> HashMap<AirportCode, Vec<&FlightLeg>> {
    let mut index: HashMap<AirportCode, Vec<&FlightLeg>> = HashMap::new();
    for leg in legs {
        index.entry(leg.origin()).or_default().push(leg);
    }
    index
}

/// Day-of-operation filter, applied to direct legs and the first leg of
/// connections.
fn operates(leg: &FlightLeg, options: &SearchOptions) -> bool {
    options
        .departure_day
        .is_none_or(|day| leg.days().operates_on(day))
}
