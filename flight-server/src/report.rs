//! Result formatting.
//!
//! Maps the composer's itinerary variants into flat, UI/API-friendly
//! records, and renders the plain-text report used by the CLI. This layer
//! is presentation only: no business rules beyond flattening and field
//! renaming.

use serde::Serialize;

use crate::composer::{SearchOutcome, classify};
use crate::domain::{
    AirportCode, FlightLeg, Itinerary, Layover, RiskTier, format_duration_hm,
};
use crate::store::AirportStore;

/// One flight leg, flattened for display.
#[derive(Debug, Clone, Serialize)]
pub struct LegRecord {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_name: Option<String>,
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_name: Option<String>,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
    pub days_of_week: String,
}

/// One layover, with its risk verdict spelled out.
#[derive(Debug, Clone, Serialize)]
pub struct LayoverRecord {
    pub airport: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airport_name: Option<String>,
    pub minutes: i64,
    pub duration: String,
    pub is_hub: bool,
    pub is_international: bool,
    pub risk_tier: RiskTier,
    pub risk_label: &'static str,
    pub message: &'static str,
    pub recommendation: &'static str,
    pub min_required_minutes: i64,
}

/// `layover_minutes` is a scalar for one-stop records and a pair for
/// two-stop records.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LayoverMinutes {
    One(i64),
    Two([i64; 2]),
}

/// A connecting itinerary, flattened.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionRecord {
    pub legs: Vec<LegRecord>,
    pub layovers: Vec<LayoverRecord>,
    pub layover_minutes: LayoverMinutes,
    pub total_duration_minutes: i64,
    pub stops: usize,
}

/// Formats itineraries for presentation, enriching airport names from the
/// airport store when records exist.
pub struct ReportFormatter<'a, A: AirportStore> {
    airports: &'a A,
}

impl<'a, A: AirportStore> ReportFormatter<'a, A> {
    /// Create a formatter over an airport store.
    pub fn new(airports: &'a A) -> Self {
        Self { airports }
    }

    /// Display name for an airport, if its record exists. Lookup failures
    /// degrade to `None`; enrichment never fails a report.
    fn airport_name(&self, code: AirportCode) -> Option<String> {
        self.airports
            .airport(code)
            .ok()
            .flatten()
            .map(|a| format!("{} ({})", a.name, a.city))
    }

    /// Flatten one leg.
    pub fn leg_record(&self, leg: &FlightLeg) -> LegRecord {
        LegRecord {
            flight_number: leg.flight_number().to_string(),
            airline: leg.airline_name().to_string(),
            origin: leg.origin().to_string(),
            origin_name: self.airport_name(leg.origin()),
            destination: leg.destination().to_string(),
            destination_name: self.airport_name(leg.destination()),
            departure_time: leg.departure().to_string(),
            arrival_time: leg.arrival().to_string(),
            duration_minutes: leg.duration_minutes(),
            aircraft_type: leg.aircraft_type().map(str::to_string),
            days_of_week: leg.days().as_bitstring(),
        }
    }

    /// Flatten one layover, re-deriving the full risk assessment.
    pub fn layover_record(&self, layover: &Layover) -> LayoverRecord {
        let assessment = classify(
            layover.minutes(),
            layover.is_hub(),
            layover.is_international(),
        );

        LayoverRecord {
            airport: layover.airport().to_string(),
            airport_name: self.airport_name(layover.airport()),
            minutes: layover.minutes(),
            duration: assessment.duration_display,
            is_hub: layover.is_hub(),
            is_international: layover.is_international(),
            risk_tier: layover.tier(),
            risk_label: assessment.label,
            message: assessment.message,
            recommendation: assessment.recommendation,
            min_required_minutes: assessment.min_required_mins,
        }
    }

    /// A direct itinerary as a single-leg record.
    ///
    /// Returns `None` for connecting itineraries.
    pub fn direct_record(&self, itinerary: &Itinerary) -> Option<LegRecord> {
        match itinerary {
            Itinerary::Direct { leg } => Some(self.leg_record(leg)),
            _ => None,
        }
    }

    /// A connecting itinerary as a legs-plus-layovers record.
    ///
    /// Returns `None` for direct itineraries.
    pub fn connection_record(&self, itinerary: &Itinerary) -> Option<ConnectionRecord> {
        let layover_minutes = match itinerary.layovers() {
            [] => return None,
            [one] => LayoverMinutes::One(one.minutes()),
            [first, second] => LayoverMinutes::Two([first.minutes(), second.minutes()]),
            _ => unreachable!("itineraries have at most two layovers"),
        };

        Some(ConnectionRecord {
            legs: itinerary.legs().iter().map(|l| self.leg_record(l)).collect(),
            layovers: itinerary
                .layovers()
                .iter()
                .map(|l| self.layover_record(l))
                .collect(),
            layover_minutes,
            total_duration_minutes: itinerary.total_travel_minutes(),
            stops: itinerary.stop_count(),
        })
    }

    /// Render the plain-text report printed by the CLI.
    pub fn render_text(&self, outcome: &SearchOutcome) -> String {
        let mut out = String::new();
        let header = format!("Flights {} -> {}", outcome.origin, outcome.destination);
        out.push_str(&header);
        out.push('\n');
        out.push_str(&"=".repeat(header.len()));
        out.push_str("\n\n");

        if outcome.is_empty() {
            out.push_str("No direct or connecting flights found.\n");
            return out;
        }

        if !outcome.direct.is_empty() {
            out.push_str(&format!("Direct flights ({}):\n", outcome.direct.len()));
            for itinerary in &outcome.direct {
                let leg = itinerary.legs()[0];
                out.push_str(&format!(
                    "  {}  {} {} -> {} {}  ({})  {}{}\n",
                    leg.flight_number(),
                    leg.origin(),
                    leg.departure(),
                    leg.destination(),
                    leg.arrival(),
                    format_duration_hm(leg.duration_minutes()),
                    leg.airline_name(),
                    leg.aircraft_type()
                        .map(|a| format!("  [{a}]"))
                        .unwrap_or_default(),
                ));
            }
            out.push('\n');
        }

        self.render_connections(&mut out, "One-stop connections", &outcome.one_stop);
        self.render_connections(&mut out, "Two-stop connections", &outcome.two_stop);

        out
    }

    fn render_connections(&self, out: &mut String, title: &str, itineraries: &[Itinerary]) {
        if itineraries.is_empty() {
            return;
        }

        out.push_str(&format!("{title} ({}):\n", itineraries.len()));
        for (i, itinerary) in itineraries.iter().enumerate() {
            out.push_str(&format!("  {}.", i + 1));
            let layovers = itinerary.layovers();
            for (j, leg) in itinerary.legs().iter().enumerate() {
                if j > 0 {
                    let layover = &layovers[j - 1];
                    let record = self.layover_record(layover);
                    out.push_str(&format!(
                        "     layover at {} - {} [{}]{}\n",
                        layover.airport(),
                        record.duration,
                        record.risk_label,
                        if layover.is_hub() { " (hub)" } else { "" },
                    ));
                    out.push_str(&format!("       {}\n", record.recommendation));
                    out.push_str("    ");
                }
                out.push_str(&format!(
                    " {}  {} {} -> {} {}\n",
                    leg.flight_number(),
                    leg.origin(),
                    leg.departure(),
                    leg.destination(),
                    leg.arrival(),
                ));
            }
            out.push_str(&format!(
                "     total travel time {}\n",
                format_duration_hm(itinerary.total_travel_minutes())
            ));
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airport, ClockTime, Layover};
    use crate::store::MemoryStore;

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

    fn layover(airport: &str, minutes: i64, tier: RiskTier) -> Layover {
        Layover::new(code(airport), minutes, false, false, tier).unwrap()
    }

    fn one_stop_fixture() -> Itinerary {
        Itinerary::one_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR102", "MNL", "LAX", "23:35", "19:20", 705),
            layover("MNL", 1095, RiskTier::Low),
        )
        .unwrap()
    }

    fn two_stop_fixture() -> Itinerary {
        Itinerary::two_stop(
            leg("PR216", "POM", "MNL", "02:40", "05:20", 160),
            leg("PR431", "MNL", "NRT", "09:45", "15:10", 265),
            leg("AC4", "NRT", "YVR", "19:05", "11:50", 525),
            [
                layover("MNL", 265, RiskTier::Low),
                layover("NRT", 235, RiskTier::Low),
            ],
        )
        .unwrap()
    }

    #[test]
    fn direct_record_is_single_leg() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let itinerary = Itinerary::direct(leg("PR101", "MNL", "NRT", "22:05", "02:35", 270));
        let record = formatter.direct_record(&itinerary).unwrap();

        assert_eq!(record.flight_number, "PR101");
        assert_eq!(record.origin, "MNL");
        assert_eq!(record.destination, "NRT");
        assert_eq!(record.departure_time, "22:05");
        assert_eq!(record.arrival_time, "02:35");
        assert_eq!(record.duration_minutes, 270);

        // Connecting itineraries don't flatten to a direct record
        assert!(formatter.direct_record(&one_stop_fixture()).is_none());
    }

    #[test]
    fn one_stop_record_has_scalar_layover_minutes() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let record = formatter.connection_record(&one_stop_fixture()).unwrap();
        assert_eq!(record.legs.len(), 2);
        assert_eq!(record.stops, 1);
        assert_eq!(record.total_duration_minutes, 160 + 705 + 1095);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["layover_minutes"], serde_json::json!(1095));
    }

    #[test]
    fn two_stop_record_has_layover_minutes_pair() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let record = formatter.connection_record(&two_stop_fixture()).unwrap();
        assert_eq!(record.legs.len(), 3);
        assert_eq!(record.stops, 2);
        assert_eq!(record.total_duration_minutes, 160 + 265 + 525 + 265 + 235);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["layover_minutes"], serde_json::json!([265, 235]));
    }

    #[test]
    fn direct_itinerary_has_no_connection_record() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let itinerary = Itinerary::direct(leg("PR101", "MNL", "NRT", "22:05", "02:35", 270));
        assert!(formatter.connection_record(&itinerary).is_none());
    }

    #[test]
    fn layover_record_carries_risk_verdict() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let record = formatter.layover_record(&layover("MNL", 150, RiskTier::Medium));
        assert_eq!(record.airport, "MNL");
        assert_eq!(record.minutes, 150);
        assert_eq!(record.duration, "2h 30m");
        assert_eq!(record.risk_tier, RiskTier::Medium);
        assert_eq!(record.risk_label, "TIGHT");
        assert!(record.message.contains("quickly"));
        assert_eq!(record.min_required_minutes, 60);
    }

    #[test]
    fn enrichment_uses_airport_store_and_degrades() {
        let mut store = MemoryStore::new();
        store.add_airport(Airport {
            code: code("MNL"),
            name: "Ninoy Aquino International".into(),
            city: "Manila".into(),
            country: "Philippines".into(),
            timezone: "Asia/Manila".into(),
            latitude: None,
            longitude: None,
        });
        let formatter = ReportFormatter::new(&store);

        let record = formatter.leg_record(&leg("PR101", "MNL", "NRT", "22:05", "02:35", 270));
        assert_eq!(
            record.origin_name.as_deref(),
            Some("Ninoy Aquino International (Manila)")
        );
        // NRT has no record; the field is simply absent, not an error
        assert!(record.destination_name.is_none());
    }

    #[test]
    fn text_report_empty_outcome() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let outcome = SearchOutcome {
            origin: code("MNL"),
            destination: code("ZAM"),
            direct: vec![],
            one_stop: vec![],
            two_stop: vec![],
        };

        let text = formatter.render_text(&outcome);
        assert!(text.contains("Flights MNL -> ZAM"));
        assert!(text.contains("No direct or connecting flights found."));
    }

    #[test]
    fn text_report_lists_sections() {
        let store = MemoryStore::new();
        let formatter = ReportFormatter::new(&store);

        let outcome = SearchOutcome {
            origin: code("POM"),
            destination: code("LAX"),
            direct: vec![],
            one_stop: vec![one_stop_fixture()],
            two_stop: vec![],
        };

        let text = formatter.render_text(&outcome);
        assert!(text.contains("One-stop connections (1):"));
        assert!(text.contains("PR216"));
        assert!(text.contains("layover at MNL - 18h 15m [COMFORTABLE]"));
        assert!(!text.contains("No direct or connecting flights found."));
    }
}
