//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::{ConnectionRecord, LegRecord};

/// Query parameters for the flight search endpoint.
#[derive(Debug, Deserialize)]
pub struct FlightSearchRequest {
    /// Origin airport code (case-insensitive)
    pub from: String,

    /// Destination airport code (case-insensitive)
    pub to: String,

    /// Optional departure date; filters legs by operating day
    pub date: Option<NaiveDate>,

    /// Whether to include connecting itineraries (default true)
    pub include_connections: Option<bool>,

    /// Cap on connecting itineraries (default from config)
    pub max_results: Option<usize>,
}

/// Response for the flight search endpoint.
#[derive(Debug, Serialize)]
pub struct FlightSearchResponse {
    /// Normalized origin code
    pub origin: String,

    /// Normalized destination code
    pub destination: String,

    /// Nonstop flights, ordered by departure time
    pub direct_flights: Vec<LegRecord>,

    /// Connecting itineraries (one-stop, then two-stop fallback), best first
    pub connecting_flights: Vec<ConnectionRecord>,

    /// Number of direct flights
    pub direct_count: usize,

    /// Number of connecting itineraries
    pub connecting_count: usize,

    /// Whether any direct flight exists
    pub has_direct: bool,

    /// Whether any connecting itinerary exists
    pub has_connections: bool,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
