//! Flight leg type.
//!
//! A `FlightLeg` is one scheduled, possibly repeating, flight segment
//! between two airports at fixed local clock times. Legs are created by
//! ingestion and are read-only to the engine; validation happens once at
//! construction so downstream code can trust every leg it sees.

use std::fmt;

use super::{AirportCode, ClockTime, DaysOfWeek, DomainError};

/// Scheduling status of a leg.
///
/// Only `Active` legs participate in itinerary composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegStatus {
    Active,
    Cancelled,
}

impl LegStatus {
    /// Stable lowercase name, as stored in the flights table.
    pub fn as_str(&self) -> &'static str {
        match self {
            LegStatus::Active => "active",
            LegStatus::Cancelled => "cancelled",
        }
    }

    /// Parse from the stored name. Unknown values map to `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(LegStatus::Active),
            "cancelled" => Some(LegStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for LegStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled flight segment.
///
/// # Invariants
///
/// - `origin != destination` (no self-loop legs)
/// - `duration_minutes > 0`
///
/// Both are enforced by [`FlightLeg::new`]; records violating them are
/// rejected at the store boundary rather than propagated into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLeg {
    flight_number: String,
    airline_code: String,
    airline_name: String,
    origin: AirportCode,
    destination: AirportCode,
    departure: ClockTime,
    arrival: ClockTime,
    duration_minutes: i64,
    aircraft_type: Option<String>,
    days: DaysOfWeek,
    status: LegStatus,
}

impl FlightLeg {
    /// Construct a leg, validating the domain invariants.
    ///
    /// The leg defaults to daily operation, active status, and no aircraft
    /// type; use the `with_*` methods to override.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `origin == destination` or `duration_minutes <= 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::{AirportCode, ClockTime, FlightLeg};
    ///
    /// let leg = FlightLeg::new(
    ///     "PR101",
    ///     "PR",
    ///     "Philippine Airlines",
    ///     AirportCode::parse("MNL").unwrap(),
    ///     AirportCode::parse("NRT").unwrap(),
    ///     ClockTime::parse_hhmm("22:05").unwrap(),
    ///     ClockTime::parse_hhmm("02:35").unwrap(),
    ///     270,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(leg.flight_number(), "PR101");
    /// assert_eq!(leg.duration_minutes(), 270);
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flight_number: impl Into<String>,
        airline_code: impl Into<String>,
        airline_name: impl Into<String>,
        origin: AirportCode,
        destination: AirportCode,
        departure: ClockTime,
        arrival: ClockTime,
        duration_minutes: i64,
    ) -> Result<Self, DomainError> {
        if origin == destination {
            return Err(DomainError::SelfLoop(origin));
        }
        if duration_minutes <= 0 {
            return Err(DomainError::InvalidDuration(duration_minutes));
        }

        Ok(Self {
            flight_number: flight_number.into(),
            airline_code: airline_code.into(),
            airline_name: airline_name.into(),
            origin,
            destination,
            departure,
            arrival,
            duration_minutes,
            aircraft_type: None,
            days: DaysOfWeek::daily(),
            status: LegStatus::Active,
        })
    }

    /// Set the aircraft type (free text from the source).
    pub fn with_aircraft_type(mut self, aircraft_type: impl Into<String>) -> Self {
        self.aircraft_type = Some(aircraft_type.into());
        self
    }

    /// Set the operating days.
    pub fn with_days(mut self, days: DaysOfWeek) -> Self {
        self.days = days;
        self
    }

    /// Set the scheduling status.
    pub fn with_status(mut self, status: LegStatus) -> Self {
        self.status = status;
        self
    }

    /// Carrier-prefixed flight number, e.g. "PR101".
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Two-letter airline code.
    pub fn airline_code(&self) -> &str {
        &self.airline_code
    }

    /// Airline display name.
    pub fn airline_name(&self) -> &str {
        &self.airline_name
    }

    /// Origin airport code.
    pub fn origin(&self) -> AirportCode {
        self.origin
    }

    /// Destination airport code.
    pub fn destination(&self) -> AirportCode {
        self.destination
    }

    /// Scheduled local departure time.
    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Scheduled local arrival time.
    pub fn arrival(&self) -> ClockTime {
        self.arrival
    }

    /// Flight duration in minutes (guaranteed positive).
    pub fn duration_minutes(&self) -> i64 {
        self.duration_minutes
    }

    /// Aircraft type, if known.
    pub fn aircraft_type(&self) -> Option<&str> {
        self.aircraft_type.as_deref()
    }

    /// Days of the week this leg operates.
    pub fn days(&self) -> DaysOfWeek {
        self.days
    }

    /// Scheduling status.
    pub fn status(&self) -> LegStatus {
        self.status
    }

    /// Whether this leg participates in searches.
    pub fn is_active(&self) -> bool {
        self.status == LegStatus::Active
    }
}
