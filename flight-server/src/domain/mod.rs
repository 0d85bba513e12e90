//! Domain types for the flight itinerary engine.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airport;
mod days;
mod error;
mod itinerary;
mod leg;
mod time;

pub use airport::{Airport, AirportCode, InvalidAirportCode};
pub use days::{DaysOfWeek, InvalidDaysOfWeek};
pub use error::DomainError;
pub use itinerary::{Itinerary, Layover, RiskTier};
pub use leg::{FlightLeg, LegStatus};
pub use time::{
    ClockTime, MINUTES_PER_DAY, TimeError, format_duration_hm, layover_minutes,
};
