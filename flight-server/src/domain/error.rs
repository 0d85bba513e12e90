//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from store/IO errors.

use super::AirportCode;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A leg whose origin equals its destination
    #[error("self-loop leg: origin and destination are both {0}")]
    SelfLoop(AirportCode),

    /// A leg with a non-positive flight duration
    #[error("invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    /// Consecutive legs of an itinerary don't share an airport
    #[error("legs do not connect: arrival at {0}, departure from {1}")]
    LegsNotConnected(AirportCode, AirportCode),

    /// An itinerary revisits its own origin or final destination
    #[error("itinerary revisits endpoint {0} as an intermediate stop")]
    RevisitsEndpoint(AirportCode),

    /// A layover that is not positive even after overnight adjustment
    #[error("invalid layover: {0} minutes (must be positive)")]
    InvalidLayover(i64),
}
