//! HTTP surface.
//!
//! A thin axum layer over the composer: one search endpoint plus a health
//! check. All business rules live in the engine.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, FlightSearchRequest, FlightSearchResponse};
pub use routes::{AppError, create_router};
pub use state::AppState;
