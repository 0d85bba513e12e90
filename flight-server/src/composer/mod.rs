//! Itinerary composition and layover risk engine.
//!
//! This module answers: "how do I get from this airport to that one?"
//! It composes direct, one-stop and two-stop itineraries by joining
//! scheduled legs on shared airports, enforces the layover admissibility
//! window, and scores every layover for connection risk.

mod config;
mod rank;
mod risk;
mod search;

pub use config::{CONNECTION_SCAN_RESULTS, SearchConfig, SearchOptions};
pub use rank::{rank_direct, rank_one_stop, rank_two_stop};
pub use risk::{RiskAssessment, classify};
pub use search::{Composer, SearchError, SearchOutcome};
