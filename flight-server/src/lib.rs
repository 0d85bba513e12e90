//! Flight schedule lookup and itinerary composition.
//!
//! Stores scheduled flight legs and airport metadata in SQLite, composes
//! direct and connecting itineraries on demand, and scores every layover
//! for connection risk.

pub mod composer;
pub mod domain;
pub mod hubs;
pub mod report;
pub mod store;
pub mod web;
