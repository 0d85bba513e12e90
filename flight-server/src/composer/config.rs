//! Search configuration for the itinerary composer.
//!
//! All tunables are passed in at construction; there is no module-level
//! state.

use chrono::Weekday;

/// Result cap used by interactive connection-analysis callers that want a
/// wider scan than the default report.
pub const CONNECTION_SCAN_RESULTS: usize = 20;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum admissible layover (minutes). Connections tighter than this
    /// are excluded from composed itineraries entirely.
    pub min_layover_mins: i64,

    /// Maximum admissible layover (minutes). Connections longer than this
    /// are excluded from composed itineraries entirely.
    pub max_layover_mins: i64,

    /// Default cap on returned connecting itineraries. Direct flights are
    /// never capped.
    pub max_results: usize,

    /// Cap on returned two-stop itineraries from the fallback search.
    pub two_stop_cap: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        min_layover_mins: i64,
        max_layover_mins: i64,
        max_results: usize,
        two_stop_cap: usize,
    ) -> Self {
        Self {
            min_layover_mins,
            max_layover_mins,
            max_results,
            two_stop_cap,
        }
    }

    /// Whether a layover duration falls inside the admissibility window.
    pub fn admissible(&self, layover_mins: i64) -> bool {
        layover_mins >= self.min_layover_mins && layover_mins <= self.max_layover_mins
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_layover_mins: 120,  // 2 hours
            max_layover_mins: 1440, // 24 hours
            max_results: 5,
            two_stop_cap: 5,
        }
    }
}

/// Per-call options for [`Composer::search_with_options`].
///
/// [`Composer::search_with_options`]: super::Composer::search_with_options
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Cap on connecting itineraries; falls back to the config default.
    pub max_results: Option<usize>,

    /// Caller-side relaxation of the layover floor (e.g. 60 for the
    /// interactive connection analyzer). Falls back to the config window.
    pub min_layover_mins: Option<i64>,

    /// When set, direct legs and the first leg of each connection must
    /// operate on this weekday. Later legs are not filtered: schedule
    /// times carry no date, so the operating day of an overnight
    /// connection is ambiguous.
    pub departure_day: Option<Weekday>,
}
