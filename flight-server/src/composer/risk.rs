//! Layover risk classification.
//!
//! A pure, total function from layover duration (plus hub/international
//! annotations) to a risk assessment. The tier depends only on the
//! duration; hub status and international routing only raise the
//! informational minimum-connection figure shown to the user.

use crate::domain::{RiskTier, format_duration_hm};

/// Below this many minutes a connection is high risk.
const TIGHT_THRESHOLD_MINS: i64 = 120;

/// From this many minutes on a connection is comfortable.
const COMFORTABLE_THRESHOLD_MINS: i64 = 180;

/// Baseline minimum connection time for a domestic transfer (minutes).
const DOMESTIC_MIN_CONNECTION_MINS: i64 = 60;

/// Baseline minimum connection time for an international transfer (minutes).
const INTERNATIONAL_MIN_CONNECTION_MINS: i64 = 120;

/// Extra minimum connection time at hub airports (minutes).
const HUB_BUFFER_MINS: i64 = 30;

/// The classifier's verdict on a single layover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Risk tier, derived solely from the layover duration.
    pub tier: RiskTier,

    /// Short display label ("RISKY" / "TIGHT" / "COMFORTABLE").
    pub label: &'static str,

    /// One-sentence explanation of the verdict.
    pub message: &'static str,

    /// What the traveller should do about it.
    pub recommendation: &'static str,

    /// Informational minimum connection time for this kind of transfer.
    /// Does not affect the tier.
    pub min_required_mins: i64,

    /// The layover duration formatted for display, e.g. "2h 15m".
    pub duration_display: String,
}

/// Classify a layover.
///
/// The composer guarantees `minutes > 0`; durations outside the
/// admissibility window never reach this function through normal search,
/// but the classification itself is total over positive durations.
///
/// # Examples
///
/// ```
/// use flight_server::composer::classify;
/// use flight_server::domain::RiskTier;
///
/// assert_eq!(classify(119, false, false).tier, RiskTier::High);
/// assert_eq!(classify(120, false, false).tier, RiskTier::Medium);
/// assert_eq!(classify(180, false, false).tier, RiskTier::Low);
/// ```
pub fn classify(minutes: i64, is_hub: bool, is_international: bool) -> RiskAssessment {
    debug_assert!(minutes > 0, "composer must reject non-positive layovers");

    let mut min_required_mins = if is_international {
        INTERNATIONAL_MIN_CONNECTION_MINS
    } else {
        DOMESTIC_MIN_CONNECTION_MINS
    };
    if is_hub {
        min_required_mins += HUB_BUFFER_MINS;
    }

    let (tier, message, recommendation) = if minutes < TIGHT_THRESHOLD_MINS {
        (
            RiskTier::High,
            "Very tight connection with a high risk of missing the onward flight.",
            "Book a later onward flight or allow more time between legs.",
        )
    } else if minutes < COMFORTABLE_THRESHOLD_MINS {
        (
            RiskTier::Medium,
            "Manageable connection, but you will need to move quickly between gates.",
            "Check the terminal map before landing and head straight to your gate.",
        )
    } else {
        (
            RiskTier::Low,
            "Plenty of time to make the connection.",
            "Relax - there is no need to rush.",
        )
    };

    RiskAssessment {
        tier,
        label: tier.label(),
        message,
        recommendation,
        min_required_mins,
        duration_display: format_duration_hm(minutes),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The tier is a function of minutes alone
        #[test]
        fn tier_depends_only_on_minutes(
            minutes in 1i64..3000,
            is_hub in proptest::bool::ANY,
            is_international in proptest::bool::ANY,
        ) {
            let annotated = classify(minutes, is_hub, is_international);
            let bare = classify(minutes, false, false);
            prop_assert_eq!(annotated.tier, bare.tier);
            prop_assert_eq!(annotated.message, bare.message);
        }

        /// Every positive duration maps to exactly one tier, in band order
        #[test]
        fn tiers_partition_the_duration_axis(minutes in 1i64..3000) {
            let tier = classify(minutes, false, false).tier;
            let expected = if minutes < 120 {
                RiskTier::High
            } else if minutes < 180 {
                RiskTier::Medium
            } else {
                RiskTier::Low
            };
            prop_assert_eq!(tier, expected);
        }
    }
}
