//! Operating-days bitset.
//!
//! The schedule source encodes the days a leg operates as a 7-character
//! bitstring, index 0 = Sunday, '1' = operates.

use std::fmt;

use chrono::Weekday;

/// Error returned when parsing an invalid days-of-week bitstring.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid days-of-week bitstring: {reason}")]
pub struct InvalidDaysOfWeek {
    reason: &'static str,
}

/// The days of the week a flight leg operates.
///
/// Parsed from the source's 7-character bitstring ("1111111" = daily),
/// index 0 = Sunday.
///
/// # Examples
///
/// ```
/// use flight_server::domain::DaysOfWeek;
/// use chrono::Weekday;
///
/// let weekends = DaysOfWeek::parse("1000001").unwrap();
/// assert!(weekends.operates_on(Weekday::Sun));
/// assert!(weekends.operates_on(Weekday::Sat));
/// assert!(!weekends.operates_on(Weekday::Wed));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaysOfWeek {
    // Bit i set = operates on day i, Sunday-first
    bits: u8,
}

impl DaysOfWeek {
    /// Every day of the week.
    pub fn daily() -> Self {
        Self { bits: 0b0111_1111 }
    }

    /// Parse from a 7-character bitstring, index 0 = Sunday.
    pub fn parse(s: &str) -> Result<Self, InvalidDaysOfWeek> {
        let bytes = s.as_bytes();
        if bytes.len() != 7 {
            return Err(InvalidDaysOfWeek {
                reason: "must be exactly 7 characters",
            });
        }

        let mut bits = 0u8;
        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'1' => bits |= 1 << i,
                b'0' => {}
                _ => {
                    return Err(InvalidDaysOfWeek {
                        reason: "characters must be '0' or '1'",
                    });
                }
            }
        }

        Ok(Self { bits })
    }

    /// Whether the leg operates on the given weekday.
    pub fn operates_on(&self, day: Weekday) -> bool {
        self.bits & (1 << sunday_index(day)) != 0
    }

    /// Whether the leg operates on no day at all.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Render back to the source's bitstring form.
    pub fn as_bitstring(&self) -> String {
        (0..7)
            .map(|i| if self.bits & (1 << i) != 0 { '1' } else { '0' })
            .collect()
    }
}

impl fmt::Debug for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaysOfWeek({})", self.as_bitstring())
    }
}

impl fmt::Display for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_bitstring())
    }
}

/// Sunday-first index of a weekday (Sunday = 0 .. Saturday = 6).
fn sunday_index(day: Weekday) -> u8 {
    match day {
        Weekday::Sun => 0,
        Weekday::Mon => 1,
        Weekday::Tue => 2,
        Weekday::Wed => 3,
        Weekday::Thu => 4,
        Weekday::Fri => 5,
        Weekday::Sat => 6,
    }
}
