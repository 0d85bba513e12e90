//! Clock time handling for schedule data.
//!
//! The schedule source provides departure and arrival times as bare "HH:MM"
//! strings with no date or timezone attached. This module provides a
//! dateless clock-time type plus the wraparound arithmetic used to compute
//! layovers between legs, where a connection departing at a clock time
//! numerically earlier than the prior arrival is assumed to be the next day.

use std::cmp::Ordering;
use std::fmt;

/// Minutes in a day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A local clock time with minute precision and no date.
///
/// Schedule data carries only "HH:MM" local times, so two `ClockTime`
/// values by themselves cannot say which came first across midnight;
/// [`layover_minutes`] encodes the next-day assumption used for
/// connections.
///
/// # Examples
///
/// ```
/// use flight_server::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.minutes_since_midnight(), 14 * 60 + 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Create a clock time from hour and minute components.
    ///
    /// Returns `Err` if `hour > 23` or `minute > 59`.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use flight_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        (self.minutes % 60) as u32
    }

    /// Returns minutes elapsed since midnight (0..1440).
    pub fn minutes_since_midnight(&self) -> i64 {
        self.minutes as i64
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes.cmp(&other.minutes)
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Compute the layover between an arriving leg and a connecting departure.
///
/// Returns `departure - arrival` in minutes, adding a full day when the
/// difference is zero or negative: a connection departing at a clock time
/// numerically at or before the prior arrival is assumed to leave the next
/// day. The result is therefore always in `1..=1440`.
///
/// # Examples
///
/// ```
/// use flight_server::domain::{ClockTime, layover_minutes};
///
/// let arr = ClockTime::parse_hhmm("23:50").unwrap();
/// let dep = ClockTime::parse_hhmm("00:10").unwrap();
/// assert_eq!(layover_minutes(arr, dep), 20);
///
/// let arr = ClockTime::parse_hhmm("05:20").unwrap();
/// let dep = ClockTime::parse_hhmm("23:35").unwrap();
/// assert_eq!(layover_minutes(arr, dep), 1095);
/// ```
pub fn layover_minutes(arrival: ClockTime, departure: ClockTime) -> i64 {
    let diff = departure.minutes_since_midnight() - arrival.minutes_since_midnight();
    if diff <= 0 { diff + MINUTES_PER_DAY } else { diff }
}

/// Format a minute count as "Hh Mm" for display, e.g. `135` -> `"2h 15m"`.
pub fn format_duration_hm(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
