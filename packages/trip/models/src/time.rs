//! Time-of-day representation on a circular 24-hour clock.

use chrono::{NaiveDateTime, Timelike as _};
use serde::{Deserialize, Serialize};

/// Number of minutes on the 24-hour clock.
pub const MINUTES_PER_DAY: u16 = 1440;

/// A clock time expressed as minutes since midnight (`0..=1439`).
///
/// The time domain is circular: windows built over it may wrap past
/// midnight. Ordering compares raw minute values; circular containment
/// lives with the window types that need it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: Self = Self(0);

    /// Creates a time of day from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` is not below [`MINUTES_PER_DAY`].
    pub const fn new(minutes: u16) -> Result<Self, InvalidTimeOfDayError> {
        if minutes < MINUTES_PER_DAY {
            Ok(Self(minutes))
        } else {
            Err(InvalidTimeOfDayError { minutes })
        }
    }

    /// Creates a time of day from minutes since midnight, wrapping values
    /// past the end of the day back around the clock.
    #[must_use]
    pub const fn wrapping(minutes: u16) -> Self {
        Self(minutes % MINUTES_PER_DAY)
    }

    /// Creates a time of day from an hour/minute pair.
    ///
    /// # Errors
    ///
    /// Returns an error if `hour >= 24` or `minute >= 60`.
    pub const fn from_hm(hour: u16, minute: u16) -> Result<Self, InvalidTimeOfDayError> {
        if hour < 24 && minute < 60 {
            Ok(Self(hour * 60 + minute))
        } else {
            Err(InvalidTimeOfDayError {
                minutes: hour.saturating_mul(60).saturating_add(minute),
            })
        }
    }

    /// Extracts the clock time from a timestamp, discarding the date.
    #[allow(clippy::cast_possible_truncation)] // hour*60+minute < 1440
    #[must_use]
    pub fn from_datetime(instant: &NaiveDateTime) -> Self {
        Self((instant.hour() * 60 + instant.minute()) as u16)
    }

    /// Minutes since midnight.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Hour on the 24-hour clock.
    #[must_use]
    pub const fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute within the hour.
    #[must_use]
    pub const fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl TryFrom<u16> for TimeOfDay {
    type Error = InvalidTimeOfDayError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<TimeOfDay> for u16 {
    fn from(time: TimeOfDay) -> Self {
        time.minutes()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = ParseTimeOfDayError;

    /// Parses either a zero-padded `HH:MM` clock label or a bare
    /// minutes-since-midnight integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((hour_str, minute_str)) = trimmed.split_once(':') {
            let hour: u16 = hour_str
                .parse()
                .map_err(|_| ParseTimeOfDayError::new(trimmed))?;
            let minute: u16 = minute_str
                .parse()
                .map_err(|_| ParseTimeOfDayError::new(trimmed))?;
            return Self::from_hm(hour, minute).map_err(|_| ParseTimeOfDayError::new(trimmed));
        }

        let minutes: u16 = trimmed
            .parse()
            .map_err(|_| ParseTimeOfDayError::new(trimmed))?;
        Self::new(minutes).map_err(|_| ParseTimeOfDayError::new(trimmed))
    }
}

/// Error returned when a minutes value falls outside the 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTimeOfDayError {
    /// The out-of-range minutes value.
    pub minutes: u16,
}

impl std::fmt::Display for InvalidTimeOfDayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid time of day {}: expected 0-{}",
            self.minutes,
            MINUTES_PER_DAY - 1
        )
    }
}

impl std::error::Error for InvalidTimeOfDayError {}

/// Error returned when a time-of-day string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeOfDayError {
    /// The rejected input.
    pub input: String,
}

impl ParseTimeOfDayError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl std::fmt::Display for ParseTimeOfDayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid time of day {:?}: expected \"HH:MM\" or minutes since midnight",
            self.input
        )
    }
}

impl std::error::Error for ParseTimeOfDayError {}
