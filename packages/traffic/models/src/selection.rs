//! The user's current time-of-day selection.

use bikewatching_trip_models::TimeOfDay;
use serde::{Deserialize, Serialize};

/// The single time-selection input driving recomputation.
///
/// "Any time" is a distinct variant rather than a reserved minute value, so
/// a real selection of 00:01 can never be mistaken for the unfiltered
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeSelection {
    /// No filter; every trip counts.
    #[default]
    AnyTime,
    /// Trips within ±60 minutes of this clock time count.
    At(TimeOfDay),
}

impl TimeSelection {
    /// Returns `true` for the unfiltered sentinel.
    #[must_use]
    pub const fn is_any_time(self) -> bool {
        matches!(self, Self::AnyTime)
    }

    /// The selected minute of the day, if a specific time is selected.
    #[must_use]
    pub const fn minutes(self) -> Option<u16> {
        match self {
            Self::AnyTime => None,
            Self::At(time) => Some(time.minutes()),
        }
    }
}

impl From<TimeOfDay> for TimeSelection {
    fn from(time: TimeOfDay) -> Self {
        Self::At(time)
    }
}

impl std::fmt::Display for TimeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnyTime => write!(f, "Any time"),
            Self::At(time) => write!(f, "{time}"),
        }
    }
}

impl std::str::FromStr for TimeSelection {
    type Err = ParseTimeSelectionError;

    /// Parses `any`/`anytime` (case-insensitive), an `HH:MM` clock label,
    /// or a bare minutes-since-midnight integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("any") || trimmed.eq_ignore_ascii_case("anytime") {
            return Ok(Self::AnyTime);
        }
        trimmed
            .parse::<TimeOfDay>()
            .map(Self::At)
            .map_err(|_| ParseTimeSelectionError {
                input: trimmed.to_string(),
            })
    }
}

/// Error returned when a time-selection string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeSelectionError {
    /// The rejected input.
    pub input: String,
}

impl std::fmt::Display for ParseTimeSelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid time selection {:?}: expected \"any\", \"HH:MM\", or minutes since midnight",
            self.input
        )
    }
}

impl std::error::Error for ParseTimeSelectionError {}
