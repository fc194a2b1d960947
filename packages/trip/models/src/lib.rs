#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Bike-share trip record types.
//!
//! A [`Trip`] is one row of the trip log, already validated by the loader:
//! timestamps parsed, station references resolved to numeric ids where the
//! source provided them. The collection is immutable once loaded; all
//! traffic numbers are derived from it on demand.

mod time;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use time::{
    InvalidTimeOfDayError, MINUTES_PER_DAY, ParseTimeOfDayError, TimeOfDay,
};

/// A single bike-share trip.
///
/// `ended_at >= started_at` is expected of well-formed data but not
/// enforced; a backwards trip simply contributes its two clock times like
/// any other row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    /// Source ride identifier.
    pub ride_id: String,
    /// Kind of bike used for the trip.
    pub bike_type: BikeType,
    /// Trip start instant, local clock time as encoded in the source.
    pub started_at: NaiveDateTime,
    /// Trip end instant, local clock time as encoded in the source.
    pub ended_at: NaiveDateTime,
    /// Departure station id, if the source row matched a station.
    pub start_station_id: Option<u32>,
    /// Arrival station id, if the source row matched a station.
    pub end_station_id: Option<u32>,
    /// Whether the rider holds an annual membership.
    pub member: Membership,
}

impl Trip {
    /// Clock time at which the trip started.
    #[must_use]
    pub fn start_time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_datetime(&self.started_at)
    }

    /// Clock time at which the trip ended.
    #[must_use]
    pub fn end_time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_datetime(&self.ended_at)
    }
}

/// Kind of bike used for a trip.
///
/// Unrecognized source values are preserved verbatim rather than dropped;
/// the aggregation pipeline does not branch on bike type.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(from = "String", into = "String")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BikeType {
    /// Pedal bike.
    ClassicBike,
    /// E-bike.
    ElectricBike,
    /// Any bike type this build does not know about.
    #[strum(default)]
    Other(String),
}

impl From<String> for BikeType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => Self::Other(value),
        }
    }
}

impl From<BikeType> for String {
    fn from(value: BikeType) -> Self {
        value.to_string()
    }
}

/// Rider membership flag.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Membership {
    /// Annual member.
    Member,
    /// Casual (pay-per-ride) rider.
    Casual,
}

impl Membership {
    /// Returns `true` for annual members.
    #[must_use]
    pub const fn is_member(self) -> bool {
        matches!(self, Self::Member)
    }
}
