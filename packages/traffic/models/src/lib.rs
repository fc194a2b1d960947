#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Derived per-station traffic counts.
//!
//! A [`TrafficSnapshot`] is the output of one aggregation pass: one
//! [`StationTraffic`] entry per registered station, zero-filled where a
//! station saw no trips. Snapshots are ephemeral; each recomputation
//! produces a fresh one that fully supersedes the last. Two snapshots are
//! never merged.

mod selection;

use std::collections::BTreeMap;

use serde::Serialize;

pub use selection::{ParseTimeSelectionError, TimeSelection};

/// Departure/arrival counts for one station under the current filter.
///
/// The total is computed from the two counts rather than stored, so
/// `total == departures + arrivals` holds for every value of this type
/// that can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationTraffic {
    station_id: u32,
    departures: u64,
    arrivals: u64,
}

impl StationTraffic {
    /// Creates a traffic entry for a station.
    #[must_use]
    pub const fn new(station_id: u32, departures: u64, arrivals: u64) -> Self {
        Self {
            station_id,
            departures,
            arrivals,
        }
    }

    /// Id of the station these counts belong to.
    #[must_use]
    pub const fn station_id(&self) -> u32 {
        self.station_id
    }

    /// Number of trips departing from this station.
    #[must_use]
    pub const fn departures(&self) -> u64 {
        self.departures
    }

    /// Number of trips arriving at this station.
    #[must_use]
    pub const fn arrivals(&self) -> u64 {
        self.arrivals
    }

    /// Total traffic: departures plus arrivals.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.departures + self.arrivals
    }

    /// Fraction of this station's traffic that is departures, in `[0, 1]`.
    ///
    /// A station with no traffic has a flow ratio of 0; the denominator is
    /// clamped to 1 so the ratio is always defined.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn flow_ratio(&self) -> f64 {
        self.departures as f64 / self.total().max(1) as f64
    }

    /// Tooltip line for this station, e.g. `"12 trips (7 departures, 5 arrivals)"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} trips ({} departures, {} arrivals)",
            self.total(),
            self.departures,
            self.arrivals
        )
    }
}

/// One aggregation pass over the filtered trip set.
///
/// Entries follow station registry order; lookups go through the station-id
/// index. Owned by the render cycle that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TrafficSnapshot {
    entries: Vec<StationTraffic>,
    #[serde(skip)]
    by_station: BTreeMap<u32, usize>,
}

impl TrafficSnapshot {
    /// Builds a snapshot from per-station entries, indexing by station id.
    ///
    /// If two entries share a station id, the first occurrence wins.
    #[must_use]
    pub fn from_entries(entries: Vec<StationTraffic>) -> Self {
        let mut by_station = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            by_station.entry(entry.station_id()).or_insert(index);
        }
        Self {
            entries,
            by_station,
        }
    }

    /// Looks up the traffic entry for a station.
    #[must_use]
    pub fn get(&self, station_id: u32) -> Option<&StationTraffic> {
        self.by_station
            .get(&station_id)
            .map(|&index| &self.entries[index])
    }

    /// Iterates entries in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, StationTraffic> {
        self.entries.iter()
    }

    /// The largest total across all entries; 0 for an empty snapshot.
    #[must_use]
    pub fn max_total(&self) -> u64 {
        self.entries
            .iter()
            .map(StationTraffic::total)
            .max()
            .unwrap_or(0)
    }

    /// Number of entries (one per registered station).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TrafficSnapshot {
    type Item = &'a StationTraffic;
    type IntoIter = std::slice::Iter<'a, StationTraffic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
