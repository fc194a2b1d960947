#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Bike-share station identity and registry types.
//!
//! Stations are loaded once at startup from the station information feed
//! and never mutated afterwards. Derived traffic data lives in separate
//! structures keyed by station id; station records themselves stay pristine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single bike-share dock station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Numeric station id, unique within the registry. Trips reference
    /// stations through this id.
    pub id: u32,
    /// Terminal code (e.g. "A32000"). Unique, and used as the stable
    /// render key on the frontend.
    pub short_name: String,
    /// Human-readable station name.
    pub name: String,
    /// Longitude in degrees.
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

/// The immutable station list, indexed by station id.
///
/// Iteration follows load order, which downstream aggregation relies on for
/// deterministic output ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StationRegistry {
    stations: Vec<Station>,
    #[serde(skip)]
    by_id: BTreeMap<u32, usize>,
}

impl StationRegistry {
    /// Builds a registry from a station list, indexing by id.
    ///
    /// If two stations share an id, the first occurrence wins and later
    /// duplicates are unreachable through [`Self::get`].
    #[must_use]
    pub fn from_stations(stations: Vec<Station>) -> Self {
        let mut by_id = BTreeMap::new();
        for (index, station) in stations.iter().enumerate() {
            by_id.entry(station.id).or_insert(index);
        }
        Self { stations, by_id }
    }

    /// Looks up a station by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Station> {
        self.by_id.get(&id).map(|&index| &self.stations[index])
    }

    /// Looks up a station by its terminal code.
    #[must_use]
    pub fn find_by_short_name(&self, short_name: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.short_name == short_name)
    }

    /// Returns `true` if a station with this id is registered.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Iterates stations in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Number of registered stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns `true` if the registry holds no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

impl<'a> IntoIterator for &'a StationRegistry {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
