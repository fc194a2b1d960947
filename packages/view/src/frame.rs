//! Renderer-facing output of one recomputation.

use bikewatching_encoding::{Encodings, FlowClass, StationEncoding};
use bikewatching_station_models::{Station, StationRegistry};
use bikewatching_traffic_models::{StationTraffic, TimeSelection, TrafficSnapshot};
use serde::Serialize;

/// The authoritative result of one recomputation.
///
/// Each frame fully replaces whatever the renderer showed before; frames
/// are never merged with prior state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficFrame {
    /// The selection this frame was computed for.
    pub selection: TimeSelection,
    /// Per-station counts under that selection.
    pub traffic: TrafficSnapshot,
    /// Visual-encoding parameters derived from those counts.
    pub encodings: Encodings,
}

impl TrafficFrame {
    /// Joins traffic and encodings with station coordinates into drawable
    /// markers, keyed by terminal code.
    ///
    /// The join happens here, at render time; station records are read,
    /// never extended or mutated. Marker order follows the registry.
    #[must_use]
    pub fn markers(&self, registry: &StationRegistry) -> Vec<StationMarker> {
        registry
            .iter()
            .filter_map(|station| {
                let traffic = self.traffic.get(station.id)?;
                Some(StationMarker::new(station, traffic, &self.encodings))
            })
            .collect()
    }
}

/// One drawable station marker: identity, position, counts, and encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMarker {
    /// Station id.
    pub station_id: u32,
    /// Terminal code; the stable render key.
    pub short_name: String,
    /// Human-readable station name.
    pub name: String,
    /// Longitude in degrees (projection is the renderer's job).
    pub lon: f64,
    /// Latitude in degrees.
    pub lat: f64,
    /// Departure count under the current filter.
    pub departures: u64,
    /// Arrival count under the current filter.
    pub arrivals: u64,
    /// Total traffic.
    pub total: u64,
    /// Marker radius in pixels.
    pub radius: f64,
    /// Net flow classification.
    pub flow: FlowClass,
    /// Fill color for the flow class.
    pub color: &'static str,
    /// Tooltip text with the exact numbers.
    pub summary: String,
}

impl StationMarker {
    fn new(station: &Station, traffic: &StationTraffic, encodings: &Encodings) -> Self {
        let StationEncoding {
            radius,
            flow,
            color,
        } = encodings.encode(traffic);
        Self {
            station_id: station.id,
            short_name: station.short_name.clone(),
            name: station.name.clone(),
            lon: station.lon,
            lat: station.lat,
            departures: traffic.departures(),
            arrivals: traffic.arrivals(),
            total: traffic.total(),
            radius,
            flow,
            color,
            summary: traffic.summary(),
        }
    }
}
