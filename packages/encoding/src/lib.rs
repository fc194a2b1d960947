#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Visual-encoding scales derived from a traffic snapshot.
//!
//! The size scale's domain depends on the data (the snapshot's maximum
//! total), so encodings are recomputed every time traffic changes. The
//! scales themselves are stateless pure mappings; nothing here is shared
//! mutable state.

pub mod flow;
pub mod size;

use bikewatching_traffic_models::{StationTraffic, TrafficSnapshot};
use serde::Serialize;

pub use flow::FlowClass;
pub use size::{DEFAULT_RADIUS_RANGE, SizeScale};

/// The visual-encoding parameters for one traffic snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Encodings {
    size: SizeScale,
}

impl Encodings {
    /// Derives encodings from a snapshot, sizing against its busiest
    /// station.
    #[must_use]
    pub fn for_traffic(traffic: &TrafficSnapshot) -> Self {
        Self {
            size: SizeScale::area_proportional(traffic.max_total()),
        }
    }

    /// The size scale for this snapshot.
    #[must_use]
    pub const fn size(&self) -> &SizeScale {
        &self.size
    }

    /// Renderable parameters for one station's traffic.
    #[must_use]
    pub fn encode(&self, traffic: &StationTraffic) -> StationEncoding {
        let flow = FlowClass::for_station(traffic);
        StationEncoding {
            radius: self.size.radius(traffic.total()),
            flow,
            color: flow.color(),
        }
    }
}

/// Size and color for one station marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationEncoding {
    /// Marker radius in pixels.
    pub radius: f64,
    /// Net flow classification.
    pub flow: FlowClass,
    /// Fill color for the flow class.
    pub color: &'static str,
}
