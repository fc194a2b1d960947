#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The reactive controller wiring a time selection to recomputation.
//!
//! [`TrafficView`] owns the immutable `{stations, trips}` context and the
//! current selection. Every selection change re-runs the pure pipeline
//! (filter → aggregate → encode) from source data and hands the resulting
//! [`TrafficFrame`] to a [`RenderSink`]. Nothing is cached between calls,
//! so the rendered state can never drift from the selection.

mod frame;

use bikewatching_encoding::Encodings;
use bikewatching_station_models::StationRegistry;
use bikewatching_traffic::{aggregate, filter_trips};
use bikewatching_traffic_models::TimeSelection;
use bikewatching_trip_models::Trip;

pub use frame::{StationMarker, TrafficFrame};

/// Receives authoritative frames from the controller.
///
/// Implementations must fully replace any previously rendered state on
/// each call; a frame is never a delta.
pub trait RenderSink {
    /// Renders one frame.
    fn render(&mut self, frame: &TrafficFrame);
}

/// The single active component of the pipeline.
///
/// Computation is synchronous: each [`Self::on_time_change`] call runs to
/// completion, render included, before the next can be triggered.
pub struct TrafficView {
    registry: StationRegistry,
    trips: Vec<Trip>,
    selection: TimeSelection,
}

impl TrafficView {
    /// Creates a view over an immutable station registry and trip log.
    ///
    /// The initial selection is "Any time", so the first render shows
    /// unfiltered traffic over the full trip set.
    #[must_use]
    pub const fn new(registry: StationRegistry, trips: Vec<Trip>) -> Self {
        Self {
            registry,
            trips,
            selection: TimeSelection::AnyTime,
        }
    }

    /// The current selection.
    #[must_use]
    pub const fn selection(&self) -> TimeSelection {
        self.selection
    }

    /// The station registry this view renders against.
    #[must_use]
    pub const fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Number of trips in the full log.
    #[must_use]
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }

    /// Runs the pure pipeline for a selection without touching view state.
    ///
    /// Calling this twice with the same selection yields identical frames.
    #[must_use]
    pub fn recompute(&self, selection: TimeSelection) -> TrafficFrame {
        let filtered = filter_trips(&self.trips, selection);
        log::debug!(
            "Recomputing traffic for {selection}: {} of {} trips in window",
            filtered.len(),
            self.trips.len()
        );
        let traffic = aggregate(&self.registry, &filtered);
        let encodings = Encodings::for_traffic(&traffic);
        TrafficFrame {
            selection,
            traffic,
            encodings,
        }
    }

    /// Handles one selection change: recompute, store the selection, and
    /// hand the frame to the renderer.
    pub fn on_time_change(&mut self, selection: TimeSelection, sink: &mut dyn RenderSink) {
        let frame = self.recompute(selection);
        self.selection = selection;
        sink.render(&frame);
    }

    /// Renders the current selection, used for the initial draw at
    /// startup. Before any interaction this is the "Any time" frame.
    pub fn render_current(&self, sink: &mut dyn RenderSink) {
        let frame = self.recompute(self.selection);
        sink.render(&frame);
    }
}
