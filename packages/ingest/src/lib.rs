#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Loaders for the two upstream data sources.
//!
//! The station information feed is a GBFS-style JSON document; the trip
//! log is a CSV export. Both loaders normalize tolerant raw records into
//! the typed model: rows the core could not process safely (unparsable
//! timestamps, unusable station ids) are dropped here, with a warning, so
//! the pure pipeline downstream only ever sees well-formed values.

pub mod stations;
pub mod trips;

use thiserror::Error;

pub use stations::{load_stations, parse_stations};
pub use trips::{load_trips, parse_trips};

/// Errors that can occur while loading source data.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading a source file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The station feed was not valid JSON.
    #[error("Station feed parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The trip log was not readable as CSV.
    #[error("Trip log parse error: {0}")]
    Csv(#[from] csv::Error),
}
