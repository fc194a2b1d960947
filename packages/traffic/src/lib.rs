#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! The traffic engine: circular time-window filtering and per-station
//! aggregation.
//!
//! Both halves are pure functions over their inputs. Each user interaction
//! re-runs the full pipeline over the trip log; nothing is cached between
//! windows, so the displayed counts can never drift from the current
//! selection.

pub mod aggregate;
pub mod filter;

pub use aggregate::aggregate;
pub use filter::{TimeWindow, WINDOW_HALF_WIDTH_MINUTES, filter_trips};
