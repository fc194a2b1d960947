#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the bike-share traffic analytics.
//!
//! Loads the station feed and trip log, runs the recompute pipeline for a
//! time selection, and prints the resulting station markers. A source that
//! fails to load degrades to an empty dataset (with an error logged) so
//! the command still produces a well-formed, zeroed report instead of
//! crashing.

use std::path::{Path, PathBuf};

use bikewatching_station_models::StationRegistry;
use bikewatching_traffic_models::TimeSelection;
use bikewatching_view::{RenderSink, TrafficFrame, TrafficView};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bikewatching", about = "Bike-share station traffic analytics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate per-station traffic for a time-of-day window
    Traffic {
        /// Path to the station information JSON feed
        #[arg(long)]
        stations: PathBuf,
        /// Path to the trip log CSV
        #[arg(long)]
        trips: PathBuf,
        /// Time selection: "any", an "HH:MM" clock label, or minutes since
        /// midnight. The window covers ±60 minutes around the selection.
        #[arg(long, default_value = "any")]
        time: String,
        /// Only print the N busiest stations
        #[arg(long)]
        top: Option<usize>,
        /// Emit the full station markers as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the stations in a station feed
    Stations {
        /// Path to the station information JSON feed
        #[arg(long)]
        stations: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Traffic {
            stations,
            trips,
            time,
            top,
            json,
        } => {
            let selection: TimeSelection = time.parse()?;
            let registry = load_registry_or_empty(&stations);
            let trip_log = match bikewatching_ingest::load_trips(&trips) {
                Ok(trip_log) => trip_log,
                Err(e) => {
                    log::error!("Failed to load trips from {}: {e}", trips.display());
                    Vec::new()
                }
            };

            let mut renderer = MarkerPrinter {
                registry: registry.clone(),
                top,
                json,
            };
            let mut view = TrafficView::new(registry, trip_log);
            view.on_time_change(selection, &mut renderer);
        }
        Commands::Stations { stations } => {
            let registry = load_registry_or_empty(&stations);
            println!("{:<6} {:<10} NAME", "ID", "CODE");
            println!("{}", "-".repeat(50));
            for station in &registry {
                println!("{:<6} {:<10} {}", station.id, station.short_name, station.name);
            }
        }
    }

    Ok(())
}

fn load_registry_or_empty(path: &Path) -> StationRegistry {
    match bikewatching_ingest::load_stations(path) {
        Ok(registry) => registry,
        Err(e) => {
            log::error!("Failed to load stations from {}: {e}", path.display());
            StationRegistry::default()
        }
    }
}

/// Renders frames to stdout, as a table or as JSON markers.
struct MarkerPrinter {
    registry: StationRegistry,
    top: Option<usize>,
    json: bool,
}

impl RenderSink for MarkerPrinter {
    fn render(&mut self, frame: &TrafficFrame) {
        let mut markers = frame.markers(&self.registry);
        markers.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.short_name.cmp(&b.short_name))
        });
        if let Some(top) = self.top {
            markers.truncate(top);
        }

        if self.json {
            match serde_json::to_string_pretty(&markers) {
                Ok(payload) => println!("{payload}"),
                Err(e) => log::error!("Failed to serialize markers: {e}"),
            }
            return;
        }

        println!(
            "Traffic at {} ({} stations)",
            frame.selection,
            markers.len()
        );
        println!(
            "{:<10} {:>10} {:>8} {:>8} {:>7} {:>16}  NAME",
            "CODE", "DEPARTS", "ARRIVES", "TOTAL", "RADIUS", "FLOW"
        );
        println!("{}", "-".repeat(80));
        for marker in &markers {
            println!(
                "{:<10} {:>10} {:>8} {:>8} {:>7.1} {:>16}  {}",
                marker.short_name,
                marker.departures,
                marker.arrivals,
                marker.total,
                marker.radius,
                marker.flow,
                marker.name
            );
        }
    }
}
