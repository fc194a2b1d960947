//! Trip log loader.
//!
//! The log is a CSV export with one row per ride. Rows arrive as raw
//! strings and pass through a normalize step; a row whose timestamps
//! cannot be parsed is dropped here so the filter never sees an invalid
//! time value. A station id that does not parse only clears that endpoint
//! of the trip, matching how the aggregator treats unmatched docks.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bikewatching_trip_models::{BikeType, Membership, Trip};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::IngestError;

/// One trip row as exported, before any validation.
#[derive(Debug, Deserialize)]
struct RawTrip {
    ride_id: String,
    bike_type: String,
    #[serde(alias = "started_at")]
    trip_started_at: String,
    #[serde(alias = "ended_at")]
    trip_ended_at: String,
    start_station_id: String,
    end_station_id: String,
    member: String,
}

/// Parses a trip log timestamp (space- or `T`-separated, optional
/// fractional seconds).
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    None
}

/// Parses a station id cell. Blank or non-numeric cells become `None`.
fn parse_station_id(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

fn normalize(raw: RawTrip) -> Option<Trip> {
    let Some(started_at) = parse_timestamp(&raw.trip_started_at) else {
        log::debug!(
            "Skipping trip {}: unparsable start time {:?}",
            raw.ride_id,
            raw.trip_started_at
        );
        return None;
    };
    let Some(ended_at) = parse_timestamp(&raw.trip_ended_at) else {
        log::debug!(
            "Skipping trip {}: unparsable end time {:?}",
            raw.ride_id,
            raw.trip_ended_at
        );
        return None;
    };

    let member = if raw.member.trim().eq_ignore_ascii_case("member") {
        Membership::Member
    } else {
        Membership::Casual
    };

    Some(Trip {
        ride_id: raw.ride_id,
        bike_type: BikeType::from(raw.bike_type),
        started_at,
        ended_at,
        start_station_id: parse_station_id(&raw.start_station_id),
        end_station_id: parse_station_id(&raw.end_station_id),
        member,
    })
}

/// Parses a trip log from a reader.
///
/// Rows that fail CSV decoding or timestamp parsing are dropped and
/// counted; the drop total is reported once at the end rather than per
/// row, since large exports can shed thousands of rows.
///
/// # Errors
///
/// Returns an error if the reader fails or the header row is unreadable.
pub fn parse_trips<R: Read>(reader: R) -> Result<Vec<Trip>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut trips = Vec::new();
    let mut dropped: u64 = 0;
    let mut total: u64 = 0;

    for record in csv_reader.deserialize::<RawTrip>() {
        total += 1;
        match record {
            Ok(raw) => match normalize(raw) {
                Some(trip) => trips.push(trip),
                None => dropped += 1,
            },
            Err(e) => {
                log::debug!("Skipping undecodable trip row: {e}");
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::warn!("Dropped {dropped} of {total} trip rows");
    }

    Ok(trips)
}

/// Loads the trip log from a CSV file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read as CSV.
pub fn load_trips<P: AsRef<Path>>(path: P) -> Result<Vec<Trip>, IngestError> {
    let file = File::open(path.as_ref())?;
    let trips = parse_trips(BufReader::new(file))?;
    log::info!("Loaded {} trips from {}", trips.len(), path.as_ref().display());
    Ok(trips)
}
