//! Station information feed loader.
//!
//! The feed is a GBFS-style document: `{ "data": { "stations": [...] } }`.
//! Published feeds disagree on how the numeric station id is spelled —
//! some use `id`, older ones `number`, and either may be integer- or
//! string-encoded — so the raw record accepts all four combinations and
//! normalization settles on a validated `u32`.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bikewatching_station_models::{Station, StationRegistry};
use serde::Deserialize;

use crate::IngestError;

#[derive(Debug, Deserialize)]
struct StationFeed {
    data: StationFeedData,
}

#[derive(Debug, Deserialize)]
struct StationFeedData {
    stations: Vec<RawStation>,
}

/// One station row as it appears in the feed. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawStation {
    #[serde(default)]
    id: Option<RawStationId>,
    #[serde(default)]
    number: Option<RawStationId>,
    short_name: String,
    name: String,
    lon: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStationId {
    Number(u32),
    Text(String),
}

impl RawStationId {
    fn resolve(self) -> Option<u32> {
        match self {
            Self::Number(id) => Some(id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Converts a raw feed row into a [`Station`], preferring the `id` field
/// over the legacy `number` spelling. Returns `None` when neither yields a
/// usable numeric id.
fn normalize(raw: RawStation) -> Option<Station> {
    let id = raw.id.or(raw.number).and_then(RawStationId::resolve);
    let Some(id) = id else {
        log::warn!("Skipping station {:?}: no usable numeric id", raw.short_name);
        return None;
    };
    Some(Station {
        id,
        short_name: raw.short_name,
        name: raw.name,
        lon: raw.lon,
        lat: raw.lat,
    })
}

/// Parses a station feed from a reader.
///
/// Rows without a usable id are dropped with a warning; everything else
/// becomes a registry entry in feed order.
///
/// # Errors
///
/// Returns an error if reading fails or the document is not a valid feed.
pub fn parse_stations<R: Read>(reader: R) -> Result<StationRegistry, IngestError> {
    let feed: StationFeed = serde_json::from_reader(reader)?;

    let total = feed.data.stations.len();
    let stations: Vec<Station> = feed.data.stations.into_iter().filter_map(normalize).collect();

    let dropped = total - stations.len();
    if dropped > 0 {
        log::warn!("Dropped {dropped} of {total} station rows");
    }

    Ok(StationRegistry::from_stations(stations))
}

/// Loads the station registry from a feed file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed as a feed.
pub fn load_stations<P: AsRef<Path>>(path: P) -> Result<StationRegistry, IngestError> {
    let file = File::open(path.as_ref())?;
    let registry = parse_stations(BufReader::new(file))?;
    log::info!(
        "Loaded {} stations from {}",
        registry.len(),
        path.as_ref().display()
    );
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_feed_with_integer_ids() {
        let json = r#"{
            "data": { "stations": [
                { "id": 1, "short_name": "A32000", "name": "Harvard Square", "lon": -71.1189, "lat": 42.3736, "capacity": 19 },
                { "id": 2, "short_name": "B32001", "name": "Central Square", "lon": -71.1031, "lat": 42.3656 }
            ] }
        }"#;
        let registry = parse_stations(json.as_bytes()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(1).map(|s| s.name.as_str()),
            Some("Harvard Square")
        );
    }

    #[test]
    fn accepts_the_legacy_number_field_and_string_ids() {
        let json = r#"{
            "data": { "stations": [
                { "number": "7", "short_name": "C32002", "name": "Kendall", "lon": -71.0865, "lat": 42.3625 }
            ] }
        }"#;
        let registry = parse_stations(json.as_bytes()).unwrap();
        assert_eq!(registry.get(7).map(|s| s.short_name.as_str()), Some("C32002"));
    }

    #[test]
    fn prefers_id_over_number_when_both_exist() {
        let json = r#"{
            "data": { "stations": [
                { "id": 3, "number": 9, "short_name": "D32003", "name": "Inman", "lon": -71.1, "lat": 42.37 }
            ] }
        }"#;
        let registry = parse_stations(json.as_bytes()).unwrap();
        assert!(registry.get(3).is_some());
        assert!(registry.get(9).is_none());
    }

    #[test]
    fn drops_rows_without_a_usable_id() {
        let json = r#"{
            "data": { "stations": [
                { "number": "dock-x", "short_name": "E32004", "name": "Union", "lon": -71.09, "lat": 42.38 },
                { "id": 4, "short_name": "F32005", "name": "Porter", "lon": -71.12, "lat": 42.39 }
            ] }
        }"#;
        let registry = parse_stations(json.as_bytes()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(4).is_some());
    }

    #[test]
    fn rejects_documents_without_the_feed_envelope() {
        assert!(parse_stations(r#"{ "stations": [] }"#.as_bytes()).is_err());
    }
}
