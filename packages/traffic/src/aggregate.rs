//! Per-station traffic aggregation.

use std::collections::BTreeMap;

use bikewatching_station_models::StationRegistry;
use bikewatching_traffic_models::{StationTraffic, TrafficSnapshot};
use bikewatching_trip_models::Trip;

/// Reduces a filtered trip set into per-station departure/arrival counts.
///
/// Departures are grouped by start station, arrivals by end station. Every
/// registered station yields exactly one entry, zero-filled when it saw no
/// trips; entries follow registry order. Trips referencing station ids the
/// registry does not know (decommissioned or unlisted docks) contribute
/// nothing for that endpoint.
#[must_use]
pub fn aggregate(registry: &StationRegistry, trips: &[&Trip]) -> TrafficSnapshot {
    let mut departures: BTreeMap<u32, u64> = BTreeMap::new();
    let mut arrivals: BTreeMap<u32, u64> = BTreeMap::new();

    for trip in trips {
        if let Some(id) = trip.start_station_id {
            *departures.entry(id).or_insert(0) += 1;
        }
        if let Some(id) = trip.end_station_id {
            *arrivals.entry(id).or_insert(0) += 1;
        }
    }

    let entries = registry
        .iter()
        .map(|station| {
            StationTraffic::new(
                station.id,
                departures.get(&station.id).copied().unwrap_or(0),
                arrivals.get(&station.id).copied().unwrap_or(0),
            )
        })
        .collect();

    TrafficSnapshot::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use bikewatching_station_models::Station;
    use bikewatching_trip_models::{BikeType, Membership};
    use chrono::NaiveDate;

    use super::*;

    fn registry(ids: &[u32]) -> StationRegistry {
        StationRegistry::from_stations(
            ids.iter()
                .map(|&id| Station {
                    id,
                    short_name: format!("S{id}"),
                    name: format!("Station {id}"),
                    lon: -71.09,
                    lat: 42.36,
                })
                .collect(),
        )
    }

    fn trip(start_station_id: Option<u32>, end_station_id: Option<u32>) -> Trip {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        Trip {
            ride_id: "ride".to_string(),
            bike_type: BikeType::ElectricBike,
            started_at: day.and_hms_opt(8, 5, 0).unwrap(),
            ended_at: day.and_hms_opt(8, 20, 0).unwrap(),
            start_station_id,
            end_station_id,
            member: Membership::Casual,
        }
    }

    #[test]
    fn counts_departures_and_arrivals_per_station() {
        let registry = registry(&[1, 2]);
        let trips = vec![trip(Some(1), Some(2)), trip(Some(2), Some(1)), trip(Some(1), Some(1))];
        let refs: Vec<&Trip> = trips.iter().collect();

        let snapshot = aggregate(&registry, &refs);

        let first = snapshot.get(1).unwrap();
        assert_eq!(first.departures(), 2);
        assert_eq!(first.arrivals(), 2);
        let second = snapshot.get(2).unwrap();
        assert_eq!(second.departures(), 1);
        assert_eq!(second.arrivals(), 1);
    }

    #[test]
    fn zero_fills_idle_stations() {
        let registry = registry(&[1, 2, 3]);
        let trips = vec![trip(Some(1), Some(1))];
        let refs: Vec<&Trip> = trips.iter().collect();

        let snapshot = aggregate(&registry, &refs);

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.get(2).map(StationTraffic::total), Some(0));
        assert_eq!(snapshot.get(3).map(StationTraffic::total), Some(0));
    }

    #[test]
    fn excludes_unknown_station_ids() {
        let registry = registry(&[1]);
        // Station 99 is not registered; the unmatched endpoint contributes
        // nothing and no entry is fabricated for it.
        let trips = vec![trip(Some(99), Some(1)), trip(None, Some(99))];
        let refs: Vec<&Trip> = trips.iter().collect();

        let snapshot = aggregate(&registry, &refs);

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get(99).is_none());
        let known = snapshot.get(1).unwrap();
        assert_eq!(known.departures(), 0);
        assert_eq!(known.arrivals(), 1);
    }

    #[test]
    fn conservation_holds_for_every_entry() {
        let registry = registry(&[1, 2, 3]);
        let trips = vec![trip(Some(1), Some(2)), trip(Some(2), None), trip(None, Some(3))];
        let refs: Vec<&Trip> = trips.iter().collect();

        for entry in &aggregate(&registry, &refs) {
            assert_eq!(entry.total(), entry.departures() + entry.arrivals());
        }
    }

    #[test]
    fn output_follows_registry_order() {
        let registry = registry(&[7, 3, 5]);
        let snapshot = aggregate(&registry, &[]);
        let order: Vec<u32> = snapshot.iter().map(StationTraffic::station_id).collect();
        assert_eq!(order, vec![7, 3, 5]);
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let registry = registry(&[1, 2]);
        let trips = vec![trip(Some(1), Some(2)), trip(Some(2), Some(1))];
        let refs: Vec<&Trip> = trips.iter().collect();

        assert_eq!(aggregate(&registry, &refs), aggregate(&registry, &refs));
    }

    #[test]
    fn empty_registry_yields_empty_snapshot() {
        let trips = vec![trip(Some(1), Some(2))];
        let refs: Vec<&Trip> = trips.iter().collect();
        assert!(aggregate(&registry(&[]), &refs).is_empty());
    }
}
