//! Circular time-of-day window filtering.
//!
//! The window is ±[`WINDOW_HALF_WIDTH_MINUTES`] around the selected minute
//! with inclusive bounds, so it always covers a 121-minute span. Because
//! the clock is circular, a window centered near midnight wraps: the
//! window around 00:00 runs from 23:00 through 01:00.

use bikewatching_traffic_models::TimeSelection;
use bikewatching_trip_models::{MINUTES_PER_DAY, TimeOfDay, Trip};

/// Half-width of the filter window, in minutes.
pub const WINDOW_HALF_WIDTH_MINUTES: u16 = 60;

/// An inclusive time-of-day interval that may wrap past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeWindow {
    /// The ±60-minute window centered on `center`.
    #[must_use]
    pub const fn around(center: TimeOfDay) -> Self {
        let minutes = center.minutes();
        Self {
            start: TimeOfDay::wrapping(minutes + MINUTES_PER_DAY - WINDOW_HALF_WIDTH_MINUTES),
            end: TimeOfDay::wrapping(minutes + WINDOW_HALF_WIDTH_MINUTES),
        }
    }

    /// First minute inside the window.
    #[must_use]
    pub const fn start(self) -> TimeOfDay {
        self.start
    }

    /// Last minute inside the window.
    #[must_use]
    pub const fn end(self) -> TimeOfDay {
        self.end
    }

    /// Whether `time` falls inside the window, bounds included.
    ///
    /// A window whose start is past its end crosses midnight and accepts
    /// times on either side of it.
    #[must_use]
    pub const fn contains(self, time: TimeOfDay) -> bool {
        let t = time.minutes();
        let start = self.start.minutes();
        let end = self.end.minutes();
        if start <= end {
            start <= t && t <= end
        } else {
            t >= start || t <= end
        }
    }
}

/// Filters the trip log down to trips touching the selected window.
///
/// A trip is kept when either its start or its end clock time falls inside
/// the ±60-minute window. The sentinel selection keeps every trip. Input
/// order is preserved, and the trip data itself is never copied; the
/// result borrows from `trips`.
#[must_use]
pub fn filter_trips<'a>(trips: &'a [Trip], selection: TimeSelection) -> Vec<&'a Trip> {
    match selection {
        TimeSelection::AnyTime => trips.iter().collect(),
        TimeSelection::At(center) => {
            let window = TimeWindow::around(center);
            trips
                .iter()
                .filter(|trip| {
                    window.contains(trip.start_time_of_day())
                        || window.contains(trip.end_time_of_day())
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use bikewatching_trip_models::{BikeType, Membership};
    use chrono::NaiveDate;

    use super::*;

    fn tod(minutes: u16) -> TimeOfDay {
        TimeOfDay::new(minutes).unwrap()
    }

    fn trip(ride_id: &str, start: (u32, u32), end: (u32, u32)) -> Trip {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        Trip {
            ride_id: ride_id.to_string(),
            bike_type: BikeType::ClassicBike,
            started_at: day.and_hms_opt(start.0, start.1, 0).unwrap(),
            ended_at: day.and_hms_opt(end.0, end.1, 0).unwrap(),
            start_station_id: Some(1),
            end_station_id: Some(2),
            member: Membership::Member,
        }
    }

    #[test]
    fn window_around_midnight_wraps() {
        let window = TimeWindow::around(TimeOfDay::MIDNIGHT);
        assert_eq!(window.start().minutes(), 1380);
        assert_eq!(window.end().minutes(), 60);
        assert!(window.contains(tod(1439)));
        assert!(window.contains(tod(0)));
        assert!(window.contains(tod(60)));
        assert!(!window.contains(tod(120)));
    }

    #[test]
    fn window_around_last_minute_wraps() {
        let window = TimeWindow::around(tod(1439));
        assert_eq!(window.start().minutes(), 1379);
        assert_eq!(window.end().minutes(), 59);
        assert!(window.contains(tod(1379)));
        assert!(window.contains(tod(59)));
        assert!(!window.contains(tod(60)));
        assert!(!window.contains(tod(1378)));
    }

    #[test]
    fn window_covers_exactly_121_minutes() {
        let window = TimeWindow::around(tod(510));
        assert!(window.contains(tod(450)));
        assert!(window.contains(tod(570)));
        assert!(!window.contains(tod(449)));
        assert!(!window.contains(tod(571)));

        let covered = (0..MINUTES_PER_DAY).filter(|&m| window.contains(tod(m))).count();
        assert_eq!(covered, 121);
    }

    #[test]
    fn sentinel_keeps_every_trip() {
        let trips = vec![trip("a", (8, 5), (8, 20)), trip("b", (23, 58), (0, 10))];
        let filtered = filter_trips(&trips, TimeSelection::AnyTime);
        assert_eq!(filtered.len(), trips.len());
    }

    #[test]
    fn keeps_trips_touching_the_window_by_start_or_end() {
        let trips = vec![
            // Starts before the 07:30-09:30 window, ends inside it.
            trip("ends-inside", (7, 0), (7, 45)),
            // Fully inside.
            trip("inside", (8, 5), (8, 20)),
            // Fully outside.
            trip("outside", (12, 0), (12, 30)),
        ];
        let filtered = filter_trips(&trips, TimeSelection::At(tod(510)));
        let kept: Vec<&str> = filtered.iter().map(|t| t.ride_id.as_str()).collect();
        assert_eq!(kept, vec!["ends-inside", "inside"]);
    }

    #[test]
    fn wrapped_window_keeps_late_night_trips() {
        let trips = vec![trip("late", (23, 59), (0, 15)), trip("morning", (2, 0), (2, 30))];
        let filtered = filter_trips(&trips, TimeSelection::At(TimeOfDay::MIDNIGHT));
        let kept: Vec<&str> = filtered.iter().map(|t| t.ride_id.as_str()).collect();
        assert_eq!(kept, vec!["late"]);
    }

    #[test]
    fn preserves_input_order() {
        let trips = vec![
            trip("third", (8, 50), (9, 0)),
            trip("first", (8, 5), (8, 10)),
            trip("second", (8, 20), (8, 30)),
        ];
        let filtered = filter_trips(&trips, TimeSelection::At(tod(510)));
        let kept: Vec<&str> = filtered.iter().map(|t| t.ride_id.as_str()).collect();
        assert_eq!(kept, vec!["third", "first", "second"]);
    }
}
