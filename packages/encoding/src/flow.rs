//! Flow-direction classification.

use bikewatching_traffic_models::StationTraffic;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Net flow direction of a station, from its departure share.
///
/// The flow ratio (departures over total) is quantized into three
/// equal-width classes over `[0, 1]`. The boundary ratios 1/3 and 2/3
/// belong to the higher class.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FlowClass {
    /// More arrivals than departures.
    ArrivalHeavy,
    /// Roughly balanced flow.
    Balanced,
    /// More departures than arrivals.
    DepartureHeavy,
}

impl FlowClass {
    /// All classes, in ascending ratio order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::ArrivalHeavy, Self::Balanced, Self::DepartureHeavy]
    }

    /// Classifies a flow ratio in `[0, 1]`.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio < 1.0 / 3.0 {
            Self::ArrivalHeavy
        } else if ratio < 2.0 / 3.0 {
            Self::Balanced
        } else {
            Self::DepartureHeavy
        }
    }

    /// Classifies a station's traffic entry.
    #[must_use]
    pub fn for_station(traffic: &StationTraffic) -> Self {
        Self::classify(traffic.flow_ratio())
    }

    /// Fixed marker color for this class.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::ArrivalHeavy => "#6ea8fe",
            Self::Balanced => "#c9c9ff",
            Self::DepartureHeavy => "#ffb26e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_the_higher_class() {
        assert_eq!(FlowClass::classify(1.0 / 3.0), FlowClass::Balanced);
        assert_eq!(FlowClass::classify(2.0 / 3.0), FlowClass::DepartureHeavy);
    }

    #[test]
    fn classifies_the_three_bands() {
        assert_eq!(FlowClass::classify(0.0), FlowClass::ArrivalHeavy);
        assert_eq!(FlowClass::classify(0.5), FlowClass::Balanced);
        assert_eq!(FlowClass::classify(1.0), FlowClass::DepartureHeavy);
    }

    #[test]
    fn idle_stations_classify_as_arrival_heavy() {
        // No traffic means a flow ratio of 0, the lowest band.
        let idle = StationTraffic::new(1, 0, 0);
        assert_eq!(FlowClass::for_station(&idle), FlowClass::ArrivalHeavy);
    }

    #[test]
    fn each_class_has_a_distinct_color() {
        let colors: Vec<&str> = FlowClass::all().iter().map(|c| c.color()).collect();
        assert_eq!(colors, vec!["#6ea8fe", "#c9c9ff", "#ffb26e"]);
    }
}
