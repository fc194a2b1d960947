//! Area-proportional size scale.

use serde::Serialize;

/// Default radius output range, in pixels.
pub const DEFAULT_RADIUS_RANGE: (f64, f64) = (2.0, 25.0);

/// Square-root scale from traffic totals to marker radii.
///
/// The square root makes rendered circle *area*, not radius, linear in the
/// underlying count. The domain upper bound is data-dependent and clamped
/// to at least 1 so an all-zero snapshot still maps cleanly to the range
/// minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeScale {
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl SizeScale {
    /// Creates the scale for a snapshot's maximum total, using the default
    /// radius range.
    #[must_use]
    pub fn area_proportional(max_total: u64) -> Self {
        Self::with_range(max_total, DEFAULT_RADIUS_RANGE)
    }

    /// Creates the scale with an explicit `(min, max)` radius range.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn with_range(max_total: u64, (range_min, range_max): (f64, f64)) -> Self {
        Self {
            domain_max: max_total.max(1) as f64,
            range_min,
            range_max,
        }
    }

    /// Radius for a station's traffic total.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn radius(&self, total: u64) -> f64 {
        let ratio = total as f64 / self.domain_max;
        (self.range_max - self.range_min).mul_add(ratio.sqrt(), self.range_min)
    }

    /// Upper bound of the input domain.
    #[must_use]
    pub const fn domain_max(&self) -> f64 {
        self.domain_max
    }

    /// Radius range `(min, max)`.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        (self.range_min, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        let scale = SizeScale::area_proportional(400);
        assert!((scale.radius(0) - 2.0).abs() < 1e-9);
        assert!((scale.radius(400) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn area_not_radius_tracks_traffic() {
        // A quarter of the max traffic lands halfway up the radius range,
        // since sqrt(1/4) = 1/2.
        let scale = SizeScale::area_proportional(400);
        let expected = 23.0f64.mul_add(0.5, 2.0);
        assert!((scale.radius(100) - expected).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_everything_to_the_minimum() {
        let scale = SizeScale::area_proportional(0);
        assert!((scale.domain_max() - 1.0).abs() < f64::EPSILON);
        assert!((scale.radius(0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn honors_a_custom_range() {
        let scale = SizeScale::with_range(100, (1.0, 11.0));
        assert_eq!(scale.range(), (1.0, 11.0));
        assert!((scale.radius(100) - 11.0).abs() < 1e-9);
    }
}
