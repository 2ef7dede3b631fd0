//! Weather Deviation
//!
//! Nudges generated route points away from heavy seas. A coarse
//! deterministic offset, not an avoidance router.

use crate::geo::GeoPoint;

/// Offset applied to both coordinates of a point in heavy seas
const AVOIDANCE_OFFSET_DEG: f64 = 0.1;

/// Wave height above this many meters triggers the deviation
pub const DEFAULT_WAVE_THRESHOLD_M: f64 = 3.0;

/// Source of sea-state data at a coordinate.
///
/// Implemented by the host's weather manager; the library never fetches
/// weather itself.
pub trait WaveHeightProvider {
    /// Significant wave height in meters at the given position.
    fn wave_height_m(&self, point: &GeoPoint) -> f64;
}

/// Shifts route points out of sea states above a wave-height threshold.
#[derive(Debug, Clone)]
pub struct WeatherDeviationPolicy {
    threshold_m: f64,
}

impl WeatherDeviationPolicy {
    pub fn new(threshold_m: f64) -> Self {
        WeatherDeviationPolicy { threshold_m }
    }

    /// Wave height threshold in meters
    pub fn threshold_m(&self) -> f64 {
        self.threshold_m
    }

    /// Apply the deviation to a leg's points.
    ///
    /// A point whose wave height exceeds the threshold is shifted by
    /// exactly +0.1 degrees in both latitude and longitude; all other
    /// points pass through unchanged.
    pub fn adjust<W: WaveHeightProvider>(&self, points: &[GeoPoint], waves: &W) -> Vec<GeoPoint> {
        points
            .iter()
            .map(|point| {
                if waves.wave_height_m(point) > self.threshold_m {
                    GeoPoint::new(
                        point.latitude + AVOIDANCE_OFFSET_DEG,
                        point.longitude + AVOIDANCE_OFFSET_DEG,
                    )
                } else {
                    *point
                }
            })
            .collect()
    }
}

impl Default for WeatherDeviationPolicy {
    fn default() -> Self {
        WeatherDeviationPolicy::new(DEFAULT_WAVE_THRESHOLD_M)
    }
}
