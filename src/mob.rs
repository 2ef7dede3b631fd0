//! Man Overboard Drift Prediction
//!
//! Dead-reckoned drift path from a trigger point. The path grows by one
//! point per external speed/heading sample; the predictor never clocks
//! itself.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, MS_TO_KNOTS};

/// Fixed dead-reckoning step per drift update: ten minutes
const DRIFT_STEP_SECONDS: f64 = 600.0;

/// Meters per degree of latitude, mean-radius approximation.
/// Good enough for short-range drift (minutes, not hours).
const METERS_PER_DEGREE: f64 = 111_111.0;

/// Man-overboard state for one vessel context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MobState {
    /// Where the MOB was triggered
    pub trigger_point: GeoPoint,
    /// Predicted drift positions, starting at the trigger point
    pub drift_path: Vec<GeoPoint>,
    /// False once cleared; updates are ignored
    pub active: bool,
}

impl MobState {
    /// Raise a man-overboard at the given position.
    pub fn trigger(position: GeoPoint) -> Self {
        MobState {
            trigger_point: position,
            drift_path: vec![position],
            active: true,
        }
    }

    /// Extend the drift path by one dead-reckoned point.
    ///
    /// `direction` is radians from true north. The displacement is a
    /// flat-earth approximation over the fixed ten-minute step. No-op
    /// while inactive.
    pub fn extend_drift(&mut self, current: GeoPoint, speed_knots: f64, direction: f64) {
        if !self.active {
            return;
        }

        let speed_ms = speed_knots / MS_TO_KNOTS; // knots to m/s
        let north = speed_ms * DRIFT_STEP_SECONDS * direction.cos();
        let east = speed_ms * DRIFT_STEP_SECONDS * direction.sin();

        let latitude = current.latitude + north / METERS_PER_DEGREE;
        let longitude =
            current.longitude + east / (METERS_PER_DEGREE * current.latitude.to_radians().cos());
        self.drift_path.push(GeoPoint::new(latitude, longitude));
    }

    /// Stand down: deactivate and drop the drift path.
    pub fn clear(&mut self) {
        self.active = false;
        self.drift_path.clear();
    }
}
