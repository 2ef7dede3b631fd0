//! CPA/TCPA Calculation
//!
//! Closest point of approach and time to it, from the relative velocity
//! between own vessel and a target.
//!
//! Positions are projected into a local tangent plane at own position
//! (east = x, north = y, meters), which is accurate at the ranges AIS
//! proximity work cares about.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::target::AisTarget;
use crate::geo::{delta_longitude, GeoPoint, EARTH_RADIUS_M, MS_TO_KNOTS};

/// Own vessel state needed for relative-motion calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnVessel {
    pub position: GeoPoint,
    /// Course over ground in degrees true (0-360)
    pub course_over_ground: f64,
    /// Speed over ground in knots
    pub speed_over_ground: f64,
}

/// Result of a CPA/TCPA calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpaResult {
    /// Closest point of approach in meters
    pub cpa_meters: f64,
    /// Time to closest approach in seconds.
    /// Negative means the closest approach is already past.
    pub tcpa_seconds: f64,
}

/// Calculate CPA and TCPA between own vessel and a target.
///
/// With `r` the target's relative position and `v` the relative
/// velocity, `TCPA = -(r . v) / |v|^2` and CPA is the separation at that
/// time. When the relative velocity is near zero (same course and
/// speed) the separation never changes: CPA is the current distance and
/// TCPA is reported as 0.
pub(crate) fn calculate_cpa_tcpa(target: &AisTarget, own: &OwnVessel) -> CpaResult {
    let r = tangent_plane_offset(&own.position, &target.position);
    let v = velocity_ms(target.speed_over_ground, target.course_over_ground)
        - velocity_ms(own.speed_over_ground, own.course_over_ground);

    let v_sq = v.norm_squared();
    if v_sq < 1e-6 {
        return CpaResult {
            cpa_meters: r.norm(),
            tcpa_seconds: 0.0,
        };
    }

    let tcpa = -r.dot(&v) / v_sq;
    let cpa = (r + v * tcpa).norm();
    CpaResult {
        cpa_meters: cpa,
        tcpa_seconds: tcpa,
    }
}

/// Target offset from own position in tangent-plane meters.
fn tangent_plane_offset(own: &GeoPoint, target: &GeoPoint) -> Vector2<f64> {
    let east = delta_longitude(own.longitude, target.longitude)
        * own.latitude.to_radians().cos()
        * EARTH_RADIUS_M;
    let north = (target.latitude - own.latitude).to_radians() * EARTH_RADIUS_M;
    Vector2::new(east, north)
}

/// Course and speed as a tangent-plane velocity vector in m/s.
fn velocity_ms(speed_knots: f64, course_deg: f64) -> Vector2<f64> {
    let speed = speed_knots / MS_TO_KNOTS; // knots to m/s
    let course = course_deg.to_radians();
    Vector2::new(speed * course.sin(), speed * course.cos())
}
