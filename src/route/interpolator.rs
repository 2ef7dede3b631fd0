//! Per-Leg Interpolation
//!
//! Generates intermediate points for a single route leg according to the
//! selected routing mode.

use super::{RouteLeg, RoutingMode};
use crate::geo::{
    angular_distance, great_circle_point, rhumb_line_points, GeoPoint, COINCIDENT_EPSILON,
};

/// One degree of arc in radians, ~60 nm of great circle
const GC_SEGMENT_RAD: f64 = 0.01745;

/// Subdivisions per one-degree segment, giving a ~10 nm cadence
const GC_SUBDIVISIONS: usize = 6;

/// Generate the points of a single leg.
///
/// The output always begins with `leg.start`. The closing endpoint is
/// not included; the planner appends the final waypoint of the last leg
/// once, so shared leg endpoints are never duplicated in the assembled
/// route.
pub fn interpolate(leg: &RouteLeg, mode: RoutingMode) -> Vec<GeoPoint> {
    match mode {
        RoutingMode::GreatCircle => great_circle_leg(&leg.start, &leg.end),
        RoutingMode::RhumbLine => rhumb_line_points(&leg.start, &leg.end),
        RoutingMode::LimitedGreatCircle { max_abs_latitude } => {
            // Whole-leg fallback: a leg touching the latitude limit takes
            // the constant-bearing path end to end, no partial blending.
            if leg.start.latitude.abs() > max_abs_latitude
                || leg.end.latitude.abs() > max_abs_latitude
            {
                rhumb_line_points(&leg.start, &leg.end)
            } else {
                great_circle_leg(&leg.start, &leg.end)
            }
        }
    }
}

fn great_circle_leg(start: &GeoPoint, end: &GeoPoint) -> Vec<GeoPoint> {
    let d = angular_distance(start, end);
    if d < COINCIDENT_EPSILON {
        return vec![*start];
    }

    let segments = ((d / GC_SEGMENT_RAD).ceil() as usize).max(1) * GC_SUBDIVISIONS;
    let mut points = Vec::with_capacity(segments);
    points.push(*start);
    for i in 1..segments {
        let fraction = i as f64 / segments as f64;
        points.push(great_circle_point(start, end, fraction, d));
    }
    points
}
