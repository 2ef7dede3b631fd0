//! Spherical Geometry Primitives
//!
//! Distance and interpolation math shared by route planning, proximity
//! evaluation and drift prediction. Coordinates are degrees at the API
//! boundary and radians internally.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per nautical mile
pub const METERS_PER_NM: f64 = 1852.0;

/// m/s to knots conversion factor
pub const MS_TO_KNOTS: f64 = 1.94384;

/// One nautical mile as angular distance (one arc minute)
pub const NM_AS_RADIANS: f64 = std::f64::consts::PI / (180.0 * 60.0);

/// Below this angular distance two points are treated as coincident
pub(crate) const COINCIDENT_EPSILON: f64 = 1e-12;

/// Rhumb-line paths are stepped at this spacing
const RHUMB_STEP_NM: f64 = 10.0;

/// A position on the Earth's surface in degrees.
///
/// Construction normalizes the coordinates: latitude is clamped to
/// [-90, 90] and longitude wrapped to [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a normalized point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: wrap_longitude(longitude),
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Wrap a longitude into [-180, 180].
fn wrap_longitude(longitude: f64) -> f64 {
    let wrapped = (longitude + 180.0).rem_euclid(360.0) - 180.0;
    // rem_euclid maps 180 to -180; keep the canonical positive form
    if wrapped == -180.0 && longitude >= 0.0 {
        180.0
    } else {
        wrapped
    }
}

/// Longitude delta in radians, wrapped across the antimeridian.
pub(crate) fn delta_longitude(from_deg: f64, to_deg: f64) -> f64 {
    let mut dlon = (to_deg - from_deg).to_radians();
    if dlon.abs() > std::f64::consts::PI {
        dlon -= 2.0 * std::f64::consts::PI * dlon.signum();
    }
    dlon
}

/// Angular great-circle distance between two points in radians.
///
/// Spherical law of cosines. The cosine is clamped to [-1, 1] so
/// floating error on coincident or antipodal points can never produce
/// NaN; coincident points return exactly 0.
pub fn angular_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();

    let cos_d = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlon.cos();
    cos_d.clamp(-1.0, 1.0).acos()
}

/// Great-circle distance between two points in nautical miles.
pub fn distance_nm(a: &GeoPoint, b: &GeoPoint) -> f64 {
    angular_distance(a, b) / NM_AS_RADIANS
}

/// Interpolate along the great circle from `a` to `b`.
///
/// `fraction` is in [0, 1] and `d` is the precomputed angular distance
/// between the endpoints. For coincident endpoints the interpolation
/// factors are undefined (sin(d) = 0), so `a` is returned directly.
pub fn great_circle_point(a: &GeoPoint, b: &GeoPoint, fraction: f64, d: f64) -> GeoPoint {
    if d < COINCIDENT_EPSILON {
        return *a;
    }

    let lat1 = a.latitude.to_radians();
    let lon1 = a.longitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let lon2 = b.longitude.to_radians();

    let fa = ((1.0 - fraction) * d).sin() / d.sin();
    let fb = (fraction * d).sin() / d.sin();

    let x = fa * lat1.cos() * lon1.cos() + fb * lat2.cos() * lon2.cos();
    let y = fa * lat1.cos() * lon1.sin() + fb * lat2.cos() * lon2.sin();
    let z = fa * lat1.sin() + fb * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);
    GeoPoint::new(lat.to_degrees(), lon.to_degrees())
}

/// Constant bearing from `a` to `b` in radians (0 = north, clockwise).
///
/// Mercator-projected: the loxodrome is a straight line in the
/// projection, so the bearing is the arctangent of the projected deltas.
pub fn rhumb_bearing(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlon = delta_longitude(a.longitude, b.longitude);

    let dpsi = projected_latitude(lat2) - projected_latitude(lat1);
    dlon.atan2(dpsi)
}

/// Angular rhumb-line distance between two points in radians.
pub fn rhumb_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = delta_longitude(a.longitude, b.longitude);

    let dpsi = projected_latitude(lat2) - projected_latitude(lat1);
    // On an east-west course dpsi vanishes; the latitude circle's cosine
    // gives the stretch factor instead.
    let q = if dpsi.abs() > COINCIDENT_EPSILON {
        dlat / dpsi
    } else {
        lat1.cos()
    };

    (dlat * dlat + q * q * dlon * dlon).sqrt()
}

/// Point reached by following a constant bearing for an angular distance.
pub fn rhumb_destination(start: &GeoPoint, bearing: f64, d: f64) -> GeoPoint {
    let lat1 = start.latitude.to_radians();
    let lon1 = start.longitude.to_radians();

    let dlat = d * bearing.cos();
    let lat2 = lat1 + dlat;

    let dpsi = projected_latitude(lat2) - projected_latitude(lat1);
    let q = if dpsi.abs() > COINCIDENT_EPSILON {
        dlat / dpsi
    } else {
        lat1.cos()
    };

    let dlon = if q.abs() > COINCIDENT_EPSILON {
        d * bearing.sin() / q
    } else {
        0.0
    };
    let lon2 = lon1 + dlon;

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Interpolated constant-bearing path from `a` towards `b`.
///
/// Points are stepped every ~10 nm measured from the start so error does
/// not accumulate. The path begins with `a` exactly; the closing
/// endpoint is left to the route assembler.
pub fn rhumb_line_points(a: &GeoPoint, b: &GeoPoint) -> Vec<GeoPoint> {
    let total = rhumb_distance(a, b);
    if total < COINCIDENT_EPSILON {
        return vec![*a];
    }

    let bearing = rhumb_bearing(a, b);
    let step = RHUMB_STEP_NM * NM_AS_RADIANS;
    let steps = (total / step).ceil() as usize;

    let mut points = Vec::with_capacity(steps);
    points.push(*a);
    for i in 1..steps {
        points.push(rhumb_destination(a, bearing, step * i as f64));
    }
    points
}

/// Mercator-projected latitude ("stretched latitude" psi).
fn projected_latitude(lat: f64) -> f64 {
    (lat / 2.0 + std::f64::consts::FRAC_PI_4).tan().ln()
}
