//! Route Construction
//!
//! Multi-leg route planning: per-leg interpolation, weather deviation
//! and assembly into the route value published by the host.

mod interpolator;
mod planner;
mod weather;

pub use interpolator::interpolate;
pub use planner::RoutePlanner;
pub use weather::{WaveHeightProvider, WeatherDeviationPolicy};

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::geo::GeoPoint;

/// Interpolation method for route legs.
///
/// A closed enum dispatched exhaustively; unrecognized configuration
/// tokens are rejected in [`RoutingMode::parse`] rather than silently
/// mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RoutingMode {
    /// Shortest path over the sphere
    GreatCircle,
    /// Constant compass bearing
    RhumbLine,
    /// Great circle, falling back to rhumb line for legs reaching
    /// beyond the given absolute latitude
    #[serde(rename_all = "camelCase")]
    LimitedGreatCircle { max_abs_latitude: f64 },
}

impl RoutingMode {
    /// Parse the host configuration's mode token.
    ///
    /// `max_abs_latitude` only applies to `limited_circle`.
    pub fn parse(token: &str, max_abs_latitude: f64) -> Result<Self, NavigationError> {
        match token {
            "great_circle" => Ok(RoutingMode::GreatCircle),
            "rhumb_line" => Ok(RoutingMode::RhumbLine),
            "limited_circle" => Ok(RoutingMode::LimitedGreatCircle { max_abs_latitude }),
            other => Err(NavigationError::UnknownRoutingMode(other.to_string())),
        }
    }
}

/// One leg between consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

/// A finished route.
///
/// Serializes to the `{"points": [{"latitude", "longitude"}, ..]}`
/// payload the host publishes to its live-data sink and writes into
/// track files. Never empty when returned by the planner; its first and
/// last points are the original first and last waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<GeoPoint>,
}

impl Route {
    /// Number of points in the route
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&GeoPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_tokens() {
        assert_eq!(
            RoutingMode::parse("great_circle", 60.0).unwrap(),
            RoutingMode::GreatCircle
        );
        assert_eq!(
            RoutingMode::parse("rhumb_line", 60.0).unwrap(),
            RoutingMode::RhumbLine
        );
        assert_eq!(
            RoutingMode::parse("limited_circle", 55.0).unwrap(),
            RoutingMode::LimitedGreatCircle {
                max_abs_latitude: 55.0
            }
        );
    }

    #[test]
    fn test_parse_mode_rejects_unknown_token() {
        let err = RoutingMode::parse("orthodrome", 60.0).unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnknownRoutingMode("orthodrome".to_string())
        );
    }

    #[test]
    fn test_route_serialization_schema() {
        let route = Route {
            points: vec![GeoPoint::new(10.0, 20.0), GeoPoint::new(11.0, 21.0)],
        };
        let json = serde_json::to_value(&route).unwrap();
        assert_eq!(json["points"][0]["latitude"], 10.0);
        assert_eq!(json["points"][1]["longitude"], 21.0);
    }

    #[test]
    fn test_route_round_trip() {
        let route = Route {
            points: vec![
                GeoPoint::new(48.5, -4.75),
                GeoPoint::new(48.6, -4.5),
                GeoPoint::new(48.75, -4.25),
            ],
        };
        let encoded = serde_json::to_string(&route).unwrap();
        let decoded: Route = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, route);
    }
}
