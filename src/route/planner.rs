//! Route Planner
//!
//! Builds a finished route from an ordered waypoint list: per-leg
//! interpolation, weather deviation, assembly. Publishing the result to
//! the live-data sink and exporting track files are the caller's
//! responsibility; the planner only returns the route value.

use log::debug;

use super::interpolator::interpolate;
use super::weather::{WaveHeightProvider, WeatherDeviationPolicy};
use super::{Route, RouteLeg, RoutingMode};
use crate::error::NavigationError;
use crate::geo::GeoPoint;

/// Minimum number of waypoints that can form a route
const MIN_WAYPOINTS: usize = 2;

/// Multi-leg route construction.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    weather: WeatherDeviationPolicy,
}

impl RoutePlanner {
    pub fn new(weather: WeatherDeviationPolicy) -> Self {
        RoutePlanner { weather }
    }

    pub fn weather_policy(&self) -> &WeatherDeviationPolicy {
        &self.weather
    }

    /// Plan a route through the given waypoints.
    ///
    /// Each consecutive pair becomes a leg, interpolated in the selected
    /// mode and passed through the weather deviation. The final waypoint
    /// is appended exactly once, and the route's first and last points
    /// always equal the first and last input waypoints: deviation never
    /// moves the user's endpoints.
    pub fn plan_route<W: WaveHeightProvider>(
        &self,
        waypoints: &[GeoPoint],
        mode: RoutingMode,
        waves: &W,
    ) -> Result<Route, NavigationError> {
        if waypoints.len() < MIN_WAYPOINTS {
            return Err(NavigationError::TooFewWaypoints {
                expected: MIN_WAYPOINTS,
                actual: waypoints.len(),
            });
        }

        let mut points = Vec::new();
        for pair in waypoints.windows(2) {
            let leg = RouteLeg {
                start: pair[0],
                end: pair[1],
            };
            let segment = interpolate(&leg, mode);
            points.extend(self.weather.adjust(&segment, waves));
        }

        points[0] = waypoints[0];
        points.push(waypoints[waypoints.len() - 1]);

        debug!(
            "Planned route: {} waypoints -> {} points ({:?})",
            waypoints.len(),
            points.len(),
            mode
        );
        Ok(Route { points })
    }
}
