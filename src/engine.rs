//! NavigationEngine - Unified navigation feature management
//!
//! Single entry point composing the route planner, proximity monitor
//! and MOB drift predictor over one settings object. The host
//! constructs one engine at startup and passes it by reference to the
//! map layer and controllers; there is no hidden global.
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  NavigationEngine                          │
//! │  ├─ NavigationSettings                     │
//! │  ├─ RoutePlanner (+ WeatherDeviation)      │
//! │  ├─ ProximityMonitor (+ TargetSnapshot)    │
//! │  └─ MobState (optional)                    │
//! └────────────────────────────────────────────┘
//! ```

use crate::ais::{AisTarget, Evaluation, OwnVessel, ProximityMonitor, TargetSnapshot};
use crate::error::NavigationError;
use crate::geo::GeoPoint;
use crate::mob::MobState;
use crate::route::{Route, RoutePlanner, RoutingMode, WaveHeightProvider, WeatherDeviationPolicy};
use crate::settings::NavigationSettings;

/// Navigation feature context for one vessel.
#[derive(Debug)]
pub struct NavigationEngine {
    settings: NavigationSettings,
    planner: RoutePlanner,
    monitor: ProximityMonitor,
    snapshot: TargetSnapshot,
    mob: Option<MobState>,
    rescue_active: bool,
    generation: u64,
}

impl NavigationEngine {
    pub fn new(settings: NavigationSettings) -> Self {
        let planner = RoutePlanner::new(WeatherDeviationPolicy::new(
            settings.wave_height_threshold,
        ));
        let monitor = ProximityMonitor::new(settings.zone_list());
        NavigationEngine {
            settings,
            planner,
            monitor,
            snapshot: TargetSnapshot::empty(),
            mob: None,
            rescue_active: false,
            generation: 0,
        }
    }

    pub fn settings(&self) -> &NavigationSettings {
        &self.settings
    }

    /// Apply new settings, rebuilding the dependent processors.
    pub fn update_settings(&mut self, settings: NavigationSettings) {
        self.planner = RoutePlanner::new(WeatherDeviationPolicy::new(
            settings.wave_height_threshold,
        ));
        self.monitor.set_zones(settings.zone_list());
        self.settings = settings;
    }

    // --- Routing ---

    /// Plan a route through the waypoints.
    ///
    /// Returns `Ok(None)` when routing is disabled in the settings.
    pub fn plan_route<W: WaveHeightProvider>(
        &self,
        waypoints: &[GeoPoint],
        mode: RoutingMode,
        waves: &W,
    ) -> Result<Option<Route>, NavigationError> {
        if !self.settings.routing_enabled {
            return Ok(None);
        }
        self.planner.plan_route(waypoints, mode, waves).map(Some)
    }

    // --- AIS ---

    /// Replace the target snapshot from a feed update.
    ///
    /// Ignored while AIS is disabled. The update is a JSON mapping from
    /// MMSI to vessel record; malformed entries are skipped.
    pub fn ingest_targets(&mut self, data: &serde_json::Value, now_ms: u64) {
        if !self.settings.ais_enabled {
            return;
        }
        self.generation += 1;
        self.snapshot =
            TargetSnapshot::from_json(self.generation, data, self.settings.max_targets, now_ms);
    }

    /// The current target snapshot
    pub fn snapshot(&self) -> &TargetSnapshot {
        &self.snapshot
    }

    /// Run one proximity evaluation over the current snapshot.
    ///
    /// Returns an empty evaluation while AIS or proximity checking is
    /// disabled. An active SART in the snapshot latches the engine's
    /// rescue flag until acknowledged.
    pub fn evaluate_proximity(&mut self, own: &OwnVessel, timestamp: u64) -> Evaluation {
        if !self.settings.ais_enabled || !self.settings.proximity_enabled {
            return Evaluation::default();
        }
        let evaluation = self.monitor.evaluate(&self.snapshot, own, timestamp);
        if evaluation.rescue_active {
            self.rescue_active = true;
        }
        evaluation
    }

    /// Whether an active rescue (SART) has been seen and not acknowledged
    pub fn rescue_active(&self) -> bool {
        self.rescue_active
    }

    pub fn acknowledge_rescue(&mut self) {
        self.rescue_active = false;
    }

    /// Search tracked targets by MMSI or name substring.
    pub fn find_targets(&self, query: &str) -> Vec<&AisTarget> {
        self.snapshot.find(query)
    }

    // --- MOB ---

    /// Raise a man-overboard at the given position.
    pub fn trigger_mob(&mut self, position: GeoPoint) -> &MobState {
        self.mob.insert(MobState::trigger(position))
    }

    /// Feed one drift sample to the active MOB state, if any.
    pub fn extend_mob_drift(&mut self, current: GeoPoint, speed_knots: f64, direction: f64) {
        if let Some(state) = self.mob.as_mut() {
            state.extend_drift(current, speed_knots, direction);
        }
    }

    /// Stand down the MOB, keeping the cleared state readable.
    pub fn clear_mob(&mut self) {
        if let Some(state) = self.mob.as_mut() {
            state.clear();
        }
    }

    pub fn mob_state(&self) -> Option<&MobState> {
        self.mob.as_ref()
    }
}

impl Default for NavigationEngine {
    fn default() -> Self {
        NavigationEngine::new(NavigationSettings::default())
    }
}
