//! # Nautica Core
//!
//! Navigation geometry and collision-avoidance engine for the Nautica
//! chartplotter plugin.
//!
//! This crate contains pure spherical-geometry and kinematic logic with
//! **zero I/O dependencies**. Rendering, GPX persistence, live-data
//! transport and UI wiring live in the host plugin; this library only
//! computes values from the inputs it is handed.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  nautica-core (no I/O, no async)                            │
//! │  ├── geo        (spherical distance & interpolation)        │
//! │  ├── route/     (leg interpolation, weather deviation,      │
//! │  │               multi-leg planning)                        │
//! │  ├── ais/       (target snapshots, zones, CPA/TCPA)         │
//! │  ├── mob        (drift dead-reckoning)                      │
//! │  └── engine     (composition root, settings enforcement)    │
//! └─────────────────────────────────────────────────────────────┘
//!                ▲                        ▲
//!    ┌───────────┴──────────┐  ┌─────────┴──────────┐
//!    │  map layer           │  │ settings-driven    │
//!    │  (rendering)         │  │ controller         │
//!    └──────────────────────┘  └────────────────────┘
//! ```
//!
//! ## Concurrency contract
//!
//! Every operation is a finite, synchronous computation. The proximity
//! evaluation reads a caller-supplied, already-consistent
//! [`TargetSnapshot`]; it does not lock or mutate shared state. A host
//! fetching AIS data on a background worker must build a new snapshot
//! (or merge under its own synchronization) before calling
//! [`NavigationEngine::evaluate_proximity`], and must drive evaluations
//! on its own cadence.
//!
//! ## Example: Planning a Route
//!
//! ```rust
//! use nautica_core::{GeoPoint, RoutePlanner, RoutingMode, WaveHeightProvider};
//!
//! struct CalmSeas;
//!
//! impl WaveHeightProvider for CalmSeas {
//!     fn wave_height_m(&self, _point: &GeoPoint) -> f64 {
//!         0.0
//!     }
//! }
//!
//! let planner = RoutePlanner::default();
//! let waypoints = [GeoPoint::new(48.0, -5.0), GeoPoint::new(50.5, -1.5)];
//! let route = planner
//!     .plan_route(&waypoints, RoutingMode::GreatCircle, &CalmSeas)
//!     .unwrap();
//! assert_eq!(route.first(), Some(&waypoints[0]));
//! assert_eq!(route.last(), Some(&waypoints[1]));
//! ```
//!
//! ## Example: Proximity Evaluation
//!
//! ```rust
//! use nautica_core::{GeoPoint, OwnVessel, ProximityMonitor, TargetSnapshot};
//!
//! let monitor = ProximityMonitor::new(vec![1.0, 0.5]);
//! let own = OwnVessel {
//!     position: GeoPoint::new(0.0, 0.0),
//!     course_over_ground: 0.0,
//!     speed_over_ground: 6.0,
//! };
//! let evaluation = monitor.evaluate(&TargetSnapshot::empty(), &own, 0);
//! assert!(evaluation.alerts.is_empty());
//! ```

pub mod ais;
pub mod engine;
pub mod error;
pub mod geo;
pub mod mob;
pub mod route;
pub mod settings;

// Re-export commonly used types
pub use ais::{
    AisTarget, CpaResult, Evaluation, OwnVessel, ProximityAlert, ProximityMonitor, TargetReport,
    TargetSnapshot,
};
pub use engine::NavigationEngine;
pub use error::NavigationError;
pub use geo::GeoPoint;
pub use mob::MobState;
pub use route::{
    Route, RouteLeg, RoutePlanner, RoutingMode, WaveHeightProvider, WeatherDeviationPolicy,
};
pub use settings::NavigationSettings;
