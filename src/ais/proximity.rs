//! AIS Proximity Monitoring
//!
//! Evaluates a target snapshot against configured distance zones,
//! computes collision-risk metrics per target and raises the rescue
//! signal for active SART transponders.

use log::warn;
use serde::{Deserialize, Serialize};

use super::cpa::{calculate_cpa_tcpa, CpaResult, OwnVessel};
use super::target::TargetSnapshot;
use crate::geo::{distance_nm, METERS_PER_NM};

/// A target has come inside one of the configured zones.
///
/// Emitted per (target, zone) pair: several zones can fire
/// independently for the same target on one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityAlert {
    /// MMSI of the intruding target
    pub mmsi: String,
    /// Distance to the target in nautical miles
    pub distance_nm: f64,
    /// The zone radius that fired, in nautical miles
    pub zone_nm: f64,
    /// Timestamp of the evaluation (ms)
    pub timestamp: u64,
}

/// Per-target metrics for label and popup display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetReport {
    pub mmsi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Current distance from own vessel in nautical miles
    pub distance_nm: f64,
    /// Speed over ground in knots
    pub speed_over_ground: f64,
    /// True course over ground in degrees
    pub course_over_ground: f64,
    pub cpa: CpaResult,
}

impl TargetReport {
    /// Multi-line text for the target popup.
    pub fn summary(&self) -> String {
        format!(
            "MMSI: {}\nName: {}\nSpeed: {:.1} kt\nCourse: {:.0}\nCPA: {:.2} nm\nTCPA: {:.1} min",
            self.mmsi,
            self.name.as_deref().unwrap_or("Unknown"),
            self.speed_over_ground,
            self.course_over_ground,
            self.cpa.cpa_meters / METERS_PER_NM,
            self.cpa.tcpa_seconds / 60.0,
        )
    }
}

/// Output of one proximity evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Zone intrusions, one per (target, zone) pair
    pub alerts: Vec<ProximityAlert>,
    /// Display metrics for every evaluated target, in MMSI order
    pub reports: Vec<TargetReport>,
    /// True when any target carries an active SART transponder
    pub rescue_active: bool,
}

/// Evaluates target snapshots against proximity zones.
///
/// The monitor reads a caller-supplied, already-consistent snapshot; it
/// does not lock or mutate shared state. Whatever cadence evaluations
/// run at is the caller's scheduling concern.
#[derive(Debug, Clone)]
pub struct ProximityMonitor {
    zones: Vec<f64>,
}

impl ProximityMonitor {
    /// Create a monitor with zone radii in nautical miles.
    ///
    /// Zones are kept in the order given; they need not be distinct.
    pub fn new(zones: Vec<f64>) -> Self {
        ProximityMonitor { zones }
    }

    /// Configured zone radii in nautical miles
    pub fn zones(&self) -> &[f64] {
        &self.zones
    }

    pub fn set_zones(&mut self, zones: Vec<f64>) {
        self.zones = zones;
    }

    /// Evaluate all targets in the snapshot.
    ///
    /// For every target: great-circle distance to own position, one
    /// alert per zone the target is inside of, and CPA/TCPA from the
    /// relative velocity. A negative TCPA (closest approach already
    /// past) is reported but raises no alert by itself.
    pub fn evaluate(
        &self,
        snapshot: &TargetSnapshot,
        own: &OwnVessel,
        timestamp: u64,
    ) -> Evaluation {
        let mut evaluation = Evaluation::default();

        for target in snapshot.targets() {
            if target.sart {
                warn!("SART transponder active on {}", target.mmsi);
                evaluation.rescue_active = true;
            }

            let distance = distance_nm(&own.position, &target.position);
            for &zone_nm in &self.zones {
                if distance < zone_nm {
                    warn!(
                        "Proximity alert for {} at {:.2} nm (zone {} nm)",
                        target.mmsi, distance, zone_nm
                    );
                    evaluation.alerts.push(ProximityAlert {
                        mmsi: target.mmsi.clone(),
                        distance_nm: distance,
                        zone_nm,
                        timestamp,
                    });
                }
            }

            evaluation.reports.push(TargetReport {
                mmsi: target.mmsi.clone(),
                name: target.name.clone(),
                distance_nm: distance,
                speed_over_ground: target.speed_over_ground,
                course_over_ground: target.course_over_ground,
                cpa: calculate_cpa_tcpa(target, own),
            });
        }

        evaluation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ais::target::AisTarget;
    use crate::geo::GeoPoint;

    fn own_vessel() -> OwnVessel {
        OwnVessel {
            position: GeoPoint::new(0.0, 0.0),
            course_over_ground: 0.0,
            speed_over_ground: 6.0,
        }
    }

    /// A target the given number of nautical miles due north of origin.
    fn target_at_nm(mmsi: &str, range_nm: f64, sart: bool) -> AisTarget {
        AisTarget {
            mmsi: mmsi.to_string(),
            name: None,
            position: GeoPoint::new(range_nm / 60.0, 0.0),
            speed_over_ground: 4.0,
            course_over_ground: 90.0,
            sart,
            last_update: 0,
        }
    }

    #[test]
    fn test_target_inside_both_zones_fires_twice() {
        let monitor = ProximityMonitor::new(vec![1.0, 0.5]);
        let snapshot =
            TargetSnapshot::from_targets(1, vec![target_at_nm("244010000", 0.4, false)]);
        let evaluation = monitor.evaluate(&snapshot, &own_vessel(), 5000);

        assert_eq!(evaluation.alerts.len(), 2);
        let zones: Vec<f64> = evaluation.alerts.iter().map(|a| a.zone_nm).collect();
        assert_eq!(zones, vec![1.0, 0.5]);
        for alert in &evaluation.alerts {
            assert_eq!(alert.mmsi, "244010000");
            assert!((alert.distance_nm - 0.4).abs() < 0.01);
            assert_eq!(alert.timestamp, 5000);
        }
    }

    #[test]
    fn test_target_inside_outer_zone_fires_once() {
        let monitor = ProximityMonitor::new(vec![1.0, 0.5]);
        let snapshot =
            TargetSnapshot::from_targets(1, vec![target_at_nm("244010000", 0.6, false)]);
        let evaluation = monitor.evaluate(&snapshot, &own_vessel(), 0);

        assert_eq!(evaluation.alerts.len(), 1);
        assert_eq!(evaluation.alerts[0].zone_nm, 1.0);
    }

    #[test]
    fn test_distant_target_fires_nothing() {
        let monitor = ProximityMonitor::new(vec![1.0, 0.5]);
        let snapshot =
            TargetSnapshot::from_targets(1, vec![target_at_nm("244010000", 4.0, false)]);
        let evaluation = monitor.evaluate(&snapshot, &own_vessel(), 0);

        assert!(evaluation.alerts.is_empty());
        assert_eq!(evaluation.reports.len(), 1);
    }

    #[test]
    fn test_sart_raises_rescue_signal() {
        let monitor = ProximityMonitor::new(vec![1.0]);
        let snapshot = TargetSnapshot::from_targets(
            1,
            vec![
                target_at_nm("244010000", 5.0, false),
                target_at_nm("970010000", 8.0, true),
            ],
        );
        let evaluation = monitor.evaluate(&snapshot, &own_vessel(), 0);

        assert!(evaluation.rescue_active);
        // SART is a rescue signal, not a zone intrusion
        assert!(evaluation.alerts.is_empty());
    }

    #[test]
    fn test_empty_snapshot() {
        let monitor = ProximityMonitor::new(vec![1.0, 0.5]);
        let evaluation = monitor.evaluate(&TargetSnapshot::empty(), &own_vessel(), 0);
        assert_eq!(evaluation, Evaluation::default());
    }

    #[test]
    fn test_reports_carry_cpa() {
        let monitor = ProximityMonitor::new(vec![]);
        let snapshot =
            TargetSnapshot::from_targets(1, vec![target_at_nm("244010000", 2.0, false)]);
        let evaluation = monitor.evaluate(&snapshot, &own_vessel(), 0);

        let report = &evaluation.reports[0];
        assert!((report.distance_nm - 2.0).abs() < 0.01);
        assert!(report.cpa.cpa_meters > 0.0);
    }

    #[test]
    fn test_report_summary_format() {
        let report = TargetReport {
            mmsi: "244010000".to_string(),
            name: Some("Zeearend".to_string()),
            distance_nm: 2.0,
            speed_over_ground: 12.5,
            course_over_ground: 271.0,
            cpa: CpaResult {
                cpa_meters: 1852.0,
                tcpa_seconds: 600.0,
            },
        };
        let summary = report.summary();
        assert!(summary.contains("MMSI: 244010000"));
        assert!(summary.contains("Name: Zeearend"));
        assert!(summary.contains("CPA: 1.00 nm"));
        assert!(summary.contains("TCPA: 10.0 min"));
    }
}
