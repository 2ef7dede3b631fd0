//! AIS Target State
//!
//! Typed vessel records and the snapshot container they live in. A
//! snapshot is built once from a feed update and then only read;
//! consumers replace it wholesale instead of mutating shared state.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A single AIS vessel contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AisTarget {
    /// Maritime Mobile Service Identity, the unique target key
    pub mmsi: String,
    /// Display name, if the vessel broadcast one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Last reported position
    pub position: GeoPoint,
    /// Speed over ground in knots
    pub speed_over_ground: f64,
    /// True course over ground in degrees (0-360)
    pub course_over_ground: f64,
    /// Search-and-rescue transponder flag
    pub sart: bool,
    /// Unix timestamp (ms) of the last report
    pub last_update: u64,
}

/// Wire schema of one vessel entry in the feed's target mapping.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VesselRecord {
    #[serde(default)]
    navigation: Option<VesselNavigation>,
    #[serde(default)]
    speed_over_ground: Option<f64>,
    #[serde(default)]
    course_over_ground_true: Option<f64>,
    #[serde(default)]
    sart: bool,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VesselNavigation {
    #[serde(default)]
    position: Option<VesselPosition>,
}

#[derive(Debug, Deserialize)]
struct VesselPosition {
    latitude: f64,
    longitude: f64,
}

/// An owned, consistent view of all tracked targets.
///
/// Built once per feed update and handed to the evaluation as a value;
/// the monitor never locks or mutates shared target state. The
/// generation counter identifies which update a result was computed
/// from.
#[derive(Debug, Clone, Default)]
pub struct TargetSnapshot {
    generation: u64,
    targets: BTreeMap<String, AisTarget>,
}

impl TargetSnapshot {
    /// An empty snapshot, generation 0.
    pub fn empty() -> Self {
        TargetSnapshot::default()
    }

    /// Build a snapshot from already-typed targets.
    pub fn from_targets<I>(generation: u64, targets: I) -> Self
    where
        I: IntoIterator<Item = AisTarget>,
    {
        TargetSnapshot {
            generation,
            targets: targets
                .into_iter()
                .map(|target| (target.mmsi.clone(), target))
                .collect(),
        }
    }

    /// Ingest a feed update: a JSON mapping from MMSI to vessel record.
    ///
    /// Entries that fail to parse or carry no position are skipped, not
    /// errors. At most `max_targets` entries are kept.
    pub fn from_json(
        generation: u64,
        data: &serde_json::Value,
        max_targets: usize,
        now_ms: u64,
    ) -> Self {
        let mut targets = BTreeMap::new();

        let Some(entries) = data.as_object() else {
            debug!("AIS feed update is not an object, ignoring");
            return TargetSnapshot {
                generation,
                targets,
            };
        };

        for (mmsi, value) in entries {
            if targets.len() >= max_targets {
                debug!("AIS target cap of {max_targets} reached, dropping remainder");
                break;
            }
            let record: VesselRecord = match serde_json::from_value(value.clone()) {
                Ok(record) => record,
                Err(err) => {
                    debug!("Skipping malformed AIS entry {mmsi}: {err}");
                    continue;
                }
            };
            let Some(position) = record.navigation.and_then(|nav| nav.position) else {
                debug!("Skipping AIS target {mmsi} without a position");
                continue;
            };

            targets.insert(
                mmsi.clone(),
                AisTarget {
                    mmsi: mmsi.clone(),
                    name: record.name,
                    position: GeoPoint::new(position.latitude, position.longitude),
                    speed_over_ground: record.speed_over_ground.unwrap_or(0.0),
                    course_over_ground: record.course_over_ground_true.unwrap_or(0.0),
                    sart: record.sart,
                    last_update: now_ms,
                },
            );
        }

        TargetSnapshot {
            generation,
            targets,
        }
    }

    /// Which feed update this snapshot was built from
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, mmsi: &str) -> Option<&AisTarget> {
        self.targets.get(mmsi)
    }

    /// Iterate over targets in MMSI order.
    pub fn targets(&self) -> impl Iterator<Item = &AisTarget> {
        self.targets.values()
    }

    /// Search tracked targets by MMSI or name substring.
    ///
    /// Matching is case-insensitive.
    pub fn find(&self, query: &str) -> Vec<&AisTarget> {
        let query = query.to_lowercase();
        self.targets
            .values()
            .filter(|target| {
                target.mmsi.to_lowercase().contains(&query)
                    || target
                        .name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&query))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn target(mmsi: &str, name: Option<&str>, lat: f64, lon: f64) -> AisTarget {
        AisTarget {
            mmsi: mmsi.to_string(),
            name: name.map(str::to_string),
            position: GeoPoint::new(lat, lon),
            speed_over_ground: 6.0,
            course_over_ground: 90.0,
            sart: false,
            last_update: 0,
        }
    }

    #[test]
    fn test_ingest_nested_schema() {
        let feed = json!({
            "244010000": {
                "navigation": { "position": { "latitude": 52.0, "longitude": 4.0 } },
                "speedOverGround": 12.5,
                "courseOverGroundTrue": 271.0,
                "name": "Zeearend"
            }
        });
        let snapshot = TargetSnapshot::from_json(1, &feed, 100, 1000);
        assert_eq!(snapshot.len(), 1);

        let target = snapshot.get("244010000").unwrap();
        assert_eq!(target.name.as_deref(), Some("Zeearend"));
        assert_eq!(target.speed_over_ground, 12.5);
        assert_eq!(target.course_over_ground, 271.0);
        assert!(!target.sart);
        assert_eq!(target.last_update, 1000);
    }

    #[test]
    fn test_ingest_skips_entries_without_position() {
        let feed = json!({
            "111111111": { "name": "NoFix" },
            "222222222": { "navigation": {} },
            "333333333": {
                "navigation": { "position": { "latitude": 1.0, "longitude": 2.0 } }
            }
        });
        let snapshot = TargetSnapshot::from_json(1, &feed, 100, 0);
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("333333333").is_some());
    }

    #[test]
    fn test_ingest_defaults_missing_motion_fields() {
        let feed = json!({
            "444444444": {
                "navigation": { "position": { "latitude": 1.0, "longitude": 2.0 } }
            }
        });
        let snapshot = TargetSnapshot::from_json(1, &feed, 100, 0);
        let target = snapshot.get("444444444").unwrap();
        assert_eq!(target.speed_over_ground, 0.0);
        assert_eq!(target.course_over_ground, 0.0);
    }

    #[test]
    fn test_ingest_honors_target_cap() {
        let feed = json!({
            "100000001": { "navigation": { "position": { "latitude": 0.0, "longitude": 0.0 } } },
            "100000002": { "navigation": { "position": { "latitude": 0.0, "longitude": 1.0 } } },
            "100000003": { "navigation": { "position": { "latitude": 0.0, "longitude": 2.0 } } }
        });
        let snapshot = TargetSnapshot::from_json(1, &feed, 2, 0);
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_ingest_sart_flag() {
        let feed = json!({
            "970010000": {
                "navigation": { "position": { "latitude": 48.0, "longitude": -5.0 } },
                "sart": true
            }
        });
        let snapshot = TargetSnapshot::from_json(1, &feed, 100, 0);
        assert!(snapshot.get("970010000").unwrap().sart);
    }

    #[test]
    fn test_find_matches_mmsi_and_name() {
        let snapshot = TargetSnapshot::from_targets(
            1,
            vec![
                target("244010000", Some("Zeearend"), 52.0, 4.0),
                target("244020000", Some("Morgenster"), 52.1, 4.1),
                target("310999000", None, 52.2, 4.2),
            ],
        );

        assert_eq!(snapshot.find("2440").len(), 2);
        assert_eq!(snapshot.find("morgen").len(), 1);
        assert_eq!(snapshot.find("ZEEAREND").len(), 1);
        assert_eq!(snapshot.find("310999000").len(), 1);
        assert!(snapshot.find("albatross").is_empty());
    }

    #[test]
    fn test_snapshot_iteration_is_ordered() {
        let snapshot = TargetSnapshot::from_targets(
            1,
            vec![
                target("300000000", None, 0.0, 0.0),
                target("100000000", None, 0.0, 0.0),
                target("200000000", None, 0.0, 0.0),
            ],
        );
        let order: Vec<&str> = snapshot.targets().map(|t| t.mmsi.as_str()).collect();
        assert_eq!(order, vec!["100000000", "200000000", "300000000"]);
    }
}
