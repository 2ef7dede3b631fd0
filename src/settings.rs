//! Navigation Settings
//!
//! Configuration surface owned by the host application's settings
//! store. Values arrive as the host stores them (including the
//! comma-separated zone list) and are validated here.

use log::warn;
use serde::{Deserialize, Serialize};

/// Fallback zone radius for malformed zone tokens
const DEFAULT_ZONE_NM: f64 = 1.0;

/// Settings consumed by the navigation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSettings {
    /// Whether route planning is enabled
    pub routing_enabled: bool,
    /// Whether AIS target tracking is enabled
    pub ais_enabled: bool,
    /// Whether proximity evaluation is enabled
    pub proximity_enabled: bool,
    /// Comma-separated zone radii, e.g. "1nm,0.5nm"
    pub proximity_zones: String,
    /// Cap on ingested AIS targets
    pub max_targets: usize,
    /// Wave height in meters above which route points are deviated
    pub wave_height_threshold: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        NavigationSettings {
            routing_enabled: true,
            ais_enabled: true,
            proximity_enabled: true,
            proximity_zones: "1nm,0.5nm".to_string(),
            max_targets: 100,
            wave_height_threshold: 3.0, // meters
        }
    }
}

impl NavigationSettings {
    /// Parsed zone radii in nautical miles, in configured order.
    pub fn zone_list(&self) -> Vec<f64> {
        parse_zone_list(&self.proximity_zones)
    }
}

/// Parse a comma-separated zone list like "1nm,0.5nm".
///
/// Empty tokens are skipped; a token that does not parse as a number
/// falls back to 1.0 nm rather than failing the whole list.
pub fn parse_zone_list(zones: &str) -> Vec<f64> {
    zones
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let number = token.strip_suffix("nm").unwrap_or(token).trim();
            number.parse::<f64>().unwrap_or_else(|_| {
                warn!("Malformed proximity zone {token:?}, using {DEFAULT_ZONE_NM} nm");
                DEFAULT_ZONE_NM
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zone_list() {
        let settings = NavigationSettings::default();
        assert_eq!(settings.zone_list(), vec![1.0, 0.5]);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_zone_list(" 2nm , 1nm , 0.25nm "), vec![2.0, 1.0, 0.25]);
    }

    #[test]
    fn test_parse_bare_numbers() {
        assert_eq!(parse_zone_list("3,1.5"), vec![3.0, 1.5]);
    }

    #[test]
    fn test_malformed_token_falls_back() {
        assert_eq!(parse_zone_list("1nm,huh,0.5nm"), vec![1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        assert_eq!(parse_zone_list("1nm,,0.5nm,"), vec![1.0, 0.5]);
        assert!(parse_zone_list("").is_empty());
    }

    #[test]
    fn test_duplicate_zones_are_kept() {
        // Zones need not be distinct; both fire independently
        assert_eq!(parse_zone_list("1nm,1nm"), vec![1.0, 1.0]);
    }
}
