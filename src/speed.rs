//! Speed-limit resolution for heavy vehicles.
//!
//! Lookup is layered: per-country tables first, then a default table keyed
//! only by road type, then a generic fallback. Resolution never fails for a
//! non-empty road type; unknown inputs degrade to conservative defaults.

use std::collections::HashMap;

/// Road-type key for the generic fallback entry in the default table.
pub const DEFAULT_ROAD_TYPE: &str = "default";

/// Conservative speed used if a table was built without a generic entry.
const FALLBACK_KMH: f64 = 50.0;

/// Immutable per-country and default speed-limit tables, in km/h.
///
/// Built once at calculator construction; safe to share across concurrent
/// route calculations.
#[derive(Debug, Clone)]
pub struct SpeedLimitTable {
    by_country: HashMap<String, HashMap<String, f64>>,
    defaults: HashMap<String, f64>,
}

impl SpeedLimitTable {
    pub fn new(
        by_country: HashMap<String, HashMap<String, f64>>,
        defaults: HashMap<String, f64>,
    ) -> Self {
        Self {
            by_country,
            defaults,
        }
    }

    /// Resolve the effective limit for a road type in a country.
    ///
    /// Tiers: exact country entry, then the default table by road type,
    /// then the generic default.
    pub fn limit(&self, road_type: &str, country_code: &str) -> f64 {
        self.country_limit(road_type, country_code)
            .or_else(|| self.default_limit(road_type))
            .unwrap_or_else(|| self.generic_default())
    }

    /// Tier 1: exact (country, road type) entry.
    pub fn country_limit(&self, road_type: &str, country_code: &str) -> Option<f64> {
        self.by_country
            .get(country_code)
            .and_then(|table| table.get(road_type))
            .copied()
    }

    /// Tier 2: default table keyed by road type only.
    pub fn default_limit(&self, road_type: &str) -> Option<f64> {
        self.defaults.get(road_type).copied()
    }

    /// Tier 3: generic default entry of the default table.
    pub fn generic_default(&self) -> f64 {
        self.defaults
            .get(DEFAULT_ROAD_TYPE)
            .copied()
            .unwrap_or(FALLBACK_KMH)
    }
}

impl Default for SpeedLimitTable {
    /// Common European limits for vehicles over 3.5 t.
    fn default() -> Self {
        let defaults = HashMap::from([
            ("motorway".to_string(), 90.0),
            ("trunk".to_string(), 80.0),
            ("primary".to_string(), 80.0),
            ("secondary".to_string(), 70.0),
            ("residential".to_string(), 50.0),
            (DEFAULT_ROAD_TYPE.to_string(), 50.0),
        ]);

        let by_country = HashMap::from([
            (
                "ES".to_string(),
                HashMap::from([
                    ("motorway".to_string(), 90.0),
                    ("trunk".to_string(), 80.0),
                    ("primary".to_string(), 80.0),
                    ("secondary".to_string(), 70.0),
                    ("residential".to_string(), 50.0),
                ]),
            ),
            (
                "DE".to_string(),
                HashMap::from([
                    ("motorway".to_string(), 80.0),
                    ("trunk".to_string(), 80.0),
                    ("primary".to_string(), 60.0),
                    ("secondary".to_string(), 60.0),
                    ("residential".to_string(), 50.0),
                ]),
            ),
            (
                "FR".to_string(),
                HashMap::from([
                    ("motorway".to_string(), 90.0),
                    ("trunk".to_string(), 80.0),
                    ("primary".to_string(), 80.0),
                    ("secondary".to_string(), 80.0),
                    ("residential".to_string(), 50.0),
                ]),
            ),
        ]);

        Self::new(by_country, defaults)
    }
}
