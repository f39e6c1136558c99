use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds the flag rules compare 0–10 ratings and passenger counts against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub comfort_threshold: u8,
    pub technology_threshold: u8,
    pub environmental_threshold: u8,
    pub usage_cost_threshold: u8,
    /// Occasional companions up to this many other passengers count as low load.
    pub low_load_max_other_passengers: u32,
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            comfort_threshold: defaults::DEFAULT_COMFORT_THRESHOLD,
            technology_threshold: defaults::DEFAULT_TECHNOLOGY_THRESHOLD,
            environmental_threshold: defaults::DEFAULT_ENVIRONMENTAL_THRESHOLD,
            usage_cost_threshold: defaults::DEFAULT_USAGE_COST_THRESHOLD,
            low_load_max_other_passengers: defaults::DEFAULT_LOW_LOAD_MAX_OTHER_PASSENGERS,
        }
    }
}
