use serde::{Deserialize, Serialize};

use super::defaults;
use crate::dimension::Dimension;
use crate::errors::ConfigError;

/// Multipliers a driving-style archetype applies to the performance dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeFactors {
    pub sportiness: f64,
    pub power_to_weight: f64,
    pub max_power: f64,
    pub torque: f64,
    pub acceleration: f64,
}

impl ArchetypeFactors {
    pub fn sporty() -> Self {
        Self {
            sportiness: 3.0,
            power_to_weight: 2.5,
            max_power: 2.0,
            torque: 1.8,
            acceleration: 2.5,
        }
    }

    pub fn mixed() -> Self {
        Self {
            sportiness: 1.8,
            power_to_weight: 1.5,
            max_power: 1.4,
            torque: 1.3,
            acceleration: 1.5,
        }
    }

    /// Factor for `dimension`; 1.0 outside the performance subset.
    pub fn factor(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Sportiness => self.sportiness,
            Dimension::PowerToWeight => self.power_to_weight,
            Dimension::MaxPower => self.max_power,
            Dimension::Torque => self.torque,
            Dimension::Acceleration => self.acceleration,
            _ => 1.0,
        }
    }

    /// Every factor must be finite and positive.
    pub fn validate(&self, archetype: &str) -> Result<(), ConfigError> {
        let factors = [
            ("sportiness", self.sportiness),
            ("power_to_weight", self.power_to_weight),
            ("max_power", self.max_power),
            ("torque", self.torque),
            ("acceleration", self.acceleration),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidSetting {
                    key: format!("weights.{archetype}.{name}"),
                    reason: format!("must be positive and finite, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for ArchetypeFactors {
    fn default() -> Self {
        Self::mixed()
    }
}

/// Weight compiler configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    /// Base weight table on disk. `None` uses the table bundled with the binary.
    pub base_weights_path: Option<String>,
    /// Ceiling every raw weight is clamped to.
    pub max_raw_weight: f64,
    /// Annual kilometres above which charging and range dimensions are boosted.
    pub very_high_annual_km: f64,
    /// Number of parsed base tables kept in the in-process cache.
    pub base_cache_capacity: u64,
    pub sporty: ArchetypeFactors,
    pub mixed: ArchetypeFactors,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            base_weights_path: None,
            max_raw_weight: defaults::DEFAULT_MAX_RAW_WEIGHT,
            very_high_annual_km: defaults::DEFAULT_VERY_HIGH_ANNUAL_KM,
            base_cache_capacity: defaults::DEFAULT_BASE_CACHE_CAPACITY,
            sporty: ArchetypeFactors::sporty(),
            mixed: ArchetypeFactors::mixed(),
        }
    }
}

impl WeightsConfig {
    /// Reject settings the compiler cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_raw_weight.is_finite() || self.max_raw_weight < 0.0 {
            return Err(ConfigError::InvalidSetting {
                key: "weights.max_raw_weight".to_string(),
                reason: format!("must be finite and non-negative, got {}", self.max_raw_weight),
            });
        }
        if self.base_cache_capacity == 0 {
            return Err(ConfigError::InvalidSetting {
                key: "weights.base_cache_capacity".to_string(),
                reason: "must hold at least one table".to_string(),
            });
        }
        self.sporty.validate("sporty")?;
        self.mixed.validate("mixed")
    }
}
