mod adjustments_config;
pub mod defaults;
mod economics_config;
mod filters_config;
mod flags_config;
mod observability_config;
mod ranking_config;
mod weights_config;

pub use adjustments_config::AdjustmentsConfig;
pub use economics_config::EconomicsConfig;
pub use filters_config::FiltersConfig;
pub use flags_config::FlagsConfig;
pub use observability_config::ObservabilityConfig;
pub use ranking_config::RankingConfig;
pub use weights_config::{ArchetypeFactors, WeightsConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CarmatchResult, ConfigError};

/// Top-level engine configuration. Every section falls back to its defaults,
/// so an empty TOML document is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarmatchConfig {
    pub weights: WeightsConfig,
    pub flags: FlagsConfig,
    pub filters: FiltersConfig,
    pub economics: EconomicsConfig,
    pub adjustments: AdjustmentsConfig,
    pub ranking: RankingConfig,
    pub observability: ObservabilityConfig,
}

impl CarmatchConfig {
    pub fn from_toml(toml_str: &str) -> CarmatchResult<Self> {
        toml::from_str(toml_str).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> CarmatchResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }
}
