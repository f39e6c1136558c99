//! The static base weight table.

use std::collections::BTreeMap;
use std::path::Path;

use carmatch_core::dimension::{Dimension, WeightVector};
use carmatch_core::errors::{CarmatchResult, ConfigError};
use serde::Deserialize;

const BUNDLED_TABLE: &str = include_str!("../data/base_weights.toml");
const BUNDLED_SOURCE: &str = "bundled";

#[derive(Deserialize)]
struct RawTable {
    weights: BTreeMap<String, f64>,
}

/// One positive, finite scalar per dimension. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseWeights {
    source: String,
    weights: WeightVector,
}

impl BaseWeights {
    /// The table compiled into the binary.
    pub fn bundled() -> CarmatchResult<Self> {
        Self::from_toml(BUNDLED_TABLE, BUNDLED_SOURCE)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CarmatchResult<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::BaseWeightsUnavailable {
                source_name: source.clone(),
                reason: e.to_string(),
            })?;
        Self::from_toml(&content, &source)
    }

    /// Parse and validate a `[weights]` table.
    ///
    /// Every dimension must be present with a positive finite value. Unknown
    /// keys are rejected so a typo cannot silently drop a dimension.
    pub fn from_toml(content: &str, source: &str) -> CarmatchResult<Self> {
        let raw: RawTable =
            toml::from_str(content).map_err(|e| ConfigError::BaseWeightsUnavailable {
                source_name: source.to_string(),
                reason: e.to_string(),
            })?;

        let mut weights = WeightVector::new();
        for (key, value) in raw.weights {
            let Some(dimension) = Dimension::from_key(&key) else {
                return Err(ConfigError::BaseWeightsUnavailable {
                    source_name: source.to_string(),
                    reason: format!("unknown dimension {key}"),
                }
                .into());
            };
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidBaseWeight {
                    dimension: key,
                    value,
                }
                .into());
            }
            weights.insert(dimension, value);
        }

        if let Some(missing) = Dimension::ALL.iter().find(|d| !weights.contains_key(d)) {
            return Err(ConfigError::MissingBaseWeight {
                dimension: missing.to_string(),
            }
            .into());
        }

        Ok(Self {
            source: source.to_string(),
            weights,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.weights.get(&dimension).copied().unwrap_or(0.0)
    }

    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }
}
