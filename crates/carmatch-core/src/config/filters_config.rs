use serde::{Deserialize, Serialize};

use super::defaults;

/// Minimum-score tiers the filter compiler backfills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    pub aesthetics_min_valued: f64,
    pub aesthetics_min_not_valued: f64,
    pub premium_min_enthusiast: f64,
    pub premium_min_not_enthusiast: f64,
    /// Singularity minimum is the sum of one enthusiast term and one design term.
    pub singularity_enthusiast: f64,
    pub singularity_not_enthusiast: f64,
    pub singularity_exclusive: f64,
    pub singularity_not_exclusive: f64,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            aesthetics_min_valued: defaults::DEFAULT_AESTHETICS_MIN_VALUED,
            aesthetics_min_not_valued: defaults::DEFAULT_AESTHETICS_MIN_NOT_VALUED,
            premium_min_enthusiast: defaults::DEFAULT_PREMIUM_MIN_ENTHUSIAST,
            premium_min_not_enthusiast: defaults::DEFAULT_PREMIUM_MIN_NOT_ENTHUSIAST,
            singularity_enthusiast: defaults::DEFAULT_SINGULARITY_ENTHUSIAST,
            singularity_not_enthusiast: defaults::DEFAULT_SINGULARITY_NOT_ENTHUSIAST,
            singularity_exclusive: defaults::DEFAULT_SINGULARITY_EXCLUSIVE,
            singularity_not_exclusive: defaults::DEFAULT_SINGULARITY_NOT_EXCLUSIVE,
        }
    }
}
