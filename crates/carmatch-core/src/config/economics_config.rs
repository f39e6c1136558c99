use serde::{Deserialize, Serialize};

use super::defaults;

/// Parameters of the advisory acquisition calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsConfig {
    /// Share of annual income that can go to the vehicle.
    pub income_share: f64,
    /// Ownership horizon the spending capacity is computed over.
    pub horizon_years: u32,
    /// Share of savings that can be spent without draining the cushion.
    pub usable_savings_ratio: f64,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            income_share: defaults::DEFAULT_INCOME_SHARE,
            horizon_years: defaults::DEFAULT_HORIZON_YEARS,
            usable_savings_ratio: defaults::DEFAULT_USABLE_SAVINGS_RATIO,
        }
    }
}
