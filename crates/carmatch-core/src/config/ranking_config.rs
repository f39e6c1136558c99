use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub default_limit: usize,
    /// Model years before this count as old for technology-minded users.
    pub technology_cutoff_year: u16,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_limit: defaults::DEFAULT_RESULT_LIMIT,
            technology_cutoff_year: defaults::DEFAULT_TECHNOLOGY_CUTOFF_YEAR,
        }
    }
}
