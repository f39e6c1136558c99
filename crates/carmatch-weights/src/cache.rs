//! In-process cache of parsed base tables, keyed by source.

use std::sync::Arc;

use carmatch_core::config::WeightsConfig;
use carmatch_core::errors::CarmatchResult;
use moka::sync::Cache;
use tracing::debug;

use crate::base::BaseWeights;

const BUNDLED_KEY: &str = "<bundled>";

/// Shared read-only base tables. Safe for concurrent readers; entries are
/// never mutated after insertion.
#[derive(Clone)]
pub struct BaseWeightCache {
    cache: Cache<String, Arc<BaseWeights>>,
}

impl BaseWeightCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Sized by `weights.base_cache_capacity`.
    pub fn from_config(config: &WeightsConfig) -> Self {
        Self::new(config.base_cache_capacity)
    }

    /// Load the table `config` points at, parsing it on first use only.
    pub fn get_or_load(&self, config: &WeightsConfig) -> CarmatchResult<Arc<BaseWeights>> {
        let key = config
            .base_weights_path
            .clone()
            .unwrap_or_else(|| BUNDLED_KEY.to_string());

        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }

        let table = match &config.base_weights_path {
            Some(path) => BaseWeights::from_path(path)?,
            None => BaseWeights::bundled()?,
        };
        debug!(source = table.source(), "base weight table loaded");
        let table = Arc::new(table);
        self.cache.insert(key, Arc::clone(&table));
        Ok(table)
    }

    /// Number of cached tables.
    pub fn len(&self) -> u64 {
        // entry_count lags behind inserts until pending maintenance runs.
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BaseWeightCache {
    fn default() -> Self {
        Self::from_config(&WeightsConfig::default())
    }
}
