//! The weight compiler.
//!
//! Fixed pipeline: base table → square-root dampening → driving-style
//! archetype boost → multiplier rules → raw = base × multiplier → clamp.

use std::sync::Arc;

use carmatch_core::config::WeightsConfig;
use carmatch_core::dimension::WeightVector;
use carmatch_core::errors::CarmatchResult;
use carmatch_core::models::PassengerInfo;
use carmatch_core::profile::{DrivingStyle, UserProfile};
use tracing::{debug, warn};

use crate::base::BaseWeights;
use crate::cache::BaseWeightCache;
use crate::rules::{WeightInputs, WeightRuleTable};

/// Compiles profiles into raw weight vectors. Stateless between calls.
#[derive(Debug, Clone)]
pub struct WeightCompiler {
    config: WeightsConfig,
    base: Arc<BaseWeights>,
    rules: WeightRuleTable,
}

impl WeightCompiler {
    /// Build a compiler over the base table `config` names.
    ///
    /// Fails when the settings are unusable or the base table cannot be
    /// loaded, both of which make every ranking meaningless.
    pub fn new(config: WeightsConfig, cache: &BaseWeightCache) -> CarmatchResult<Self> {
        config.validate()?;
        let base = cache.get_or_load(&config)?;
        Ok(Self::with_parts(config, base, WeightRuleTable::standard()))
    }

    pub fn with_parts(config: WeightsConfig, base: Arc<BaseWeights>, rules: WeightRuleTable) -> Self {
        Self {
            config,
            base,
            rules,
        }
    }

    pub fn config(&self) -> &WeightsConfig {
        &self.config
    }

    /// Dampened base table with the archetype boost for `style` applied.
    pub fn dynamic_base(&self, style: Option<DrivingStyle>) -> WeightVector {
        let archetype = match style {
            Some(DrivingStyle::Sporty) => Some(&self.config.sporty),
            Some(DrivingStyle::Mixed) => Some(&self.config.mixed),
            _ => None,
        };
        self.base
            .weights()
            .iter()
            .map(|(dimension, base)| {
                let dampened = base.sqrt();
                let boost = archetype.map_or(1.0, |a| a.factor(*dimension));
                (*dimension, dampened * boost)
            })
            .collect()
    }

    /// Raw per-dimension weights in `[0, max_raw_weight]`.
    ///
    /// Without a profile there is nothing to compile and the map is empty.
    pub fn compute_raw_weights(
        &self,
        profile: Option<&UserProfile>,
        passengers: &PassengerInfo,
        is_fog_zone: bool,
        annual_km: f64,
    ) -> WeightVector {
        let Some(profile) = profile else {
            warn!("no profile available, raw weights are empty");
            return WeightVector::new();
        };

        let dynamic_base = self.dynamic_base(profile.driving_style);
        let inputs = WeightInputs {
            profile,
            passengers,
            is_fog_zone,
            annual_km,
            very_high_annual_km: self.config.very_high_annual_km,
        };
        let multipliers = self.rules.multipliers(&inputs);

        // `with_parts` skips validation; never hand `clamp` an inverted range.
        let ceiling = if self.config.max_raw_weight >= 0.0 {
            self.config.max_raw_weight
        } else {
            0.0
        };
        let mut clamped = 0usize;
        let raw: WeightVector = dynamic_base
            .iter()
            .map(|(dimension, base)| {
                let multiplier = multipliers.get(dimension).copied().unwrap_or(1.0);
                let value = base * multiplier;
                let bounded = if value.is_nan() {
                    0.0
                } else {
                    value.clamp(0.0, ceiling)
                };
                if bounded != value {
                    clamped += 1;
                }
                (*dimension, bounded)
            })
            .collect();

        debug!(
            dimensions = raw.len(),
            clamped,
            annual_km,
            is_fog_zone,
            source = self.base.source(),
            "raw weights compiled"
        );
        raw
    }
}

/// Compile with the bundled base table and default configuration.
pub fn compute_raw_weights(
    profile: Option<&UserProfile>,
    passengers: &PassengerInfo,
    is_fog_zone: bool,
    annual_km: f64,
) -> CarmatchResult<WeightVector> {
    let compiler = WeightCompiler::with_parts(
        WeightsConfig::default(),
        Arc::new(BaseWeights::bundled()?),
        WeightRuleTable::standard(),
    );
    Ok(compiler.compute_raw_weights(profile, passengers, is_fog_zone, annual_km))
}
