//! End-to-end ranking for one profile.
//!
//! flags → raw weights → normalized weights; filters → seats → economics;
//! then the query goes to the catalog store.

use std::sync::Arc;

use carmatch_core::config::{CarmatchConfig, EconomicsConfig};
use carmatch_core::dimension::WeightVector;
use carmatch_core::errors::CarmatchResult;
use carmatch_core::flags::FlagSet;
use carmatch_core::models::ranking_query::{RankedItem, RankingQuery};
use carmatch_core::models::{ClimateInfo, EconomicsInfo, InferredFilters, PassengerInfo};
use carmatch_core::profile::UserProfile;
use carmatch_core::traits::ICatalogStore;
use carmatch_filters::{apply_economics, apply_passenger_seats, restrict_to_electric, FilterCompiler};
use carmatch_flags::FlagDeriver;
use carmatch_weights::{estimate_annual_km, normalize, BaseWeightCache, WeightCompiler};
use tracing::{error, info};

use crate::query::QueryBuilder;

/// Everything the conversation has gathered so far. Any section may still be
/// missing; the engine degrades instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct RankingInputs<'a> {
    pub profile: Option<&'a UserProfile>,
    pub passengers: Option<&'a PassengerInfo>,
    pub climate: &'a ClimateInfo,
    pub economics: Option<&'a EconomicsInfo>,
    /// Filters set earlier, for instance by extraction. Only gaps are filled.
    pub filters: Option<&'a InferredFilters>,
    /// Zero means the configured default.
    pub limit: usize,
}

/// Intermediate artifacts of one pass, kept for explanations.
#[derive(Debug, Clone)]
pub struct RankingOutcome {
    pub flags: FlagSet,
    pub raw_weights: WeightVector,
    pub weights: WeightVector,
    pub filters: InferredFilters,
    pub query: RankingQuery,
    pub items: Vec<RankedItem>,
}

/// Runs the full compilation pipeline against one catalog store.
pub struct RankingEngine {
    flags: FlagDeriver,
    weights: WeightCompiler,
    filters: FilterCompiler,
    economics: EconomicsConfig,
    queries: QueryBuilder,
    store: Arc<dyn ICatalogStore>,
}

impl RankingEngine {
    /// Fails only when the base weight table cannot be loaded.
    pub fn new(
        config: &CarmatchConfig,
        cache: &BaseWeightCache,
        store: Arc<dyn ICatalogStore>,
    ) -> CarmatchResult<Self> {
        Ok(Self {
            flags: FlagDeriver::new(config.flags.clone()),
            weights: WeightCompiler::new(config.weights.clone(), cache)?,
            filters: FilterCompiler::new(config.filters.clone()),
            economics: config.economics.clone(),
            queries: QueryBuilder::new(&config.adjustments, &config.ranking),
            store,
        })
    }

    /// Compile filters without touching the store.
    pub fn compile_filters(&self, inputs: &RankingInputs<'_>) -> InferredFilters {
        let mut filters = self
            .filters
            .compile(inputs.filters, inputs.profile, inputs.climate);
        restrict_to_electric(&mut filters, inputs.profile);
        apply_passenger_seats(&mut filters, inputs.passengers);
        if let Some(economics) = inputs.economics {
            apply_economics(&mut filters, economics, &self.economics);
        }
        filters
    }

    pub fn rank(&self, inputs: &RankingInputs<'_>) -> CarmatchResult<RankingOutcome> {
        let no_passengers = PassengerInfo::default();
        let passengers = inputs.passengers.unwrap_or(&no_passengers);

        if inputs.profile.is_none() {
            error!("ranking without a profile, weights and flags fall back to defaults");
        }

        let flags = self.flags.derive(inputs.profile, inputs.climate, passengers);
        let annual_km = inputs.profile.map_or(0.0, estimate_annual_km);
        let raw_weights = self.weights.compute_raw_weights(
            inputs.profile,
            passengers,
            inputs.climate.fog_zone,
            annual_km,
        );
        let weights = normalize(&raw_weights);
        let filters = self.compile_filters(inputs);
        let query = self.queries.build(&weights, &filters, &flags, inputs.limit);
        let items = self.store.rank(&query)?;

        info!(
            store = self.store.name(),
            returned = items.len(),
            active_flags = flags.active().len(),
            top = items.first().map(|r| r.item.id.as_str()).unwrap_or("-"),
            "ranking completed"
        );
        Ok(RankingOutcome {
            flags,
            raw_weights,
            weights,
            filters,
            query,
            items,
        })
    }
}
