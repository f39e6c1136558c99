//! Profile-driven filter backfill.

use carmatch_core::config::FiltersConfig;
use carmatch_core::models::{ClimateInfo, InferredFilters, MechanicalType};
use carmatch_core::profile::{TriState, UserProfile};
use tracing::{debug, warn};

/// Backfills minimum scores and the mechanical allowlist.
#[derive(Debug, Clone, Default)]
pub struct FilterCompiler {
    config: FiltersConfig,
}

impl FilterCompiler {
    pub fn new(config: FiltersConfig) -> Self {
        Self { config }
    }

    /// Fill every unset field a rule covers.
    ///
    /// Without a profile the existing filters come back unchanged.
    pub fn compile(
        &self,
        existing: Option<&InferredFilters>,
        profile: Option<&UserProfile>,
        climate: &ClimateInfo,
    ) -> InferredFilters {
        let mut filters = existing.cloned().unwrap_or_default();
        let Some(profile) = profile else {
            warn!("no profile available, filters left unchanged");
            return filters;
        };

        if filters.min_aesthetics.is_none() {
            filters.min_aesthetics = two_tier(
                profile.values_aesthetics,
                self.config.aesthetics_min_valued,
                self.config.aesthetics_min_not_valued,
            );
        }

        if filters.min_premium.is_none() {
            filters.min_premium = two_tier(
                profile.motor_enthusiast,
                self.config.premium_min_enthusiast,
                self.config.premium_min_not_enthusiast,
            );
        }

        if filters.min_singularity.is_none() {
            let enthusiast = two_tier(
                profile.motor_enthusiast,
                self.config.singularity_enthusiast,
                self.config.singularity_not_enthusiast,
            );
            let exclusive = two_tier(
                profile.prefers_exclusive_design,
                self.config.singularity_exclusive,
                self.config.singularity_not_exclusive,
            );
            filters.min_singularity = enthusiast.zip(exclusive).map(|(a, b)| a + b);
        }

        // Electric-only users are handled by `restrict_to_electric`.
        if filters.mechanical_types.is_empty() && profile.electric_only.is_no() {
            filters.mechanical_types = MechanicalType::NON_ELECTRIC.to_vec();
        }

        debug!(
            min_aesthetics = ?filters.min_aesthetics,
            min_premium = ?filters.min_premium,
            min_singularity = ?filters.min_singularity,
            mechanical_types = filters.mechanical_types.len(),
            low_emission_zone = climate.low_emission_zone,
            "filters compiled"
        );
        filters
    }
}

fn two_tier(answer: TriState, yes: f64, no: f64) -> Option<f64> {
    match answer {
        TriState::Yes => Some(yes),
        TriState::No => Some(no),
        TriState::Unknown => None,
    }
}

/// Backfill with the default tiers.
pub fn compile_filters(
    existing: Option<&InferredFilters>,
    profile: Option<&UserProfile>,
    climate: &ClimateInfo,
) -> InferredFilters {
    FilterCompiler::default().compile(existing, profile, climate)
}

/// Limit an unset mechanical allowlist to BEV and REEV for electric-only
/// users. Never touches a list that is already set.
pub fn restrict_to_electric(filters: &mut InferredFilters, profile: Option<&UserProfile>) {
    let electric_only = profile.is_some_and(|p| p.electric_only.is_yes());
    if electric_only && filters.mechanical_types.is_empty() {
        filters.mechanical_types = MechanicalType::ELECTRIC.to_vec();
        debug!("mechanical types restricted to electric");
    }
}
