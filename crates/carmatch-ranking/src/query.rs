//! Ranking query construction.
//!
//! `score = Σ feature[d] × weight[d] + Σ adjustments`, where every adjustment
//! is a fixed magnitude gated by one flag value and one catalog trait.

use carmatch_core::config::{AdjustmentsConfig, RankingConfig};
use carmatch_core::dimension::WeightVector;
use carmatch_core::flags::{Flag, FlagSet, FlagValue, Stance};
use carmatch_core::models::ranking_query::{
    Adjustment, BudgetCeiling, FilterPredicate, ItemCondition, RankingQuery, ScoringExpression,
    WeightedTerm,
};
use carmatch_core::models::{AcquisitionMode, BodyType, EcoLabel, InferredFilters, MechanicalType};
use tracing::debug;

/// One flag's link to the catalog: which trait it scores and by how much for
/// each value the flag can hold.
#[derive(Debug, Clone)]
struct AdjustmentBinding {
    flag: Flag,
    condition: ItemCondition,
    magnitudes: Vec<(FlagValue, f64)>,
}

impl AdjustmentBinding {
    fn when_set(flag: Flag, condition: ItemCondition, magnitude: f64) -> Self {
        Self {
            flag,
            condition,
            magnitudes: vec![(FlagValue::Bool(true), magnitude)],
        }
    }

    fn graded(flag: Flag, condition: ItemCondition, magnitudes: &[(Stance, f64)]) -> Self {
        Self {
            flag,
            condition,
            magnitudes: magnitudes
                .iter()
                .map(|(stance, m)| (FlagValue::Stance(*stance), *m))
                .collect(),
        }
    }

    fn resolve(&self, flags: &FlagSet) -> Option<Adjustment> {
        let value = flags.get(self.flag);
        let magnitude = self
            .magnitudes
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, m)| *m)?;
        if magnitude == 0.0 || !magnitude.is_finite() {
            return None;
        }
        Some(Adjustment {
            flag: self.flag,
            condition: self.condition.clone(),
            magnitude,
        })
    }
}

fn mechanical(types: &[MechanicalType]) -> ItemCondition {
    ItemCondition::MechanicalIn(types.to_vec())
}

fn body(types: &[BodyType]) -> ItemCondition {
    ItemCondition::BodyIn(types.to_vec())
}

fn bindings(a: &AdjustmentsConfig, ranking: &RankingConfig) -> Vec<AdjustmentBinding> {
    use AdjustmentBinding as B;
    use MechanicalType as M;

    vec![
        // Ratings.
        B::when_set(
            Flag::PenalizeLowCostByComfort,
            ItemCondition::LowCostTrim,
            -a.low_cost_comfort_penalty,
        ),
        B::when_set(
            Flag::PenalizeSportyByComfort,
            ItemCondition::SportyTrim,
            -a.sporty_comfort_penalty,
        ),
        B::when_set(
            Flag::PenalizeOldByTechnology,
            ItemCondition::ModelYearBefore(ranking.technology_cutoff_year),
            -a.old_vehicle_penalty,
        ),
        B::when_set(
            Flag::PenalizeHighConsumption,
            mechanical(&[M::Gasoline, M::Diesel]),
            -a.high_consumption_penalty,
        ),
        B::graded(
            Flag::EcoLabel,
            ItemCondition::EcoLabelIn(vec![EcoLabel::Zero, EcoLabel::Eco]),
            &[
                (Stance::Favor, a.eco_label_bonus),
                (Stance::StrongFavor, a.eco_label_zone_bonus),
            ],
        ),
        B::graded(
            Flag::NoLabel,
            ItemCondition::EcoLabelIn(vec![EcoLabel::NoLabel]),
            &[
                (Stance::Penalize, -a.no_label_penalty),
                (Stance::StrongPenalize, -a.no_label_zone_penalty),
            ],
        ),
        // Adventure.
        B::graded(
            Flag::AllWheelDrive,
            ItemCondition::AllWheelDrive,
            &[
                (Stance::Favor, a.awd_climate_bonus),
                (Stance::FavorOccasional, a.awd_occasional_bonus),
                (Stance::FavorExtreme, a.awd_extreme_bonus),
                (Stance::Penalize, -a.awd_penalty),
            ],
        ),
        B::graded(
            Flag::LowRangeGearing,
            ItemCondition::LowRangeGearing,
            &[
                (Stance::FavorOccasional, a.low_range_occasional_bonus),
                (Stance::FavorExtreme, a.low_range_extreme_bonus),
            ],
        ),
        // Usage intensity.
        B::graded(
            Flag::BatteryElectric,
            mechanical(&[M::BatteryElectric]),
            &[(Stance::Favor, a.bev_bonus), (Stance::Penalize, -a.bev_penalty)],
        ),
        B::graded(
            Flag::RangeExtender,
            mechanical(&[M::RangeExtended]),
            &[(Stance::Favor, a.reev_bonus), (Stance::Penalize, -a.reev_penalty)],
        ),
        B::graded(
            Flag::PluginHybrid,
            mechanical(&M::PLUGIN_HYBRIDS),
            &[(Stance::Favor, a.phev_bonus), (Stance::Penalize, -a.phev_penalty)],
        ),
        B::when_set(
            Flag::PenalizeDieselUrban,
            mechanical(&[M::Diesel, M::MildHybridDiesel]),
            -a.diesel_urban_penalty,
        ),
        B::when_set(
            Flag::FavorDieselLongDistance,
            mechanical(&M::DIESEL_FAMILY),
            a.diesel_long_distance_bonus,
        ),
        B::when_set(
            Flag::FavorHybridUrban,
            mechanical(&M::FULL_HYBRIDS),
            a.hybrid_urban_bonus,
        ),
        // Body types.
        B::when_set(
            Flag::FavorSuvMountain,
            body(&[BodyType::Suv, BodyType::OffRoad]),
            a.suv_mountain_bonus,
        ),
        B::when_set(
            Flag::FavorCommercial,
            body(&[BodyType::Commercial]),
            a.commercial_bonus,
        ),
        B::when_set(
            Flag::FavorSedanMinivan,
            body(&[BodyType::Sedan, BodyType::Minivan]),
            a.sedan_minivan_bonus,
        ),
        B::when_set(
            Flag::FavorSuvAdventure,
            body(&[BodyType::Suv]),
            a.suv_adventure_bonus,
        ),
        B::when_set(
            Flag::FavorPickupOffroad,
            body(&[BodyType::Pickup, BodyType::OffRoad]),
            a.pickup_offroad_bonus,
        ),
        B::when_set(
            Flag::PenalizePickupOffroad,
            body(&[BodyType::Pickup, BodyType::OffRoad]),
            -a.pickup_offroad_penalty,
        ),
        B::when_set(
            Flag::FavorLifestyle,
            body(&[BodyType::Coupe, BodyType::Convertible]),
            a.lifestyle_bonus,
        ),
        B::when_set(
            Flag::FavorCompactUrban,
            body(&[BodyType::Hatchback]),
            a.compact_urban_bonus,
        ),
        B::when_set(
            Flag::PenalizeTwoDoorWithChildren,
            body(&[BodyType::Coupe, BodyType::Convertible]),
            -a.two_door_children_penalty,
        ),
        B::when_set(
            Flag::PenalizeLowBodiesTall,
            body(&[BodyType::Coupe, BodyType::Convertible]),
            -a.low_body_tall_penalty,
        ),
        B::when_set(
            Flag::FavorWagonForCargo,
            body(&[BodyType::StationWagon]),
            a.wagon_cargo_bonus,
        ),
        // Driving and infrastructure.
        B::when_set(Flag::PenalizeManual, ItemCondition::Manual, -a.manual_penalty),
        B::when_set(
            Flag::PenalizeAutomatic,
            ItemCondition::Automatic,
            -a.automatic_penalty,
        ),
        B::when_set(
            Flag::PenalizeSportyByCalmStyle,
            ItemCondition::SportyTrim,
            -a.calm_sporty_penalty,
        ),
        B::when_set(Flag::FavorLpg, mechanical(&[M::Lpg]), a.lpg_bonus),
        B::when_set(Flag::FavorCng, mechanical(&[M::Cng]), a.cng_bonus),
        B::when_set(
            Flag::PenalizeLpgUnavailable,
            mechanical(&[M::Lpg]),
            -a.lpg_unavailable_penalty,
        ),
        B::when_set(
            Flag::PenalizeCngUnavailable,
            mechanical(&[M::Cng]),
            -a.cng_unavailable_penalty,
        ),
        B::when_set(
            Flag::PenalizeBevWithoutHomeCharging,
            mechanical(&[M::BatteryElectric]),
            -a.bev_no_home_charging_penalty,
        ),
    ]
}

/// Builds ranking queries with a fixed set of adjustment magnitudes.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    bindings: Vec<AdjustmentBinding>,
    default_limit: usize,
}

impl QueryBuilder {
    pub fn new(adjustments: &AdjustmentsConfig, ranking: &RankingConfig) -> Self {
        Self {
            bindings: bindings(adjustments, ranking),
            default_limit: ranking.default_limit,
        }
    }

    /// Assemble the query. A `limit` of zero falls back to the configured
    /// default.
    pub fn build(
        &self,
        weights: &WeightVector,
        filters: &InferredFilters,
        flags: &FlagSet,
        limit: usize,
    ) -> RankingQuery {
        let predicate = filter_predicate(filters);
        let expression = self.expression(weights, flags);
        let limit = if limit == 0 { self.default_limit } else { limit };

        debug!(
            terms = expression.terms.len(),
            adjustments = expression.adjustments.len(),
            budget = ?predicate.budget,
            limit,
            "ranking query built"
        );
        RankingQuery {
            predicate,
            expression,
            limit,
        }
    }

    /// Weighted terms for every positive finite weight, plus the adjustments
    /// the current flag values activate.
    pub fn expression(&self, weights: &WeightVector, flags: &FlagSet) -> ScoringExpression {
        let terms = weights
            .iter()
            .filter(|(_, w)| w.is_finite() && **w > 0.0)
            .map(|(dimension, weight)| WeightedTerm {
                dimension: *dimension,
                weight: *weight,
            })
            .collect();
        let adjustments = self
            .bindings
            .iter()
            .filter_map(|binding| binding.resolve(flags))
            .collect();
        ScoringExpression { terms, adjustments }
    }
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(&AdjustmentsConfig::default(), &RankingConfig::default())
    }
}

/// Hard constraints carried over from the compiled filters.
pub fn filter_predicate(filters: &InferredFilters) -> FilterPredicate {
    FilterPredicate {
        mechanical_types: filters.mechanical_types.clone(),
        body_types: filters.body_types.clone(),
        budget: budget_ceiling(filters),
        min_seats: filters.min_seats,
        min_aesthetics: filters.min_aesthetics,
        min_premium: filters.min_premium,
        min_singularity: filters.min_singularity,
    }
}

/// The ceiling matching the recommended acquisition mode, else whichever
/// ceiling is set, cash price first.
fn budget_ceiling(filters: &InferredFilters) -> Option<BudgetCeiling> {
    let cash = filters.max_cash_price.map(BudgetCeiling::CashPrice);
    let installment = filters
        .max_monthly_installment
        .map(BudgetCeiling::MonthlyInstallment);
    match filters.recommended_acquisition {
        Some(AcquisitionMode::Financed) => installment.or(cash),
        Some(AcquisitionMode::Cash) => cash.or(installment),
        _ => cash.or(installment),
    }
}

/// Build with the default adjustment magnitudes.
pub fn build_ranking_query(
    weights: &WeightVector,
    filters: &InferredFilters,
    flags: &FlagSet,
    limit: usize,
) -> RankingQuery {
    QueryBuilder::default().build(weights, filters, flags, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carmatch_core::dimension::Dimension;

    #[test]
    fn every_flag_has_a_binding() {
        let builder = QueryBuilder::default();
        for flag in Flag::ALL {
            assert!(
                builder.bindings.iter().any(|b| b.flag == flag),
                "{flag} has no adjustment binding"
            );
        }
    }

    #[test]
    fn default_flags_produce_no_adjustments() {
        let expr = QueryBuilder::default().expression(&WeightVector::new(), &FlagSet::defaults());
        assert!(expr.adjustments.is_empty());
        assert!(expr.terms.is_empty());
    }

    #[test]
    fn skips_zero_and_non_finite_weights() {
        let mut weights = WeightVector::new();
        weights.insert(Dimension::Safety, 0.4);
        weights.insert(Dimension::Comfort, 0.0);
        weights.insert(Dimension::Technology, f64::NAN);
        let expr = QueryBuilder::default().expression(&weights, &FlagSet::defaults());
        assert_eq!(expr.terms.len(), 1);
        assert_eq!(expr.terms[0].dimension, Dimension::Safety);
    }

    #[test]
    fn financed_recommendation_uses_installment_ceiling() {
        let filters = InferredFilters {
            recommended_acquisition: Some(AcquisitionMode::Financed),
            max_cash_price: Some(20_000.0),
            max_monthly_installment: Some(500.0),
            ..Default::default()
        };
        assert_eq!(
            budget_ceiling(&filters),
            Some(BudgetCeiling::MonthlyInstallment(500.0))
        );
    }

    #[test]
    fn zero_limit_uses_default() {
        let query = build_ranking_query(
            &WeightVector::new(),
            &InferredFilters::default(),
            &FlagSet::defaults(),
            0,
        );
        assert_eq!(query.limit, RankingConfig::default().default_limit);
    }
}
