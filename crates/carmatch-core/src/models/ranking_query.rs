//! The contract between the core and the catalog store: a filter predicate,
//! a linear scoring expression, and a result limit.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::catalog::{BodyType, CatalogItem, EcoLabel, MechanicalType};
use crate::dimension::Dimension;
use crate::flags::Flag;

/// Budget ceiling, expressed the way the recommended acquisition mode pays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "limit", rename_all = "snake_case")]
pub enum BudgetCeiling {
    CashPrice(f64),
    MonthlyInstallment(f64),
}

/// Hard constraints. Empty allowlists and `None` bounds do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub mechanical_types: Vec<MechanicalType>,
    pub body_types: Vec<BodyType>,
    pub budget: Option<BudgetCeiling>,
    pub min_seats: Option<u32>,
    pub min_aesthetics: Option<f64>,
    pub min_premium: Option<f64>,
    pub min_singularity: Option<f64>,
}

impl FilterPredicate {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if !self.mechanical_types.is_empty() && !self.mechanical_types.contains(&item.mechanical_type)
        {
            return false;
        }
        if !self.body_types.is_empty() && !self.body_types.contains(&item.body_type) {
            return false;
        }
        match self.budget {
            Some(BudgetCeiling::CashPrice(max)) if item.price > max => return false,
            // Items without installment data cannot prove they fit.
            Some(BudgetCeiling::MonthlyInstallment(max))
                if item.monthly_installment.map_or(true, |m| m > max) =>
            {
                return false
            }
            _ => {}
        }
        if self.min_seats.is_some_and(|min| item.seats < min) {
            return false;
        }
        if self.min_aesthetics.is_some_and(|min| item.aesthetics_score < min) {
            return false;
        }
        if self.min_premium.is_some_and(|min| item.premium_score < min) {
            return false;
        }
        if self.min_singularity.is_some_and(|min| item.singularity_score < min) {
            return false;
        }
        true
    }
}

/// Catalog trait an adjustment term is gated on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ItemCondition {
    MechanicalIn(Vec<MechanicalType>),
    BodyIn(Vec<BodyType>),
    EcoLabelIn(Vec<EcoLabel>),
    AllWheelDrive,
    LowRangeGearing,
    LowCostTrim,
    SportyTrim,
    Automatic,
    Manual,
    ModelYearBefore(u16),
}

impl ItemCondition {
    pub fn holds(&self, item: &CatalogItem) -> bool {
        match self {
            ItemCondition::MechanicalIn(types) => types.contains(&item.mechanical_type),
            ItemCondition::BodyIn(types) => types.contains(&item.body_type),
            ItemCondition::EcoLabelIn(labels) => labels.contains(&item.eco_label),
            ItemCondition::AllWheelDrive => item.all_wheel_drive,
            ItemCondition::LowRangeGearing => item.low_range_gearing,
            ItemCondition::LowCostTrim => item.low_cost_trim,
            ItemCondition::SportyTrim => item.sporty_trim,
            ItemCondition::Automatic => item.automatic,
            ItemCondition::Manual => !item.automatic,
            ItemCondition::ModelYearBefore(year) => item.model_year < *year,
        }
    }
}

/// Fixed-magnitude additive term: `+magnitude` when the condition holds.
/// Penalties carry a negative magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub flag: Flag,
    pub condition: ItemCondition,
    pub magnitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    pub dimension: Dimension,
    pub weight: f64,
}

/// `score = Σ feature[d] × weight[d] + Σ adjustments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringExpression {
    pub terms: Vec<WeightedTerm>,
    pub adjustments: Vec<Adjustment>,
}

/// Per-item score with its attribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub weighted: f64,
    pub adjustments: f64,
    pub total: f64,
    /// Non-zero term contributions, largest first.
    pub contributions: Vec<(Dimension, f64)>,
    /// Flags whose adjustment applied to this item.
    pub applied: Vec<Flag>,
}

impl ScoringExpression {
    pub fn evaluate(&self, item: &CatalogItem) -> ScoreBreakdown {
        let mut contributions: Vec<(Dimension, f64)> = self
            .terms
            .iter()
            .map(|t| (t.dimension, item.feature(t.dimension) * t.weight))
            .filter(|(_, c)| *c != 0.0)
            .collect();
        let weighted: f64 = contributions.iter().map(|(_, c)| c).sum();

        let mut applied = Vec::new();
        let mut adjustments = 0.0;
        for adj in &self.adjustments {
            if adj.condition.holds(item) {
                adjustments += adj.magnitude;
                applied.push(adj.flag);
            }
        }

        contributions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        ScoreBreakdown {
            weighted,
            adjustments,
            total: weighted + adjustments,
            contributions,
            applied,
        }
    }
}

/// Everything the catalog store needs to return ranked rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingQuery {
    pub predicate: FilterPredicate,
    pub expression: ScoringExpression,
    pub limit: usize,
}

/// A catalog row with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub item: CatalogItem,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Score descending, then item id ascending for reproducible ties.
pub fn rank_order(a: &RankedItem, b: &RankedItem) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.item.id.cmp(&b.item.id))
}
