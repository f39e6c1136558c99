pub mod catalog;
pub mod climate;
pub mod economics;
pub mod filters;
pub mod passengers;
pub mod ranking_query;

pub use catalog::{BodyType, CatalogItem, EcoLabel, MechanicalType};
pub use climate::ClimateInfo;
pub use economics::{AcquisitionMode, EconomicsInfo};
pub use filters::InferredFilters;
pub use passengers::{CompanionFrequency, PassengerInfo};
pub use ranking_query::{
    rank_order, Adjustment, BudgetCeiling, FilterPredicate, ItemCondition, RankedItem,
    RankingQuery, ScoreBreakdown, ScoringExpression, WeightedTerm,
};
