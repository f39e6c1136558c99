//! # carmatch-weights
//!
//! Turns a profile into a per-dimension weight vector: base table, dampening,
//! archetype boost, declarative multiplier rules, clamping, and finally
//! normalization into a convex combination.

pub mod base;
pub mod cache;
pub mod compiler;
pub mod mileage;
pub mod normalize;
pub mod rules;

pub use base::BaseWeights;
pub use cache::BaseWeightCache;
pub use compiler::{compute_raw_weights, WeightCompiler};
pub use mileage::estimate_annual_km;
pub use normalize::normalize;
pub use rules::{Factor, WeightInputs, WeightRule, WeightRuleTable};
