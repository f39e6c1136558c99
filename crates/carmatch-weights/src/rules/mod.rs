//! Declarative multiplier rules.
//!
//! A rule is `when predicate holds, multiply each listed dimension by its
//! factor`. Rules read only the inputs, never each other's multipliers, so
//! two rules touching the same dimension compound by multiplication and the
//! table order is irrelevant.

mod preferences;
mod ratings;
mod space;
mod usage;

use std::collections::HashSet;

use carmatch_core::dimension::{Dimension, WeightVector};
use carmatch_core::errors::RuleError;
use carmatch_core::models::PassengerInfo;
use carmatch_core::profile::{RatingKind, UserProfile};
use tracing::trace;

/// Everything a weight rule may read.
#[derive(Debug, Clone, Copy)]
pub struct WeightInputs<'a> {
    pub profile: &'a UserProfile,
    pub passengers: &'a PassengerInfo,
    pub is_fog_zone: bool,
    pub annual_km: f64,
    pub very_high_annual_km: f64,
}

impl WeightInputs<'_> {
    pub fn very_high_mileage(&self) -> bool {
        self.annual_km.is_finite() && self.annual_km > self.very_high_annual_km
    }

    /// Garage exists but leaves no room to spare.
    pub fn tight_garage(&self) -> bool {
        self.profile.has_garage.is_yes() && self.profile.garage_has_spare_room.is_no()
    }
}

pub type WeightPredicate = fn(&WeightInputs<'_>) -> bool;

/// How much a rule scales one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    Fixed(f64),
    /// `0.5 + rating / 10`: a 0 rating halves the dimension, a 10 raises it
    /// by half. Identity when the rating is missing.
    FromRating(RatingKind),
}

impl Factor {
    pub fn resolve(self, inputs: &WeightInputs<'_>) -> f64 {
        match self {
            Factor::Fixed(f) => f,
            Factor::FromRating(kind) => inputs
                .profile
                .rating(kind)
                .map_or(1.0, |r| 0.5 + r.as_fraction()),
        }
    }
}

#[derive(Clone)]
pub struct WeightRule {
    pub id: &'static str,
    pub when: WeightPredicate,
    pub effects: Vec<(Dimension, Factor)>,
}

impl WeightRule {
    pub fn new(id: &'static str, when: WeightPredicate, effects: Vec<(Dimension, Factor)>) -> Self {
        Self { id, when, effects }
    }

    /// Shorthand for rules whose factors are all fixed.
    pub fn fixed(id: &'static str, when: WeightPredicate, effects: &[(Dimension, f64)]) -> Self {
        Self::new(
            id,
            when,
            effects.iter().map(|(d, f)| (*d, Factor::Fixed(*f))).collect(),
        )
    }
}

impl std::fmt::Debug for WeightRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightRule")
            .field("id", &self.id)
            .field("effects", &self.effects)
            .finish()
    }
}

/// A validated multiplier rule set.
#[derive(Debug, Clone)]
pub struct WeightRuleTable {
    rules: Vec<WeightRule>,
}

impl WeightRuleTable {
    /// Rejects duplicate ids, rules without effects, and fixed factors that
    /// are non-finite or not strictly positive.
    pub fn new(rules: Vec<WeightRule>) -> Result<Self, RuleError> {
        let mut ids = HashSet::new();
        for rule in &rules {
            if !ids.insert(rule.id) {
                return Err(RuleError::DuplicateRule {
                    id: rule.id.to_string(),
                });
            }
            if rule.effects.is_empty() {
                return Err(RuleError::EmptyRule {
                    id: rule.id.to_string(),
                });
            }
            for (dimension, factor) in &rule.effects {
                if let Factor::Fixed(f) = factor {
                    if !f.is_finite() || *f <= 0.0 {
                        return Err(RuleError::InvalidFactor {
                            id: rule.id.to_string(),
                            dimension: dimension.to_string(),
                            factor: *f,
                        });
                    }
                }
            }
        }
        Ok(Self { rules })
    }

    /// The built-in rules.
    pub fn standard() -> Self {
        Self {
            rules: standard_rules(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[WeightRule] {
        &self.rules
    }

    /// Multiplier per dimension, identity where no rule fires.
    pub fn multipliers(&self, inputs: &WeightInputs<'_>) -> WeightVector {
        let mut multipliers: WeightVector = Dimension::ALL.iter().map(|d| (*d, 1.0)).collect();
        for rule in self.rules.iter().filter(|r| (r.when)(inputs)) {
            trace!(rule = rule.id, "weight rule fired");
            for (dimension, factor) in &rule.effects {
                if let Some(m) = multipliers.get_mut(dimension) {
                    *m *= factor.resolve(inputs);
                }
            }
        }
        multipliers
    }
}

/// Every built-in multiplier rule.
pub fn standard_rules() -> Vec<WeightRule> {
    let mut rules = ratings::rules();
    rules.extend(preferences::rules());
    rules.extend(usage::rules());
    rules.extend(space::rules());
    rules
}
