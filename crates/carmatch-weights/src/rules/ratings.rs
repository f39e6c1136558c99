//! Each 0–10 rating scales the dimensions it speaks for.

use carmatch_core::dimension::Dimension;
use carmatch_core::profile::RatingKind;

use super::{Factor, WeightRule};

pub(super) fn rules() -> Vec<WeightRule> {
    vec![
        WeightRule::new(
            "rating_reliability",
            |i| i.profile.reliability_rating.is_some(),
            vec![
                (Dimension::ReliabilityDurability, Factor::FromRating(RatingKind::Reliability)),
                (Dimension::Warranty, Factor::FromRating(RatingKind::Reliability)),
            ],
        ),
        WeightRule::new(
            "rating_safety",
            |i| i.profile.safety_rating.is_some(),
            vec![
                (Dimension::Safety, Factor::FromRating(RatingKind::Safety)),
                (Dimension::DriverAssistance, Factor::FromRating(RatingKind::Safety)),
            ],
        ),
        WeightRule::new(
            "rating_comfort",
            |i| i.profile.comfort_rating.is_some(),
            vec![
                (Dimension::Comfort, Factor::FromRating(RatingKind::Comfort)),
                (Dimension::AcousticComfort, Factor::FromRating(RatingKind::Comfort)),
            ],
        ),
        WeightRule::new(
            "rating_environmental",
            |i| i.profile.environmental_rating.is_some(),
            vec![(
                Dimension::EnvironmentalImpact,
                Factor::FromRating(RatingKind::EnvironmentalImpact),
            )],
        ),
        WeightRule::new(
            "rating_usage_cost",
            |i| i.profile.usage_cost_rating.is_some(),
            vec![
                (Dimension::UsageCost, Factor::FromRating(RatingKind::UsageCost)),
                (Dimension::FuelConsumption, Factor::FromRating(RatingKind::UsageCost)),
                (Dimension::MaintenanceCost, Factor::FromRating(RatingKind::UsageCost)),
                (Dimension::InsuranceCost, Factor::FromRating(RatingKind::UsageCost)),
            ],
        ),
        WeightRule::new(
            "rating_technology",
            |i| i.profile.technology_rating.is_some(),
            vec![
                (Dimension::Technology, Factor::FromRating(RatingKind::Technology)),
                (Dimension::Infotainment, Factor::FromRating(RatingKind::Technology)),
            ],
        ),
    ]
}
