//! Stated tastes: aesthetics, motor enthusiasm, exclusive design, resale value.

use carmatch_core::dimension::Dimension;

use super::WeightRule;

pub(super) fn rules() -> Vec<WeightRule> {
    vec![
        WeightRule::fixed(
            "values_aesthetics",
            |i| i.profile.values_aesthetics.is_yes(),
            &[(Dimension::Aesthetics, 4.0)],
        ),
        WeightRule::fixed(
            "motor_enthusiast",
            |i| i.profile.motor_enthusiast.is_yes(),
            &[
                (Dimension::Sportiness, 1.5),
                (Dimension::PowerToWeight, 1.5),
                (Dimension::Premium, 2.0),
            ],
        ),
        WeightRule::fixed(
            "exclusive_design",
            |i| i.profile.prefers_exclusive_design.is_yes(),
            &[(Dimension::Singularity, 3.0), (Dimension::Aesthetics, 1.5)],
        ),
        WeightRule::fixed(
            "depreciation_priority",
            |i| i.profile.prioritizes_depreciation.is_yes(),
            &[(Dimension::Depreciation, 3.0)],
        ),
    ]
}
