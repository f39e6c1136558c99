//! Threshold rules on the 0–10 ratings, with the eco-label pair refined by
//! low-emission-zone membership.

use carmatch_core::flags::{Flag, Stance};

use crate::table::{FlagCase, FlagDefinition};

pub(super) fn definitions() -> Vec<FlagDefinition> {
    vec![
        FlagDefinition::boolean(Flag::PenalizeLowCostByComfort, |i| i.comfort_high()),
        FlagDefinition::boolean(Flag::PenalizeSportyByComfort, |i| i.comfort_high()),
        FlagDefinition::boolean(Flag::PenalizeOldByTechnology, |i| i.technology_high()),
        FlagDefinition::boolean(Flag::PenalizeHighConsumption, |i| i.usage_cost_high()),
        FlagDefinition::graded(
            Flag::EcoLabel,
            vec![
                FlagCase::stance(
                    |i| i.environmental_high() && i.climate.low_emission_zone,
                    Stance::StrongFavor,
                ),
                FlagCase::stance(|i| i.environmental_high(), Stance::Favor),
                FlagCase::stance(|i| i.climate.low_emission_zone, Stance::Favor),
            ],
        ),
        FlagDefinition::graded(
            Flag::NoLabel,
            vec![
                FlagCase::stance(
                    |i| i.environmental_high() && i.climate.low_emission_zone,
                    Stance::StrongPenalize,
                ),
                FlagCase::stance(
                    |i| i.environmental_high() || i.climate.low_emission_zone,
                    Stance::Penalize,
                ),
            ],
        ),
    ]
}
