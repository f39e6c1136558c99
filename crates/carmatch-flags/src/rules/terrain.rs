//! Adventure level and climate: all-wheel drive and low-range gearing.

use carmatch_core::flags::{Flag, Stance};
use carmatch_core::profile::AdventureLevel;

use crate::table::{FlagCase, FlagDefinition};

pub(super) fn definitions() -> Vec<FlagDefinition> {
    vec![
        // Adventure level wins over climate; adverse climate alone still
        // favors AWD, and a declared no-adventure profile elsewhere penalizes it.
        FlagDefinition::graded(
            Flag::AllWheelDrive,
            vec![
                FlagCase::stance(
                    |i| i.adventure_is(AdventureLevel::Extreme),
                    Stance::FavorExtreme,
                ),
                FlagCase::stance(
                    |i| i.adventure_is(AdventureLevel::Occasional),
                    Stance::FavorOccasional,
                ),
                FlagCase::stance(|i| i.climate.is_adverse(), Stance::Favor),
                FlagCase::stance(|i| i.adventure_is(AdventureLevel::None), Stance::Penalize),
            ],
        ),
        FlagDefinition::graded(
            Flag::LowRangeGearing,
            vec![
                FlagCase::stance(
                    |i| i.adventure_is(AdventureLevel::Extreme),
                    Stance::FavorExtreme,
                ),
                FlagCase::stance(
                    |i| i.adventure_is(AdventureLevel::Occasional),
                    Stance::FavorOccasional,
                ),
            ],
        ),
    ]
}
