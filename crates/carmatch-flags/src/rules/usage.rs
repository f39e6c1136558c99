//! Usage intensity: frequency × trip distance × long-trip frequency decide
//! which powertrains suit the user.

use carmatch_core::flags::{Flag, Stance};
use carmatch_core::profile::{LongTripFrequency, TripDistance};

use crate::table::{FlagCase, FlagDefinition};

pub(super) fn definitions() -> Vec<FlagDefinition> {
    vec![
        FlagDefinition::graded(
            Flag::BatteryElectric,
            vec![
                FlagCase::stance(
                    |i| i.intensive_use() && i.distance_is(TripDistance::OverOneFifty),
                    Stance::Penalize,
                ),
                FlagCase::stance(
                    |i| i.long_trips() == Some(LongTripFrequency::Frequent),
                    Stance::Penalize,
                ),
                FlagCase::stance(
                    |i| i.intensive_use() && i.medium_distance() && i.rare_long_trips(),
                    Stance::Favor,
                ),
            ],
        ),
        FlagDefinition::graded(
            Flag::RangeExtender,
            vec![FlagCase::stance(
                |i| {
                    i.intensive_use()
                        && i.medium_distance()
                        && i.long_trips() == Some(LongTripFrequency::Occasional)
                },
                Stance::Favor,
            )],
        ),
        FlagDefinition::graded(
            Flag::PluginHybrid,
            vec![
                FlagCase::stance(
                    |i| i.intensive_use() && i.distance_is(TripDistance::OverOneFifty),
                    Stance::Penalize,
                ),
                FlagCase::stance(
                    |i| {
                        i.intensive_use()
                            && i.medium_distance()
                            && matches!(
                                i.long_trips(),
                                Some(LongTripFrequency::Occasional | LongTripFrequency::Frequent)
                            )
                    },
                    Stance::Favor,
                ),
            ],
        ),
        FlagDefinition::boolean(Flag::PenalizeDieselUrban, |i| {
            i.profile.mostly_urban.is_yes() && i.intensive_use() && i.short_distance()
        }),
        FlagDefinition::boolean(Flag::FavorDieselLongDistance, |i| {
            i.distance_is(TripDistance::OverOneFifty)
                || i.long_trips() == Some(LongTripFrequency::Frequent)
        }),
        FlagDefinition::boolean(Flag::FavorHybridUrban, |i| {
            i.profile.mostly_urban.is_yes() && i.intensive_use()
        }),
    ]
}
