//! Transmission, driving style, alternative fuels and home charging.

use carmatch_core::flags::Flag;
use carmatch_core::profile::{DrivingStyle, Transmission};

use crate::table::FlagDefinition;

pub(super) fn definitions() -> Vec<FlagDefinition> {
    vec![
        FlagDefinition::boolean(Flag::PenalizeManual, |i| {
            i.profile.preferred_transmission == Some(Transmission::Automatic)
        }),
        FlagDefinition::boolean(Flag::PenalizeAutomatic, |i| {
            i.profile.preferred_transmission == Some(Transmission::Manual)
        }),
        FlagDefinition::boolean(Flag::PenalizeSportyByCalmStyle, |i| {
            i.profile.driving_style == Some(DrivingStyle::Calm)
        }),
        FlagDefinition::boolean(Flag::FavorLpg, |i| {
            i.climate.lpg_zone && i.usage_cost_high()
        }),
        FlagDefinition::boolean(Flag::FavorCng, |i| {
            i.climate.cng_zone && i.usage_cost_high()
        }),
        // Only penalize a missing station network once the postal code resolved.
        FlagDefinition::boolean(Flag::PenalizeLpgUnavailable, |i| {
            i.climate.postal_code_resolved && !i.climate.lpg_zone
        }),
        FlagDefinition::boolean(Flag::PenalizeCngUnavailable, |i| {
            i.climate.postal_code_resolved && !i.climate.cng_zone
        }),
        FlagDefinition::boolean(Flag::PenalizeBevWithoutHomeCharging, |i| {
            i.profile.has_garage.is_no()
        }),
    ]
}
