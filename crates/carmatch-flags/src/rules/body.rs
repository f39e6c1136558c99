//! Body-type preferences from climate, professional use, adventure, lifestyle
//! and passenger composition.

use carmatch_core::flags::Flag;
use carmatch_core::profile::{AdventureLevel, DrivingStyle, ProfessionalUse};

use crate::table::FlagDefinition;

pub(super) fn definitions() -> Vec<FlagDefinition> {
    vec![
        FlagDefinition::boolean(Flag::FavorSuvMountain, |i| i.climate.mountain_zone),
        FlagDefinition::boolean(Flag::FavorCommercial, |i| {
            i.profile.professional_use.is_yes()
                && matches!(
                    i.profile.professional_use_type,
                    Some(ProfessionalUse::Cargo | ProfessionalUse::Mixed)
                )
        }),
        FlagDefinition::boolean(Flag::FavorSedanMinivan, |i| {
            i.profile.professional_use.is_yes()
                && i.profile.professional_use_type == Some(ProfessionalUse::Passengers)
        }),
        FlagDefinition::boolean(Flag::FavorSuvAdventure, |i| {
            i.adventure_is(AdventureLevel::Occasional)
        }),
        FlagDefinition::boolean(Flag::FavorPickupOffroad, |i| {
            i.adventure_is(AdventureLevel::Extreme)
        }),
        FlagDefinition::boolean(Flag::PenalizePickupOffroad, |i| {
            i.adventure_is(AdventureLevel::None) && !i.climate.mountain_zone
        }),
        FlagDefinition::boolean(Flag::FavorLifestyle, |i| {
            let preference = i.profile.prefers_exclusive_design.is_yes()
                || i.profile.driving_style == Some(DrivingStyle::Sporty);
            preference && i.low_passenger_load()
        }),
        FlagDefinition::boolean(Flag::FavorCompactUrban, |i| {
            i.profile.mostly_urban.is_yes() && i.low_passenger_load()
        }),
        FlagDefinition::boolean(Flag::PenalizeTwoDoorWithChildren, |i| {
            i.passengers.usually_carries_companions.is_yes() && i.passengers.children() >= 1
        }),
        FlagDefinition::boolean(Flag::PenalizeLowBodiesTall, |i| {
            i.profile.taller_than_190.is_yes()
        }),
        FlagDefinition::boolean(Flag::FavorWagonForCargo, |i| {
            i.profile.carries_bulky_cargo.is_yes()
        }),
    ]
}
