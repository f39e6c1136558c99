//! Derived flags: per-profile signals that gate bonus and penalty terms.
//!
//! Flags are siblings. None is computed from another; they are recomputed on
//! every scoring pass and never persisted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Graded preference a stance flag expresses towards a catalog trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Stance {
    #[default]
    #[serde(rename = "NEUTRO")]
    Neutral,
    #[serde(rename = "BONIFICAR")]
    Favor,
    #[serde(rename = "BONIFICAR_FUERTE")]
    StrongFavor,
    #[serde(rename = "FAVORECER_OCASIONAL")]
    FavorOccasional,
    #[serde(rename = "FAVORECER_EXTREMO")]
    FavorExtreme,
    #[serde(rename = "PENALIZAR")]
    Penalize,
    #[serde(rename = "PENALIZAR_FUERTE")]
    StrongPenalize,
}

impl Stance {
    pub fn is_neutral(self) -> bool {
        self == Stance::Neutral
    }

    pub fn is_favor(self) -> bool {
        matches!(
            self,
            Stance::Favor | Stance::StrongFavor | Stance::FavorOccasional | Stance::FavorExtreme
        )
    }

    pub fn is_penalty(self) -> bool {
        matches!(self, Stance::Penalize | Stance::StrongPenalize)
    }
}

/// Whether a flag holds a boolean or a stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Bool,
    Stance,
}

/// Value of one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Stance(Stance),
}

impl FlagValue {
    pub fn kind(self) -> FlagKind {
        match self {
            FlagValue::Bool(_) => FlagKind::Bool,
            FlagValue::Stance(_) => FlagKind::Stance,
        }
    }

    /// True for a set boolean or any non-neutral stance.
    pub fn is_active(self) -> bool {
        match self {
            FlagValue::Bool(b) => b,
            FlagValue::Stance(s) => !s.is_neutral(),
        }
    }
}

/// Every flag the deriver computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    // Rating thresholds.
    PenalizeLowCostByComfort,
    PenalizeSportyByComfort,
    PenalizeOldByTechnology,
    PenalizeHighConsumption,
    EcoLabel,
    NoLabel,
    // Adventure.
    AllWheelDrive,
    LowRangeGearing,
    // Usage intensity.
    BatteryElectric,
    RangeExtender,
    PluginHybrid,
    PenalizeDieselUrban,
    FavorDieselLongDistance,
    FavorHybridUrban,
    // Body types.
    FavorSuvMountain,
    FavorCommercial,
    FavorSedanMinivan,
    FavorSuvAdventure,
    FavorPickupOffroad,
    PenalizePickupOffroad,
    FavorLifestyle,
    FavorCompactUrban,
    PenalizeTwoDoorWithChildren,
    PenalizeLowBodiesTall,
    FavorWagonForCargo,
    // Driving and infrastructure.
    PenalizeManual,
    PenalizeAutomatic,
    PenalizeSportyByCalmStyle,
    FavorLpg,
    FavorCng,
    PenalizeLpgUnavailable,
    PenalizeCngUnavailable,
    PenalizeBevWithoutHomeCharging,
}

impl Flag {
    pub const ALL: [Flag; 33] = [
        Flag::PenalizeLowCostByComfort,
        Flag::PenalizeSportyByComfort,
        Flag::PenalizeOldByTechnology,
        Flag::PenalizeHighConsumption,
        Flag::EcoLabel,
        Flag::NoLabel,
        Flag::AllWheelDrive,
        Flag::LowRangeGearing,
        Flag::BatteryElectric,
        Flag::RangeExtender,
        Flag::PluginHybrid,
        Flag::PenalizeDieselUrban,
        Flag::FavorDieselLongDistance,
        Flag::FavorHybridUrban,
        Flag::FavorSuvMountain,
        Flag::FavorCommercial,
        Flag::FavorSedanMinivan,
        Flag::FavorSuvAdventure,
        Flag::FavorPickupOffroad,
        Flag::PenalizePickupOffroad,
        Flag::FavorLifestyle,
        Flag::FavorCompactUrban,
        Flag::PenalizeTwoDoorWithChildren,
        Flag::PenalizeLowBodiesTall,
        Flag::FavorWagonForCargo,
        Flag::PenalizeManual,
        Flag::PenalizeAutomatic,
        Flag::PenalizeSportyByCalmStyle,
        Flag::FavorLpg,
        Flag::FavorCng,
        Flag::PenalizeLpgUnavailable,
        Flag::PenalizeCngUnavailable,
        Flag::PenalizeBevWithoutHomeCharging,
    ];

    pub fn kind(self) -> FlagKind {
        match self {
            Flag::EcoLabel
            | Flag::NoLabel
            | Flag::AllWheelDrive
            | Flag::LowRangeGearing
            | Flag::BatteryElectric
            | Flag::RangeExtender
            | Flag::PluginHybrid => FlagKind::Stance,
            _ => FlagKind::Bool,
        }
    }

    /// Value the flag holds when no rule fires.
    pub fn default_value(self) -> FlagValue {
        match self.kind() {
            FlagKind::Bool => FlagValue::Bool(false),
            FlagKind::Stance => FlagValue::Stance(Stance::Neutral),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::PenalizeLowCostByComfort => "penalize_low_cost_by_comfort",
            Flag::PenalizeSportyByComfort => "penalize_sporty_by_comfort",
            Flag::PenalizeOldByTechnology => "penalize_old_by_technology",
            Flag::PenalizeHighConsumption => "penalize_high_consumption",
            Flag::EcoLabel => "eco_label",
            Flag::NoLabel => "no_label",
            Flag::AllWheelDrive => "all_wheel_drive",
            Flag::LowRangeGearing => "low_range_gearing",
            Flag::BatteryElectric => "battery_electric",
            Flag::RangeExtender => "range_extender",
            Flag::PluginHybrid => "plugin_hybrid",
            Flag::PenalizeDieselUrban => "penalize_diesel_urban",
            Flag::FavorDieselLongDistance => "favor_diesel_long_distance",
            Flag::FavorHybridUrban => "favor_hybrid_urban",
            Flag::FavorSuvMountain => "favor_suv_mountain",
            Flag::FavorCommercial => "favor_commercial",
            Flag::FavorSedanMinivan => "favor_sedan_minivan",
            Flag::FavorSuvAdventure => "favor_suv_adventure",
            Flag::FavorPickupOffroad => "favor_pickup_offroad",
            Flag::PenalizePickupOffroad => "penalize_pickup_offroad",
            Flag::FavorLifestyle => "favor_lifestyle",
            Flag::FavorCompactUrban => "favor_compact_urban",
            Flag::PenalizeTwoDoorWithChildren => "penalize_two_door_with_children",
            Flag::PenalizeLowBodiesTall => "penalize_low_bodies_tall",
            Flag::FavorWagonForCargo => "favor_wagon_for_cargo",
            Flag::PenalizeManual => "penalize_manual",
            Flag::PenalizeAutomatic => "penalize_automatic",
            Flag::PenalizeSportyByCalmStyle => "penalize_sporty_by_calm_style",
            Flag::FavorLpg => "favor_lpg",
            Flag::FavorCng => "favor_cng",
            Flag::PenalizeLpgUnavailable => "penalize_lpg_unavailable",
            Flag::PenalizeCngUnavailable => "penalize_cng_unavailable",
            Flag::PenalizeBevWithoutHomeCharging => "penalize_bev_without_home_charging",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full flag map of one scoring pass. Always holds every flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagSet(BTreeMap<Flag, FlagValue>);

impl FlagSet {
    /// Every flag at its default.
    pub fn defaults() -> Self {
        Self(Flag::ALL.iter().map(|f| (*f, f.default_value())).collect())
    }

    pub fn get(&self, flag: Flag) -> FlagValue {
        self.0.get(&flag).copied().unwrap_or_else(|| flag.default_value())
    }

    pub fn set(&mut self, flag: Flag, value: FlagValue) {
        self.0.insert(flag, value);
    }

    /// Boolean view: set booleans and non-neutral stances are true.
    pub fn is_active(&self, flag: Flag) -> bool {
        self.get(flag).is_active()
    }

    /// Stance view. Boolean flags read as neutral.
    pub fn stance(&self, flag: Flag) -> Stance {
        match self.get(flag) {
            FlagValue::Stance(s) => s,
            FlagValue::Bool(_) => Stance::Neutral,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Flag, FlagValue)> + '_ {
        self.0.iter().map(|(f, v)| (*f, *v))
    }

    /// Flags that differ from their default.
    pub fn active(&self) -> Vec<Flag> {
        self.iter()
            .filter(|(_, v)| v.is_active())
            .map(|(f, _)| f)
            .collect()
    }
}

impl Default for FlagSet {
    fn default() -> Self {
        Self::defaults()
    }
}
