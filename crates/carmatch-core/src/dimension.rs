//! Scoring dimensions of the catalog.
//!
//! Every catalog item carries one pre-scaled `[0, 1]` feature per dimension.
//! The `compact_*`, `footprint` and `turning_diameter` features are scaled so
//! that smaller vehicles score higher.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One scoring dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    ReliabilityDurability,
    Safety,
    DriverAssistance,
    Comfort,
    AcousticComfort,
    EnvironmentalImpact,
    UsageCost,
    FuelConsumption,
    MaintenanceCost,
    InsuranceCost,
    Technology,
    Infotainment,
    Aesthetics,
    Premium,
    Singularity,
    Depreciation,
    Warranty,
    Sportiness,
    PowerToWeight,
    MaxPower,
    Torque,
    Acceleration,
    TowingBraked,
    TowingUnbraked,
    GroundClearance,
    ApproachAngle,
    Wheelbase,
    #[serde(rename = "interior_height_index")]
    InteriorHeight,
    Width,
    Length,
    MinTrunk,
    MaxTrunk,
    TurningDiameter,
    Footprint,
    CompactLength,
    CompactWidth,
    CompactHeight,
    ElectricRange,
    TotalRange,
    DcChargePower,
    AcChargePower,
}

impl Dimension {
    pub const ALL: [Dimension; 41] = [
        Dimension::ReliabilityDurability,
        Dimension::Safety,
        Dimension::DriverAssistance,
        Dimension::Comfort,
        Dimension::AcousticComfort,
        Dimension::EnvironmentalImpact,
        Dimension::UsageCost,
        Dimension::FuelConsumption,
        Dimension::MaintenanceCost,
        Dimension::InsuranceCost,
        Dimension::Technology,
        Dimension::Infotainment,
        Dimension::Aesthetics,
        Dimension::Premium,
        Dimension::Singularity,
        Dimension::Depreciation,
        Dimension::Warranty,
        Dimension::Sportiness,
        Dimension::PowerToWeight,
        Dimension::MaxPower,
        Dimension::Torque,
        Dimension::Acceleration,
        Dimension::TowingBraked,
        Dimension::TowingUnbraked,
        Dimension::GroundClearance,
        Dimension::ApproachAngle,
        Dimension::Wheelbase,
        Dimension::InteriorHeight,
        Dimension::Width,
        Dimension::Length,
        Dimension::MinTrunk,
        Dimension::MaxTrunk,
        Dimension::TurningDiameter,
        Dimension::Footprint,
        Dimension::CompactLength,
        Dimension::CompactWidth,
        Dimension::CompactHeight,
        Dimension::ElectricRange,
        Dimension::TotalRange,
        Dimension::DcChargePower,
        Dimension::AcChargePower,
    ];

    /// Dimensions the driving-style archetype boosts.
    pub const PERFORMANCE: [Dimension; 5] = [
        Dimension::Sportiness,
        Dimension::PowerToWeight,
        Dimension::MaxPower,
        Dimension::Torque,
        Dimension::Acceleration,
    ];

    /// Stable key, identical to the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::ReliabilityDurability => "reliability_durability",
            Dimension::Safety => "safety",
            Dimension::DriverAssistance => "driver_assistance",
            Dimension::Comfort => "comfort",
            Dimension::AcousticComfort => "acoustic_comfort",
            Dimension::EnvironmentalImpact => "environmental_impact",
            Dimension::UsageCost => "usage_cost",
            Dimension::FuelConsumption => "fuel_consumption",
            Dimension::MaintenanceCost => "maintenance_cost",
            Dimension::InsuranceCost => "insurance_cost",
            Dimension::Technology => "technology",
            Dimension::Infotainment => "infotainment",
            Dimension::Aesthetics => "aesthetics",
            Dimension::Premium => "premium",
            Dimension::Singularity => "singularity",
            Dimension::Depreciation => "depreciation",
            Dimension::Warranty => "warranty",
            Dimension::Sportiness => "sportiness",
            Dimension::PowerToWeight => "power_to_weight",
            Dimension::MaxPower => "max_power",
            Dimension::Torque => "torque",
            Dimension::Acceleration => "acceleration",
            Dimension::TowingBraked => "towing_braked",
            Dimension::TowingUnbraked => "towing_unbraked",
            Dimension::GroundClearance => "ground_clearance",
            Dimension::ApproachAngle => "approach_angle",
            Dimension::Wheelbase => "wheelbase",
            Dimension::InteriorHeight => "interior_height_index",
            Dimension::Width => "width",
            Dimension::Length => "length",
            Dimension::MinTrunk => "min_trunk",
            Dimension::MaxTrunk => "max_trunk",
            Dimension::TurningDiameter => "turning_diameter",
            Dimension::Footprint => "footprint",
            Dimension::CompactLength => "compact_length",
            Dimension::CompactWidth => "compact_width",
            Dimension::CompactHeight => "compact_height",
            Dimension::ElectricRange => "electric_range",
            Dimension::TotalRange => "total_range",
            Dimension::DcChargePower => "dc_charge_power",
            Dimension::AcChargePower => "ac_charge_power",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.as_str() == key)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-dimension weights. Raw vectors are clamped, normalized ones sum to 1.
pub type WeightVector = BTreeMap<Dimension, f64>;
