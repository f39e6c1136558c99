use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;

/// Powertrain of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MechanicalType {
    #[serde(rename = "GASOLINA")]
    Gasoline,
    #[serde(rename = "DIESEL")]
    Diesel,
    #[serde(rename = "MHEVG")]
    MildHybridGasoline,
    #[serde(rename = "MHEVD")]
    MildHybridDiesel,
    #[serde(rename = "FHEVG")]
    FullHybridGasoline,
    #[serde(rename = "FHEVD")]
    FullHybridDiesel,
    #[serde(rename = "PHEVG")]
    PluginHybridGasoline,
    #[serde(rename = "PHEVD")]
    PluginHybridDiesel,
    #[serde(rename = "GLP")]
    Lpg,
    #[serde(rename = "GNV")]
    Cng,
    #[serde(rename = "FCEV")]
    HydrogenFuelCell,
    #[serde(rename = "BIOETANOL")]
    Bioethanol,
    #[serde(rename = "BEV")]
    BatteryElectric,
    #[serde(rename = "REEV")]
    RangeExtended,
}

impl MechanicalType {
    pub const ALL: [MechanicalType; 14] = [
        MechanicalType::Gasoline,
        MechanicalType::Diesel,
        MechanicalType::MildHybridGasoline,
        MechanicalType::MildHybridDiesel,
        MechanicalType::FullHybridGasoline,
        MechanicalType::FullHybridDiesel,
        MechanicalType::PluginHybridGasoline,
        MechanicalType::PluginHybridDiesel,
        MechanicalType::Lpg,
        MechanicalType::Cng,
        MechanicalType::HydrogenFuelCell,
        MechanicalType::Bioethanol,
        MechanicalType::BatteryElectric,
        MechanicalType::RangeExtended,
    ];

    /// Everything except pure battery-electric and range-extended electric.
    pub const NON_ELECTRIC: [MechanicalType; 12] = [
        MechanicalType::Gasoline,
        MechanicalType::Diesel,
        MechanicalType::MildHybridGasoline,
        MechanicalType::MildHybridDiesel,
        MechanicalType::FullHybridGasoline,
        MechanicalType::FullHybridDiesel,
        MechanicalType::PluginHybridGasoline,
        MechanicalType::PluginHybridDiesel,
        MechanicalType::Lpg,
        MechanicalType::Cng,
        MechanicalType::HydrogenFuelCell,
        MechanicalType::Bioethanol,
    ];

    pub const ELECTRIC: [MechanicalType; 2] =
        [MechanicalType::BatteryElectric, MechanicalType::RangeExtended];

    pub const DIESEL_FAMILY: [MechanicalType; 4] = [
        MechanicalType::Diesel,
        MechanicalType::MildHybridDiesel,
        MechanicalType::FullHybridDiesel,
        MechanicalType::PluginHybridDiesel,
    ];

    pub const PLUGIN_HYBRIDS: [MechanicalType; 2] = [
        MechanicalType::PluginHybridGasoline,
        MechanicalType::PluginHybridDiesel,
    ];

    pub const FULL_HYBRIDS: [MechanicalType; 2] = [
        MechanicalType::FullHybridGasoline,
        MechanicalType::FullHybridDiesel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MechanicalType::Gasoline => "GASOLINA",
            MechanicalType::Diesel => "DIESEL",
            MechanicalType::MildHybridGasoline => "MHEVG",
            MechanicalType::MildHybridDiesel => "MHEVD",
            MechanicalType::FullHybridGasoline => "FHEVG",
            MechanicalType::FullHybridDiesel => "FHEVD",
            MechanicalType::PluginHybridGasoline => "PHEVG",
            MechanicalType::PluginHybridDiesel => "PHEVD",
            MechanicalType::Lpg => "GLP",
            MechanicalType::Cng => "GNV",
            MechanicalType::HydrogenFuelCell => "FCEV",
            MechanicalType::Bioethanol => "BIOETANOL",
            MechanicalType::BatteryElectric => "BEV",
            MechanicalType::RangeExtended => "REEV",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == key)
    }

    pub fn is_electric(self) -> bool {
        Self::ELECTRIC.contains(&self)
    }
}

/// Body style of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "3VOL")]
    Sedan,
    #[serde(rename = "2VOL")]
    Hatchback,
    #[serde(rename = "FAMILIAR")]
    StationWagon,
    #[serde(rename = "SUV")]
    Suv,
    #[serde(rename = "TODOTERRENO")]
    OffRoad,
    #[serde(rename = "PICKUP")]
    Pickup,
    #[serde(rename = "MONOVOLUMEN")]
    Minivan,
    #[serde(rename = "COMERCIAL")]
    Commercial,
    #[serde(rename = "COUPE")]
    Coupe,
    #[serde(rename = "DESCAPOTABLE")]
    Convertible,
}

impl BodyType {
    pub const ALL: [BodyType; 10] = [
        BodyType::Sedan,
        BodyType::Hatchback,
        BodyType::StationWagon,
        BodyType::Suv,
        BodyType::OffRoad,
        BodyType::Pickup,
        BodyType::Minivan,
        BodyType::Commercial,
        BodyType::Coupe,
        BodyType::Convertible,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyType::Sedan => "3VOL",
            BodyType::Hatchback => "2VOL",
            BodyType::StationWagon => "FAMILIAR",
            BodyType::Suv => "SUV",
            BodyType::OffRoad => "TODOTERRENO",
            BodyType::Pickup => "PICKUP",
            BodyType::Minivan => "MONOVOLUMEN",
            BodyType::Commercial => "COMERCIAL",
            BodyType::Coupe => "COUPE",
            BodyType::Convertible => "DESCAPOTABLE",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.as_str() == key)
    }
}

/// Environmental label of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EcoLabel {
    #[serde(rename = "CERO")]
    Zero,
    #[serde(rename = "ECO")]
    Eco,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "SIN_ETIQUETA")]
    NoLabel,
}

impl EcoLabel {
    pub const ALL: [EcoLabel; 5] = [
        EcoLabel::Zero,
        EcoLabel::Eco,
        EcoLabel::C,
        EcoLabel::B,
        EcoLabel::NoLabel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EcoLabel::Zero => "CERO",
            EcoLabel::Eco => "ECO",
            EcoLabel::C => "C",
            EcoLabel::B => "B",
            EcoLabel::NoLabel => "SIN_ETIQUETA",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.as_str() == key)
    }
}

/// One row of the vehicle catalog as the ranking layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub mechanical_type: MechanicalType,
    pub body_type: BodyType,
    pub eco_label: EcoLabel,
    pub price: f64,
    #[serde(default)]
    pub monthly_installment: Option<f64>,
    pub seats: u32,
    pub aesthetics_score: f64,
    pub premium_score: f64,
    pub singularity_score: f64,
    pub model_year: u16,
    #[serde(default)]
    pub all_wheel_drive: bool,
    #[serde(default)]
    pub low_range_gearing: bool,
    #[serde(default)]
    pub low_cost_trim: bool,
    #[serde(default)]
    pub sporty_trim: bool,
    #[serde(default)]
    pub automatic: bool,
    /// Pre-scaled `[0, 1]` features. Missing dimensions score 0.
    #[serde(default)]
    pub features: BTreeMap<Dimension, f64>,
}

impl CatalogItem {
    pub fn feature(&self, dimension: Dimension) -> f64 {
        self.features.get(&dimension).copied().unwrap_or(0.0)
    }
}
