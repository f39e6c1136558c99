//! Closed answer sets of the profile questionnaire.
//!
//! Each enum carries an `Unrecognized` variant that absorbs values outside the
//! declared set (stale clients, newer schemas). Rules treat it as the
//! no-preference branch.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdventureLevel {
    #[serde(rename = "ninguna")]
    None,
    #[serde(rename = "ocasional")]
    Occasional,
    #[serde(rename = "extrema")]
    Extreme,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrivingStyle {
    #[serde(rename = "tranquilo")]
    Calm,
    #[serde(rename = "deportivo")]
    Sporty,
    #[serde(rename = "mixto")]
    Mixed,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    #[serde(rename = "automatico")]
    Automatic,
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "ambos")]
    Either,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfessionalUse {
    #[serde(rename = "pasajeros")]
    Passengers,
    #[serde(rename = "carga")]
    Cargo,
    #[serde(rename = "mixto")]
    Mixed,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

/// How often the vehicle is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UsageFrequency {
    #[serde(rename = "diario")]
    Daily,
    #[serde(rename = "frecuente")]
    Frequent,
    #[serde(rename = "ocasional")]
    Occasional,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

impl UsageFrequency {
    /// Daily and frequent use both count as intensive use.
    pub fn is_intensive(self) -> bool {
        matches!(self, UsageFrequency::Daily | UsageFrequency::Frequent)
    }
}

/// Typical one-way distance of a regular trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TripDistance {
    #[serde(rename = "menos_10_km")]
    UnderTen,
    #[serde(rename = "10_50_km")]
    TenToFifty,
    #[serde(rename = "51_150_km")]
    FiftyToOneFifty,
    #[serde(rename = "mas_150_km")]
    OverOneFifty,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

impl TripDistance {
    pub fn is_short(self) -> bool {
        matches!(self, TripDistance::UnderTen | TripDistance::TenToFifty)
    }

    pub fn is_medium(self) -> bool {
        matches!(self, TripDistance::TenToFifty | TripDistance::FiftyToOneFifty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LongTripFrequency {
    #[serde(rename = "frecuente")]
    Frequent,
    #[serde(rename = "ocasional")]
    Occasional,
    #[serde(rename = "esporadico")]
    Sporadic,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

/// Garage dimension the user reports as tight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GarageDimension {
    #[serde(rename = "largo")]
    Length,
    #[serde(rename = "ancho")]
    Width,
    #[serde(rename = "alto")]
    Height,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}
