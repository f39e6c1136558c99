use serde::{Deserialize, Serialize};

/// Climate and infrastructure flags for the user's postal code.
///
/// Produced once by the climate lookup; every flag is false until then.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateInfo {
    #[serde(rename = "MUNICIPIO_ZBE")]
    pub low_emission_zone: bool,
    #[serde(rename = "ZONA_LLUVIAS")]
    pub rain_zone: bool,
    #[serde(rename = "ZONA_NIEBLAS")]
    pub fog_zone: bool,
    #[serde(rename = "ZONA_NIEVE")]
    pub snow_zone: bool,
    #[serde(rename = "ZONA_CLIMA_MONTA")]
    pub mountain_zone: bool,
    #[serde(rename = "ZONA_GLP")]
    pub lpg_zone: bool,
    #[serde(rename = "ZONA_GNV")]
    pub cng_zone: bool,
    #[serde(rename = "cp_valido_encontrado")]
    pub postal_code_resolved: bool,
    #[serde(rename = "codigo_postal_consultado")]
    pub postal_code: Option<String>,
}

impl ClimateInfo {
    /// Record for a postal code the lookup could not resolve.
    pub fn not_found(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: Some(postal_code.into()),
            ..Default::default()
        }
    }

    /// Snow or mountain climate, where all-wheel drive earns its keep.
    pub fn is_adverse(&self) -> bool {
        self.snow_zone || self.mountain_zone
    }
}
