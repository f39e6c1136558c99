use serde::{Deserialize, Serialize};

use super::catalog::{BodyType, MechanicalType};
use super::economics::AcquisitionMode;

/// Hard filters derived from the profile.
///
/// Built once and progressively refined; compilers only backfill gaps so
/// values set earlier (for example by extraction) are never clobbered.
/// An empty allowlist means "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferredFilters {
    #[serde(rename = "estetica_min")]
    pub min_aesthetics: Option<f64>,
    #[serde(rename = "premium_min")]
    pub min_premium: Option<f64>,
    #[serde(rename = "singular_min")]
    pub min_singularity: Option<f64>,
    #[serde(rename = "tipo_mecanica")]
    pub mechanical_types: Vec<MechanicalType>,
    #[serde(rename = "tipo_carroceria")]
    pub body_types: Vec<BodyType>,
    #[serde(rename = "plazas_min")]
    pub min_seats: Option<u32>,
    #[serde(rename = "modo_adquisicion_recomendado")]
    pub recommended_acquisition: Option<AcquisitionMode>,
    #[serde(rename = "precio_max_contado_recomendado")]
    pub max_cash_price: Option<f64>,
    #[serde(rename = "cuota_max_calculada")]
    pub max_monthly_installment: Option<f64>,
}
