use serde::{Deserialize, Serialize};

use crate::profile::TriState;

/// How the vehicle is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcquisitionMode {
    #[serde(rename = "Contado")]
    Cash,
    #[serde(rename = "Financiado")]
    Financed,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

/// Budget answers.
///
/// `budget_defined = no` is advisory mode (income and savings drive a
/// recommendation); `yes` is self-defined mode (the user states a ceiling).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicsInfo {
    #[serde(rename = "presupuesto_definido")]
    pub budget_defined: TriState,
    #[serde(rename = "ingresos")]
    pub annual_income: Option<f64>,
    #[serde(rename = "ahorro")]
    pub savings: Option<f64>,
    #[serde(rename = "tipo_compra")]
    pub acquisition_mode: Option<AcquisitionMode>,
    #[serde(rename = "pago_contado")]
    pub cash_payment: Option<f64>,
    #[serde(rename = "cuota_max")]
    pub max_installment: Option<f64>,
}

impl EconomicsInfo {
    /// Upsert every field `fragment` sets.
    pub fn merge(&mut self, fragment: EconomicsInfo) {
        if fragment.budget_defined.is_known() {
            self.budget_defined = fragment.budget_defined;
        }
        if fragment.annual_income.is_some() {
            self.annual_income = fragment.annual_income;
        }
        if fragment.savings.is_some() {
            self.savings = fragment.savings;
        }
        if fragment.acquisition_mode.is_some() {
            self.acquisition_mode = fragment.acquisition_mode;
        }
        if fragment.cash_payment.is_some() {
            self.cash_payment = fragment.cash_payment;
        }
        if fragment.max_installment.is_some() {
            self.max_installment = fragment.max_installment;
        }
    }
}
