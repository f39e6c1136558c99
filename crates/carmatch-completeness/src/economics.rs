use carmatch_core::models::{AcquisitionMode, EconomicsInfo};
use carmatch_core::profile::TriState;
use serde::Serialize;

use crate::answered::Answered;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EconomicsField {
    #[serde(rename = "presupuesto_definido")]
    BudgetDefined,
    #[serde(rename = "ingresos")]
    AnnualIncome,
    #[serde(rename = "ahorro")]
    Savings,
    #[serde(rename = "tipo_compra")]
    AcquisitionMode,
    #[serde(rename = "pago_contado")]
    CashPayment,
    #[serde(rename = "cuota_max")]
    MaxInstallment,
}

/// Advisory mode needs income and savings; self-defined mode needs the
/// acquisition mode and the ceiling that mode pays with.
pub fn first_missing_economics_field(info: &EconomicsInfo) -> Option<EconomicsField> {
    match info.budget_defined {
        TriState::Unknown => Some(EconomicsField::BudgetDefined),
        TriState::No => {
            if !info.annual_income.answered() {
                Some(EconomicsField::AnnualIncome)
            } else if !info.savings.answered() {
                Some(EconomicsField::Savings)
            } else {
                None
            }
        }
        TriState::Yes => match info.acquisition_mode {
            Some(AcquisitionMode::Cash) if !info.cash_payment.answered() => {
                Some(EconomicsField::CashPayment)
            }
            Some(AcquisitionMode::Financed) if !info.max_installment.answered() => {
                Some(EconomicsField::MaxInstallment)
            }
            Some(AcquisitionMode::Cash) | Some(AcquisitionMode::Financed) => None,
            Some(AcquisitionMode::Unrecognized) | None => Some(EconomicsField::AcquisitionMode),
        },
    }
}

pub fn is_economics_complete(info: &EconomicsInfo) -> bool {
    first_missing_economics_field(info).is_none()
}
