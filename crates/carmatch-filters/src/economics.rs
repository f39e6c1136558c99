//! Acquisition advice: cash or financing, and the matching ceiling.

use carmatch_core::config::EconomicsConfig;
use carmatch_core::constants::MONTHS_PER_YEAR;
use carmatch_core::models::{AcquisitionMode, EconomicsInfo, InferredFilters};
use carmatch_core::profile::TriState;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Recommended mode with exactly one populated ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionAdvice {
    pub mode: AcquisitionMode,
    pub max_cash_price: Option<f64>,
    pub max_monthly_installment: Option<f64>,
}

impl AcquisitionAdvice {
    fn cash(price: f64) -> Self {
        Self {
            mode: AcquisitionMode::Cash,
            max_cash_price: Some(price),
            max_monthly_installment: None,
        }
    }

    fn financed(installment: f64) -> Self {
        Self {
            mode: AcquisitionMode::Financed,
            max_cash_price: None,
            max_monthly_installment: Some(installment),
        }
    }
}

fn non_negative(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Advice for the current economics answers, or `None` while the section is
/// still missing what its mode needs.
///
/// Advisory mode compares the spending capacity over the horizon
/// (`income × share × years`) with the usable part of savings
/// (`savings × ratio`). Savings that cover the capacity mean paying cash up
/// to the capacity; otherwise the capacity is spread over the horizon as a
/// monthly installment. Self-defined mode echoes the user's own ceiling.
pub fn recommend_acquisition(
    info: &EconomicsInfo,
    config: &EconomicsConfig,
) -> Option<AcquisitionAdvice> {
    match info.budget_defined {
        TriState::No => {
            let income = non_negative(info.annual_income)?;
            let savings = non_negative(info.savings)?;
            let years = f64::from(config.horizon_years);
            let capacity = income * config.income_share * years;
            let usable = savings * config.usable_savings_ratio;
            let advice = if usable >= capacity {
                AcquisitionAdvice::cash(capacity)
            } else {
                let months = (years * MONTHS_PER_YEAR).max(1.0);
                AcquisitionAdvice::financed(capacity / months)
            };
            debug!(capacity, usable, mode = ?advice.mode, "advisory acquisition computed");
            Some(advice)
        }
        TriState::Yes => match info.acquisition_mode? {
            AcquisitionMode::Cash => non_negative(info.cash_payment).map(AcquisitionAdvice::cash),
            AcquisitionMode::Financed => {
                non_negative(info.max_installment).map(AcquisitionAdvice::financed)
            }
            AcquisitionMode::Unrecognized => None,
        },
        TriState::Unknown => None,
    }
}

/// Backfill the acquisition fields of `filters`.
///
/// Fields are only written when all three are unset, so a partially stated
/// budget is never mixed with a computed one.
pub fn apply_economics(filters: &mut InferredFilters, info: &EconomicsInfo, config: &EconomicsConfig) {
    let untouched = filters.recommended_acquisition.is_none()
        && filters.max_cash_price.is_none()
        && filters.max_monthly_installment.is_none();
    if !untouched {
        return;
    }
    if let Some(advice) = recommend_acquisition(info, config) {
        filters.recommended_acquisition = Some(advice.mode);
        filters.max_cash_price = advice.max_cash_price;
        filters.max_monthly_installment = advice.max_monthly_installment;
    }
}
