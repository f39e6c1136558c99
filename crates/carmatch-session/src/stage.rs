use serde::Serialize;

use carmatch_completeness::{
    first_missing_economics_field, first_missing_passenger_field, first_missing_profile_field,
    EconomicsField, PassengerField, ProfileField,
};
use carmatch_core::models::{ClimateInfo, EconomicsInfo, PassengerInfo};
use carmatch_core::profile::UserProfile;

/// Next thing the interview needs, in fixed section order: profile,
/// passengers, postal code, economics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "field", rename_all = "snake_case")]
pub enum Stage {
    Profile(ProfileField),
    Passengers(PassengerField),
    PostalCode,
    Economics(EconomicsField),
    Ready,
}

impl Stage {
    pub fn evaluate(
        profile: &UserProfile,
        passengers: &PassengerInfo,
        climate: &ClimateInfo,
        economics: &EconomicsInfo,
    ) -> Self {
        if let Some(field) = first_missing_profile_field(profile) {
            return Stage::Profile(field);
        }
        if let Some(field) = first_missing_passenger_field(passengers) {
            return Stage::Passengers(field);
        }
        // Any attempt counts, resolved or not; an unknown code is not re-asked.
        if climate.postal_code.is_none() {
            return Stage::PostalCode;
        }
        if let Some(field) = first_missing_economics_field(economics) {
            return Stage::Economics(field);
        }
        Stage::Ready
    }

    pub fn is_ready(self) -> bool {
        self == Stage::Ready
    }
}
