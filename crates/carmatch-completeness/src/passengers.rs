use carmatch_core::models::PassengerInfo;
use carmatch_core::profile::TriState;
use serde::Serialize;

use crate::answered::Answered;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PassengerField {
    #[serde(rename = "suele_llevar_acompanantes")]
    UsuallyCarriesCompanions,
    #[serde(rename = "frecuencia_viaje_acompanantes")]
    CompanionFrequency,
    #[serde(rename = "num_ninos_silla")]
    ChildSeatPassengers,
    #[serde(rename = "num_otros_pasajeros")]
    OtherPassengers,
}

/// Travelling alone settles the section; travelling with companions needs
/// frequency and both counts.
pub fn first_missing_passenger_field(info: &PassengerInfo) -> Option<PassengerField> {
    match info.usually_carries_companions {
        TriState::Unknown => Some(PassengerField::UsuallyCarriesCompanions),
        TriState::No => None,
        TriState::Yes => {
            if !info.companion_frequency.answered() {
                Some(PassengerField::CompanionFrequency)
            } else if !info.child_seat_passengers.answered() {
                Some(PassengerField::ChildSeatPassengers)
            } else if !info.other_passengers.answered() {
                Some(PassengerField::OtherPassengers)
            } else {
                None
            }
        }
    }
}

pub fn is_passenger_info_complete(info: &PassengerInfo) -> bool {
    first_missing_passenger_field(info).is_none()
}
