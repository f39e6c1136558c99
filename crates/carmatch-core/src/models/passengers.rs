use serde::{Deserialize, Serialize};

use crate::profile::TriState;

/// How often companions ride along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanionFrequency {
    #[serde(rename = "ocasional")]
    Occasional,
    #[serde(rename = "frecuente")]
    Frequent,
    #[serde(other, rename = "desconocido")]
    Unrecognized,
}

/// Who usually travels with the driver.
///
/// Frequency and counts only matter when `usually_carries_companions` is yes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassengerInfo {
    #[serde(rename = "suele_llevar_acompanantes")]
    pub usually_carries_companions: TriState,
    #[serde(rename = "frecuencia_viaje_acompanantes")]
    pub companion_frequency: Option<CompanionFrequency>,
    #[serde(rename = "num_ninos_silla")]
    pub child_seat_passengers: Option<u32>,
    #[serde(rename = "num_otros_pasajeros")]
    pub other_passengers: Option<u32>,
}

impl PassengerInfo {
    /// Upsert every field `fragment` sets.
    pub fn merge(&mut self, fragment: PassengerInfo) {
        if fragment.usually_carries_companions.is_known() {
            self.usually_carries_companions = fragment.usually_carries_companions;
        }
        if fragment.companion_frequency.is_some() {
            self.companion_frequency = fragment.companion_frequency;
        }
        if fragment.child_seat_passengers.is_some() {
            self.child_seat_passengers = fragment.child_seat_passengers;
        }
        if fragment.other_passengers.is_some() {
            self.other_passengers = fragment.other_passengers;
        }
    }

    pub fn children(&self) -> u32 {
        self.child_seat_passengers.unwrap_or(0)
    }

    pub fn others(&self) -> u32 {
        self.other_passengers.unwrap_or(0)
    }

    /// Companions excluding the driver.
    pub fn total_passengers(&self) -> u32 {
        self.children().saturating_add(self.others())
    }

    pub fn travels_frequently(&self) -> bool {
        self.usually_carries_companions.is_yes()
            && self.companion_frequency == Some(CompanionFrequency::Frequent)
    }

    pub fn travels_occasionally(&self) -> bool {
        self.usually_carries_companions.is_yes()
            && self.companion_frequency == Some(CompanionFrequency::Occasional)
    }

    pub fn is_empty(&self) -> bool {
        *self == PassengerInfo::default()
    }
}
