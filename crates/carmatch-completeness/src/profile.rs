//! Profile completeness: a fixed base list, then conditional sub-checks in
//! dependency order.

use carmatch_core::profile::{GarageDimension, TriState, TripDistance, UserProfile};
use serde::Serialize;

use crate::answered::Answered;

/// A profile question, named by its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProfileField {
    #[serde(rename = "solo_electricos")]
    ElectricOnly,
    #[serde(rename = "transmision_preferida")]
    PreferredTransmission,
    #[serde(rename = "valora_estetica")]
    ValuesAesthetics,
    #[serde(rename = "apasionado_motor")]
    MotorEnthusiast,
    #[serde(rename = "prefiere_diseno_exclusivo")]
    PrefersExclusiveDesign,
    #[serde(rename = "altura_mayor_190")]
    TallerThan190,
    #[serde(rename = "estilo_conduccion")]
    DrivingStyle,
    #[serde(rename = "aventura")]
    Adventure,
    #[serde(rename = "frecuencia_uso")]
    UsageFrequency,
    #[serde(rename = "distancia_trayecto")]
    TripDistance,
    #[serde(rename = "circula_principalmente_ciudad")]
    MostlyUrban,
    #[serde(rename = "uso_profesional")]
    ProfessionalUse,
    #[serde(rename = "transporta_carga_voluminosa")]
    CarriesBulkyCargo,
    #[serde(rename = "arrastra_remolque")]
    TowsTrailer,
    #[serde(rename = "prioriza_depreciacion")]
    PrioritizesDepreciation,
    #[serde(rename = "tiene_garage")]
    HasGarage,
    #[serde(rename = "rating_fiabilidad_durabilidad")]
    ReliabilityRating,
    #[serde(rename = "rating_seguridad")]
    SafetyRating,
    #[serde(rename = "rating_comodidad")]
    ComfortRating,
    #[serde(rename = "rating_impacto_ambiental")]
    EnvironmentalRating,
    #[serde(rename = "rating_costes_uso")]
    UsageCostRating,
    #[serde(rename = "rating_tecnologia_conectividad")]
    TechnologyRating,
    #[serde(rename = "realiza_viajes_largos")]
    MakesLongTrips,
    #[serde(rename = "frecuencia_viajes_largos")]
    LongTripFrequency,
    #[serde(rename = "tipo_uso_profesional")]
    ProfessionalUseType,
    #[serde(rename = "necesita_espacio_objetos_especiales")]
    NeedsSpecialObjectSpace,
    #[serde(rename = "espacio_sobra_garage")]
    GarageHasSpareRoom,
    #[serde(rename = "problemas_garage")]
    GarageProblemDimensions,
    #[serde(rename = "problemas_aparcar_calle")]
    StreetParkingProblems,
}

/// Base-required fields in the order the interview asks them.
fn base_fields(p: &UserProfile) -> [(ProfileField, bool); 22] {
    [
        (ProfileField::ElectricOnly, p.electric_only.answered()),
        (ProfileField::PreferredTransmission, p.preferred_transmission.answered()),
        (ProfileField::ValuesAesthetics, p.values_aesthetics.answered()),
        (ProfileField::MotorEnthusiast, p.motor_enthusiast.answered()),
        (ProfileField::PrefersExclusiveDesign, p.prefers_exclusive_design.answered()),
        (ProfileField::TallerThan190, p.taller_than_190.answered()),
        (ProfileField::DrivingStyle, p.driving_style.answered()),
        (ProfileField::Adventure, p.adventure.answered()),
        (ProfileField::UsageFrequency, p.usage_frequency.answered()),
        (ProfileField::TripDistance, p.trip_distance.answered()),
        (ProfileField::MostlyUrban, p.mostly_urban.answered()),
        (ProfileField::ProfessionalUse, p.professional_use.answered()),
        (ProfileField::CarriesBulkyCargo, p.carries_bulky_cargo.answered()),
        (ProfileField::TowsTrailer, p.tows_trailer.answered()),
        (ProfileField::PrioritizesDepreciation, p.prioritizes_depreciation.answered()),
        (ProfileField::HasGarage, p.has_garage.answered()),
        (ProfileField::ReliabilityRating, p.reliability_rating.answered()),
        (ProfileField::SafetyRating, p.safety_rating.answered()),
        (ProfileField::ComfortRating, p.comfort_rating.answered()),
        (ProfileField::EnvironmentalRating, p.environmental_rating.answered()),
        (ProfileField::UsageCostRating, p.usage_cost_rating.answered()),
        (ProfileField::TechnologyRating, p.technology_rating.answered()),
    ]
}

/// First unanswered question, or `None` when the profile is complete.
pub fn first_missing_profile_field(profile: &UserProfile) -> Option<ProfileField> {
    if let Some((field, _)) = base_fields(profile).into_iter().find(|(_, ok)| !ok) {
        return Some(field);
    }

    // (a) Long trips only matter when the regular trip is not already long.
    if profile.trip_distance != Some(TripDistance::OverOneFifty) {
        if !profile.makes_long_trips.answered() {
            return Some(ProfileField::MakesLongTrips);
        }
        if profile.makes_long_trips.is_yes() && !profile.long_trip_frequency.answered() {
            return Some(ProfileField::LongTripFrequency);
        }
    }

    // (b) Professional use type.
    if profile.professional_use.is_yes() && !profile.professional_use_type.answered() {
        return Some(ProfileField::ProfessionalUseType);
    }

    // (c) Special-object space.
    if profile.carries_bulky_cargo.is_yes() && !profile.needs_special_object_space.answered() {
        return Some(ProfileField::NeedsSpecialObjectSpace);
    }

    // (d) Garage branch.
    match profile.has_garage {
        TriState::Yes => {
            if !profile.garage_has_spare_room.answered() {
                return Some(ProfileField::GarageHasSpareRoom);
            }
            let has_dimension = profile
                .garage_problem_dimensions
                .iter()
                .any(|d| *d != GarageDimension::Unrecognized);
            if profile.garage_has_spare_room.is_no() && !has_dimension {
                return Some(ProfileField::GarageProblemDimensions);
            }
        }
        TriState::No => {
            if !profile.street_parking_problems.answered() {
                return Some(ProfileField::StreetParkingProblems);
            }
        }
        TriState::Unknown => return Some(ProfileField::HasGarage),
    }

    None
}

pub fn is_profile_complete(profile: &UserProfile) -> bool {
    first_missing_profile_field(profile).is_none()
}
