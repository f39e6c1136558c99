//! The user profile: every answer the interview collects about needs and
//! preferences. Pure data; rules live in the compiler crates.

mod enums;
mod rating;
mod tri_state;

pub use enums::{
    AdventureLevel, DrivingStyle, GarageDimension, LongTripFrequency, ProfessionalUse,
    Transmission, TripDistance, UsageFrequency,
};
pub use rating::{Rating, RatingKind};
pub use tri_state::TriState;

use serde::{Deserialize, Serialize};

/// Structured answers accumulated over the conversation.
///
/// Wire names are the keys the extraction schemas use. Created empty, then
/// grown with [`UserProfile::merge`] as extraction steps succeed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(rename = "solo_electricos")]
    pub electric_only: TriState,
    #[serde(rename = "transmision_preferida")]
    pub preferred_transmission: Option<Transmission>,
    #[serde(rename = "valora_estetica")]
    pub values_aesthetics: TriState,
    #[serde(rename = "apasionado_motor")]
    pub motor_enthusiast: TriState,
    #[serde(rename = "prefiere_diseno_exclusivo")]
    pub prefers_exclusive_design: TriState,
    #[serde(rename = "prioriza_depreciacion")]
    pub prioritizes_depreciation: TriState,
    #[serde(rename = "arrastra_remolque")]
    pub tows_trailer: TriState,
    #[serde(rename = "aventura")]
    pub adventure: Option<AdventureLevel>,
    #[serde(rename = "estilo_conduccion")]
    pub driving_style: Option<DrivingStyle>,
    #[serde(rename = "altura_mayor_190")]
    pub taller_than_190: TriState,
    #[serde(rename = "uso_profesional")]
    pub professional_use: TriState,
    #[serde(rename = "tipo_uso_profesional")]
    pub professional_use_type: Option<ProfessionalUse>,
    #[serde(rename = "transporta_carga_voluminosa")]
    pub carries_bulky_cargo: TriState,
    #[serde(rename = "necesita_espacio_objetos_especiales")]
    pub needs_special_object_space: TriState,
    #[serde(rename = "circula_principalmente_ciudad")]
    pub mostly_urban: TriState,
    #[serde(rename = "tiene_garage")]
    pub has_garage: TriState,
    #[serde(rename = "espacio_sobra_garage")]
    pub garage_has_spare_room: TriState,
    #[serde(rename = "problemas_garage")]
    pub garage_problem_dimensions: Vec<GarageDimension>,
    #[serde(rename = "problemas_aparcar_calle")]
    pub street_parking_problems: TriState,
    #[serde(rename = "frecuencia_uso")]
    pub usage_frequency: Option<UsageFrequency>,
    #[serde(rename = "distancia_trayecto")]
    pub trip_distance: Option<TripDistance>,
    #[serde(rename = "realiza_viajes_largos")]
    pub makes_long_trips: TriState,
    #[serde(rename = "frecuencia_viajes_largos")]
    pub long_trip_frequency: Option<LongTripFrequency>,
    #[serde(rename = "rating_fiabilidad_durabilidad")]
    pub reliability_rating: Option<Rating>,
    #[serde(rename = "rating_seguridad")]
    pub safety_rating: Option<Rating>,
    #[serde(rename = "rating_comodidad")]
    pub comfort_rating: Option<Rating>,
    #[serde(rename = "rating_impacto_ambiental")]
    pub environmental_rating: Option<Rating>,
    #[serde(rename = "rating_costes_uso")]
    pub usage_cost_rating: Option<Rating>,
    #[serde(rename = "rating_tecnologia_conectividad")]
    pub technology_rating: Option<Rating>,
}

macro_rules! merge_fields {
    ($dst:ident, $src:ident; tri: [$($tri:ident),* $(,)?]; opt: [$($opt:ident),* $(,)?]) => {
        $(
            if $src.$tri.is_known() {
                $dst.$tri = $src.$tri;
            }
        )*
        $(
            if $src.$opt.is_some() {
                $dst.$opt = $src.$opt;
            }
        )*
    };
}

impl UserProfile {
    /// Upsert every field `fragment` sets. Unset fields never clobber.
    pub fn merge(&mut self, fragment: UserProfile) {
        let dst = self;
        merge_fields!(dst, fragment;
            tri: [
                electric_only,
                values_aesthetics,
                motor_enthusiast,
                prefers_exclusive_design,
                prioritizes_depreciation,
                tows_trailer,
                taller_than_190,
                professional_use,
                carries_bulky_cargo,
                needs_special_object_space,
                mostly_urban,
                has_garage,
                garage_has_spare_room,
                street_parking_problems,
                makes_long_trips,
            ];
            opt: [
                preferred_transmission,
                adventure,
                driving_style,
                professional_use_type,
                usage_frequency,
                trip_distance,
                long_trip_frequency,
                reliability_rating,
                safety_rating,
                comfort_rating,
                environmental_rating,
                usage_cost_rating,
                technology_rating,
            ]
        );
        if !fragment.garage_problem_dimensions.is_empty() {
            dst.garage_problem_dimensions = fragment.garage_problem_dimensions;
        }
    }

    /// Look up one of the six ratings.
    pub fn rating(&self, kind: RatingKind) -> Option<Rating> {
        match kind {
            RatingKind::Reliability => self.reliability_rating,
            RatingKind::Safety => self.safety_rating,
            RatingKind::Comfort => self.comfort_rating,
            RatingKind::EnvironmentalImpact => self.environmental_rating,
            RatingKind::UsageCost => self.usage_cost_rating,
            RatingKind::Technology => self.technology_rating,
        }
    }

    /// Rating at or above `threshold`. Missing ratings never qualify.
    pub fn rating_at_least(&self, kind: RatingKind, threshold: u8) -> bool {
        self.rating(kind).is_some_and(|r| r.at_least(threshold))
    }

    pub fn has_garage_problem(&self, dimension: GarageDimension) -> bool {
        self.garage_problem_dimensions.contains(&dimension)
    }

    pub fn is_empty(&self) -> bool {
        *self == UserProfile::default()
    }
}
