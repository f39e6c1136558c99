use serde::{Deserialize, Serialize};

/// Magnitudes of the flag-gated bonus and penalty terms.
///
/// All values are positive; penalties are subtracted. Terms that share a name
/// across rule families (the eco-label bonus inside and outside a
/// low-emission zone, for instance) are configured independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentsConfig {
    pub low_cost_comfort_penalty: f64,
    pub sporty_comfort_penalty: f64,
    pub old_vehicle_penalty: f64,
    pub high_consumption_penalty: f64,
    pub eco_label_bonus: f64,
    pub eco_label_zone_bonus: f64,
    pub no_label_penalty: f64,
    pub no_label_zone_penalty: f64,
    pub awd_climate_bonus: f64,
    pub awd_occasional_bonus: f64,
    pub awd_extreme_bonus: f64,
    pub awd_penalty: f64,
    pub low_range_occasional_bonus: f64,
    pub low_range_extreme_bonus: f64,
    pub bev_bonus: f64,
    pub bev_penalty: f64,
    pub reev_bonus: f64,
    pub reev_penalty: f64,
    pub phev_bonus: f64,
    pub phev_penalty: f64,
    pub diesel_urban_penalty: f64,
    pub diesel_long_distance_bonus: f64,
    pub hybrid_urban_bonus: f64,
    pub suv_mountain_bonus: f64,
    pub commercial_bonus: f64,
    pub sedan_minivan_bonus: f64,
    pub suv_adventure_bonus: f64,
    pub pickup_offroad_bonus: f64,
    pub pickup_offroad_penalty: f64,
    pub lifestyle_bonus: f64,
    pub compact_urban_bonus: f64,
    pub two_door_children_penalty: f64,
    pub low_body_tall_penalty: f64,
    pub wagon_cargo_bonus: f64,
    pub manual_penalty: f64,
    pub automatic_penalty: f64,
    pub calm_sporty_penalty: f64,
    pub lpg_bonus: f64,
    pub cng_bonus: f64,
    pub lpg_unavailable_penalty: f64,
    pub cng_unavailable_penalty: f64,
    pub bev_no_home_charging_penalty: f64,
}

impl Default for AdjustmentsConfig {
    fn default() -> Self {
        Self {
            low_cost_comfort_penalty: 0.05,
            sporty_comfort_penalty: 0.03,
            old_vehicle_penalty: 0.05,
            high_consumption_penalty: 0.03,
            eco_label_bonus: 0.04,
            eco_label_zone_bonus: 0.10,
            no_label_penalty: 0.05,
            no_label_zone_penalty: 0.12,
            awd_climate_bonus: 0.05,
            awd_occasional_bonus: 0.03,
            awd_extreme_bonus: 0.08,
            awd_penalty: 0.04,
            low_range_occasional_bonus: 0.02,
            low_range_extreme_bonus: 0.06,
            bev_bonus: 0.06,
            bev_penalty: 0.06,
            reev_bonus: 0.04,
            reev_penalty: 0.04,
            phev_bonus: 0.04,
            phev_penalty: 0.05,
            diesel_urban_penalty: 0.06,
            diesel_long_distance_bonus: 0.03,
            hybrid_urban_bonus: 0.04,
            suv_mountain_bonus: 0.04,
            commercial_bonus: 0.05,
            sedan_minivan_bonus: 0.04,
            suv_adventure_bonus: 0.03,
            pickup_offroad_bonus: 0.05,
            pickup_offroad_penalty: 0.05,
            lifestyle_bonus: 0.03,
            compact_urban_bonus: 0.03,
            two_door_children_penalty: 0.06,
            low_body_tall_penalty: 0.03,
            wagon_cargo_bonus: 0.03,
            manual_penalty: 0.08,
            automatic_penalty: 0.04,
            calm_sporty_penalty: 0.02,
            lpg_bonus: 0.03,
            cng_bonus: 0.03,
            lpg_unavailable_penalty: 0.04,
            cng_unavailable_penalty: 0.04,
            bev_no_home_charging_penalty: 0.05,
        }
    }
}
