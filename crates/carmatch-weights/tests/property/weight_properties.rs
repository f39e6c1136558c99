//! Property tests for carmatch-weights: normalization sums to one, raw weights
//! stay within bounds, compilation is deterministic.

use proptest::prelude::*;

use carmatch_core::config::WeightsConfig;
use carmatch_core::constants::NORMALIZATION_TOLERANCE;
use carmatch_core::dimension::{Dimension, WeightVector};
use carmatch_core::models::{CompanionFrequency, PassengerInfo};
use carmatch_core::profile::{
    AdventureLevel, DrivingStyle, GarageDimension, Rating, TriState, UserProfile,
};
use carmatch_weights::{normalize, BaseWeightCache, WeightCompiler};

fn tri_state() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Yes), Just(TriState::No), Just(TriState::Unknown)]
}

fn rating() -> impl Strategy<Value = Option<Rating>> {
    prop::option::of((0u8..=10).prop_filter_map("in range", Rating::new))
}

fn weight_vector() -> impl Strategy<Value = WeightVector> {
    prop::collection::vec(0.0f64..1_000.0, Dimension::ALL.len()).prop_map(|values| {
        Dimension::ALL.iter().copied().zip(values).collect()
    })
}

fn profile() -> impl Strategy<Value = UserProfile> {
    (
        (tri_state(), tri_state(), tri_state(), tri_state(), tri_state()),
        (tri_state(), tri_state(), tri_state(), tri_state(), tri_state()),
        prop::option::of(prop_oneof![
            Just(AdventureLevel::None),
            Just(AdventureLevel::Occasional),
            Just(AdventureLevel::Extreme),
        ]),
        prop::option::of(prop_oneof![
            Just(DrivingStyle::Calm),
            Just(DrivingStyle::Sporty),
            Just(DrivingStyle::Mixed),
        ]),
        prop::collection::vec(
            prop_oneof![
                Just(GarageDimension::Length),
                Just(GarageDimension::Width),
                Just(GarageDimension::Height),
            ],
            0..3,
        ),
        (rating(), rating(), rating()),
    )
        .prop_map(
            |(
                (aesthetics, enthusiast, exclusive, depreciation, trailer),
                (tall, cargo, special, urban, garage),
                adventure,
                style,
                problems,
                (safety, comfort, tech),
            )| UserProfile {
                values_aesthetics: aesthetics,
                motor_enthusiast: enthusiast,
                prefers_exclusive_design: exclusive,
                prioritizes_depreciation: depreciation,
                tows_trailer: trailer,
                taller_than_190: tall,
                carries_bulky_cargo: cargo,
                needs_special_object_space: special,
                mostly_urban: urban,
                has_garage: garage,
                garage_has_spare_room: TriState::No,
                street_parking_problems: TriState::Yes,
                garage_problem_dimensions: problems,
                adventure,
                driving_style: style,
                safety_rating: safety,
                comfort_rating: comfort,
                technology_rating: tech,
                ..Default::default()
            },
        )
}

fn passengers() -> impl Strategy<Value = PassengerInfo> {
    (
        tri_state(),
        prop::option::of(prop_oneof![
            Just(CompanionFrequency::Occasional),
            Just(CompanionFrequency::Frequent)
        ]),
        prop::option::of(0u32..4),
        prop::option::of(0u32..6),
    )
        .prop_map(|(carries, frequency, children, others)| PassengerInfo {
            usually_carries_companions: carries,
            companion_frequency: frequency,
            child_seat_passengers: children,
            other_passengers: others,
        })
}

proptest! {
    #[test]
    fn normalized_weights_sum_to_one(raw in weight_vector()) {
        let normalized = normalize(&raw);
        prop_assert_eq!(normalized.len(), raw.len());
        prop_assert!(normalized.values().all(|v| *v >= 0.0 && v.is_finite()));
        if raw.values().any(|v| *v > 0.0) {
            let sum: f64 = normalized.values().sum();
            prop_assert!((sum - 1.0).abs() < NORMALIZATION_TOLERANCE, "sum = {}", sum);
        }
    }
}

proptest! {
    #[test]
    fn raw_weights_within_bounds(
        p in profile(),
        pass in passengers(),
        fog in any::<bool>(),
        km in 0.0f64..200_000.0,
    ) {
        let config = WeightsConfig::default();
        let ceiling = config.max_raw_weight;
        let cache = BaseWeightCache::from_config(&config);
        let compiler = WeightCompiler::new(config, &cache).unwrap();
        let raw = compiler.compute_raw_weights(Some(&p), &pass, fog, km);
        prop_assert_eq!(raw.len(), Dimension::ALL.len());
        for (dimension, weight) in &raw {
            prop_assert!(
                (0.0..=ceiling).contains(weight),
                "{} = {}", dimension, weight
            );
        }
    }
}

proptest! {
    #[test]
    fn compilation_is_deterministic(
        p in profile(),
        pass in passengers(),
        fog in any::<bool>(),
        km in 0.0f64..200_000.0,
    ) {
        let config = WeightsConfig::default();
        let compiler =
            WeightCompiler::new(config.clone(), &BaseWeightCache::from_config(&config)).unwrap();
        let a = compiler.compute_raw_weights(Some(&p), &pass, fog, km);
        let b = compiler.compute_raw_weights(Some(&p), &pass, fog, km);
        prop_assert_eq!(a, b);
    }
}
