//! Property tests for carmatch-filters: idempotent backfill and the seat
//! count identity.

use proptest::prelude::*;

use carmatch_core::models::{ClimateInfo, CompanionFrequency, InferredFilters, PassengerInfo};
use carmatch_core::profile::{TriState, UserProfile};
use carmatch_filters::{apply_passenger_seats, compile_filters, restrict_to_electric};

fn tri_state() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Yes), Just(TriState::No), Just(TriState::Unknown)]
}

fn profile() -> impl Strategy<Value = UserProfile> {
    (tri_state(), tri_state(), tri_state(), tri_state()).prop_map(
        |(electric, aesthetics, enthusiast, exclusive)| UserProfile {
            electric_only: electric,
            values_aesthetics: aesthetics,
            motor_enthusiast: enthusiast,
            prefers_exclusive_design: exclusive,
            ..Default::default()
        },
    )
}

fn preset() -> impl Strategy<Value = InferredFilters> {
    (
        prop::option::of(0.0f64..10.0),
        prop::option::of(0.0f64..10.0),
        prop::option::of(0.0f64..10.0),
    )
        .prop_map(|(aesthetics, premium, singularity)| InferredFilters {
            min_aesthetics: aesthetics,
            min_premium: premium,
            min_singularity: singularity,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn backfill_is_idempotent(p in profile(), existing in preset()) {
        let climate = ClimateInfo::default();
        let once = compile_filters(Some(&existing), Some(&p), &climate);
        let twice = compile_filters(Some(&once), Some(&p), &climate);
        prop_assert_eq!(&once, &twice);

        let mut restricted = once.clone();
        restrict_to_electric(&mut restricted, Some(&p));
        let mut again = restricted.clone();
        restrict_to_electric(&mut again, Some(&p));
        prop_assert_eq!(restricted, again);
    }
}

proptest! {
    #[test]
    fn backfill_never_overwrites_preset(p in profile(), existing in preset()) {
        let compiled = compile_filters(Some(&existing), Some(&p), &ClimateInfo::default());
        if existing.min_aesthetics.is_some() {
            prop_assert_eq!(compiled.min_aesthetics, existing.min_aesthetics);
        }
        if existing.min_premium.is_some() {
            prop_assert_eq!(compiled.min_premium, existing.min_premium);
        }
        if existing.min_singularity.is_some() {
            prop_assert_eq!(compiled.min_singularity, existing.min_singularity);
        }
    }
}

proptest! {
    #[test]
    fn seat_count_is_children_plus_others_plus_driver(
        carries in tri_state(),
        children in prop::option::of(0u32..5),
        others in prop::option::of(0u32..8),
        preset_seats in prop::option::of(1u32..9),
    ) {
        let passengers = PassengerInfo {
            usually_carries_companions: carries,
            companion_frequency: Some(CompanionFrequency::Frequent),
            child_seat_passengers: children,
            other_passengers: others,
        };
        let mut filters = InferredFilters { min_seats: preset_seats, ..Default::default() };
        apply_passenger_seats(&mut filters, Some(&passengers));
        prop_assert_eq!(
            filters.min_seats,
            Some(children.unwrap_or(0) + others.unwrap_or(0) + 1)
        );
    }
}
