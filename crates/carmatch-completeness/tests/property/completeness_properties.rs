//! Property tests for carmatch-completeness: answering an open question never
//! makes a complete section incomplete, and the checks are pure.

use proptest::prelude::*;

use carmatch_completeness::{is_economics_complete, is_passenger_info_complete, is_profile_complete};
use carmatch_core::models::{AcquisitionMode, CompanionFrequency, EconomicsInfo, PassengerInfo};
use carmatch_core::profile::{
    GarageDimension, LongTripFrequency, ProfessionalUse, TriState, TripDistance,
    UserProfile,
};

fn tri_state() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Yes), Just(TriState::No), Just(TriState::Unknown)]
}

fn known() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Yes), Just(TriState::No)]
}

/// Every base question answered; branch answers and their follow-ups vary,
/// follow-ups possibly still open.
fn answered_profile() -> impl Strategy<Value = UserProfile> {
    (
        prop_oneof![
            Just(TripDistance::UnderTen),
            Just(TripDistance::TenToFifty),
            Just(TripDistance::FiftyToOneFifty),
            Just(TripDistance::OverOneFifty)
        ],
        known(),
        known(),
        known(),
        tri_state(),
        prop::option::of(prop_oneof![
            Just(LongTripFrequency::Frequent),
            Just(LongTripFrequency::Occasional),
            Just(LongTripFrequency::Sporadic)
        ]),
        prop::option::of(prop_oneof![
            Just(ProfessionalUse::Passengers),
            Just(ProfessionalUse::Cargo),
            Just(ProfessionalUse::Mixed)
        ]),
        tri_state(),
        tri_state(),
        prop::collection::vec(
            prop_oneof![
                Just(GarageDimension::Length),
                Just(GarageDimension::Width),
                Just(GarageDimension::Height)
            ],
            0..2,
        ),
        tri_state(),
    )
        .prop_map(
            |(
                distance,
                professional,
                bulky,
                garage,
                long_trips,
                long_trip_frequency,
                professional_type,
                special_space,
                spare_room,
                dimensions,
                street,
            )| UserProfile {
                trip_distance: Some(distance),
                professional_use: professional,
                carries_bulky_cargo: bulky,
                has_garage: garage,
                makes_long_trips: long_trips,
                long_trip_frequency,
                professional_use_type: professional_type,
                needs_special_object_space: special_space,
                garage_has_spare_room: spare_room,
                garage_problem_dimensions: dimensions,
                street_parking_problems: street,
                ..test_fixtures::profile("complete")
            },
        )
}

/// A fragment answering field `slot` of `profile`, if that field is still open.
fn fill_profile_field(profile: &UserProfile, slot: usize, yes: bool) -> Option<UserProfile> {
    let answer = TriState::from(yes);
    let mut fragment = UserProfile::default();
    match slot {
        0 if !profile.makes_long_trips.is_known() => fragment.makes_long_trips = answer,
        1 if profile.long_trip_frequency.is_none() => {
            fragment.long_trip_frequency = Some(LongTripFrequency::Occasional)
        }
        2 if profile.professional_use_type.is_none() => {
            fragment.professional_use_type = Some(ProfessionalUse::Cargo)
        }
        3 if !profile.needs_special_object_space.is_known() => {
            fragment.needs_special_object_space = answer
        }
        4 if !profile.garage_has_spare_room.is_known() => fragment.garage_has_spare_room = answer,
        5 if profile.garage_problem_dimensions.is_empty() => {
            fragment.garage_problem_dimensions = vec![GarageDimension::Height]
        }
        6 if !profile.street_parking_problems.is_known() => {
            fragment.street_parking_problems = answer
        }
        _ => return None,
    }
    Some(fragment)
}

fn fill_passenger_field(info: &PassengerInfo, slot: usize, yes: bool) -> Option<PassengerInfo> {
    let mut fragment = PassengerInfo::default();
    match slot {
        0 if !info.usually_carries_companions.is_known() => {
            fragment.usually_carries_companions = TriState::from(yes)
        }
        1 if info.companion_frequency.is_none() => {
            fragment.companion_frequency = Some(CompanionFrequency::Frequent)
        }
        2 if info.child_seat_passengers.is_none() => fragment.child_seat_passengers = Some(1),
        3 if info.other_passengers.is_none() => fragment.other_passengers = Some(2),
        _ => return None,
    }
    Some(fragment)
}

fn fill_economics_field(info: &EconomicsInfo, slot: usize, yes: bool) -> Option<EconomicsInfo> {
    let mut fragment = EconomicsInfo::default();
    match slot {
        0 if !info.budget_defined.is_known() => fragment.budget_defined = TriState::from(yes),
        1 if info.annual_income.is_none() => fragment.annual_income = Some(40_000.0),
        2 if info.savings.is_none() => fragment.savings = Some(10_000.0),
        3 if info.acquisition_mode.is_none() => {
            fragment.acquisition_mode = Some(if yes {
                AcquisitionMode::Cash
            } else {
                AcquisitionMode::Financed
            })
        }
        4 if info.cash_payment.is_none() => fragment.cash_payment = Some(25_000.0),
        5 if info.max_installment.is_none() => fragment.max_installment = Some(350.0),
        _ => return None,
    }
    Some(fragment)
}

fn passenger_info() -> impl Strategy<Value = PassengerInfo> {
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

fn economics_info() -> impl Strategy<Value = EconomicsInfo> {
    (
        tri_state(),
        prop::option::of(0.0f64..200_000.0),
        prop::option::of(0.0f64..100_000.0),
        prop::option::of(prop_oneof![Just(AcquisitionMode::Cash), Just(AcquisitionMode::Financed)]),
        prop::option::of(0.0f64..80_000.0),
        prop::option::of(0.0f64..2_000.0),
    )
        .prop_map(|(defined, income, savings, mode, cash, installment)| EconomicsInfo {
            budget_defined: defined,
            annual_income: income,
            savings,
            acquisition_mode: mode,
            cash_payment: cash,
            max_installment: installment,
        })
}

// Answering one more open question never reopens a complete section.
proptest! {
    #[test]
    fn filling_a_profile_field_keeps_it_complete(
        profile in answered_profile(),
        slot in 0usize..7,
        yes in any::<bool>(),
    ) {
        if is_profile_complete(&profile) {
            if let Some(fragment) = fill_profile_field(&profile, slot, yes) {
                let mut filled = profile.clone();
                filled.merge(fragment);
                prop_assert_ne!(&filled, &profile);
                prop_assert!(is_profile_complete(&filled), "{:?}", filled);
            }
        }
    }
}

proptest! {
    #[test]
    fn filling_a_passenger_field_keeps_it_complete(
        info in passenger_info(),
        slot in 0usize..4,
        yes in any::<bool>(),
    ) {
        if is_passenger_info_complete(&info) {
            if let Some(fragment) = fill_passenger_field(&info, slot, yes) {
                let mut filled = info.clone();
                filled.merge(fragment);
                prop_assert!(is_passenger_info_complete(&filled), "{:?}", filled);
            }
        }
    }
}

proptest! {
    #[test]
    fn filling_an_economics_field_keeps_it_complete(
        info in economics_info(),
        slot in 0usize..6,
        yes in any::<bool>(),
    ) {
        if is_economics_complete(&info) {
            if let Some(fragment) = fill_economics_field(&info, slot, yes) {
                let mut filled = info.clone();
                filled.merge(fragment);
                prop_assert!(is_economics_complete(&filled), "{:?}", filled);
            }
        }
    }
}

proptest! {
    #[test]
    fn passenger_check_is_deterministic(info in passenger_info()) {
        prop_assert_eq!(is_passenger_info_complete(&info), is_passenger_info_complete(&info.clone()));
    }
}

proptest! {
    #[test]
    fn passengers_alone_always_complete(info in passenger_info()) {
        let mut info = info;
        info.usually_carries_companions = TriState::No;
        prop_assert!(is_passenger_info_complete(&info));
    }
}

proptest! {
    #[test]
    fn merging_economics_never_loses_completeness(
        base in economics_info(),
        fragment in economics_info(),
    ) {
        let mut merged = base.clone();
        let was_complete = is_economics_complete(&base);
        let mut fragment = fragment;
        // Switching mode changes the question set; only add answers here.
        fragment.budget_defined = TriState::Unknown;
        fragment.acquisition_mode = None;
        merged.merge(fragment);
        if was_complete {
            prop_assert!(is_economics_complete(&merged));
        }
    }
}
