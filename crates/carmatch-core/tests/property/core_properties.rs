//! Property tests for carmatch-core: rating bounds and upsert merges.

use proptest::prelude::*;

use carmatch_core::models::{AcquisitionMode, EconomicsInfo};
use carmatch_core::profile::{DrivingStyle, GarageDimension, Rating, TriState, UserProfile};

fn tri_state() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Yes), Just(TriState::No), Just(TriState::Unknown)]
}

fn rating() -> impl Strategy<Value = Option<Rating>> {
    prop::option::of((0u8..=10).prop_filter_map("in range", Rating::new))
}

fn profile() -> impl Strategy<Value = UserProfile> {
    (
        tri_state(),
        tri_state(),
        tri_state(),
        prop::option::of(prop_oneof![
            Just(DrivingStyle::Calm),
            Just(DrivingStyle::Sporty),
            Just(DrivingStyle::Mixed)
        ]),
        rating(),
        rating(),
        prop::collection::vec(
            prop_oneof![
                Just(GarageDimension::Length),
                Just(GarageDimension::Width),
                Just(GarageDimension::Height)
            ],
            0..3,
        ),
    )
        .prop_map(|(electric, garage, urban, style, safety, comfort, dims)| UserProfile {
            electric_only: electric,
            has_garage: garage,
            mostly_urban: urban,
            driving_style: style,
            safety_rating: safety,
            comfort_rating: comfort,
            garage_problem_dimensions: dims,
            ..Default::default()
        })
}

fn economics() -> impl Strategy<Value = EconomicsInfo> {
    (
        tri_state(),
        prop::option::of(0.0f64..200_000.0),
        prop::option::of(prop_oneof![Just(AcquisitionMode::Cash), Just(AcquisitionMode::Financed)]),
        prop::option::of(0.0f64..80_000.0),
    )
        .prop_map(|(defined, income, mode, cash)| EconomicsInfo {
            budget_defined: defined,
            annual_income: income,
            acquisition_mode: mode,
            cash_payment: cash,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn rating_conversion_stays_in_range(value in -50.0f64..50.0) {
        match Rating::try_from(value) {
            Ok(r) => {
                prop_assert!(r.value() <= 10);
                prop_assert_eq!(f64::from(r.value()), value.round());
            }
            Err(_) => prop_assert!(!(0.0..=10.0).contains(&value.round())),
        }
    }
}

proptest! {
    #[test]
    fn merging_an_empty_fragment_changes_nothing(p in profile()) {
        let mut merged = p.clone();
        merged.merge(UserProfile::default());
        prop_assert_eq!(merged, p);
    }
}

proptest! {
    #[test]
    fn profile_merge_is_idempotent(base in profile(), fragment in profile()) {
        let mut once = base.clone();
        once.merge(fragment.clone());
        let mut twice = once.clone();
        twice.merge(fragment);
        prop_assert_eq!(once, twice);
    }
}

proptest! {
    #[test]
    fn merge_never_forgets_an_answer(base in profile(), fragment in profile()) {
        let mut merged = base.clone();
        merged.merge(fragment.clone());
        if base.electric_only.is_known() {
            prop_assert!(merged.electric_only.is_known());
        }
        if base.has_garage.is_known() {
            prop_assert!(merged.has_garage.is_known());
        }
        if base.safety_rating.is_some() {
            prop_assert!(merged.safety_rating.is_some());
        }
        if fragment.comfort_rating.is_some() {
            prop_assert_eq!(merged.comfort_rating, fragment.comfort_rating);
        }
    }
}

proptest! {
    #[test]
    fn economics_merge_keeps_unset_fields(base in economics(), fragment in economics()) {
        let mut merged = base.clone();
        merged.merge(fragment.clone());
        prop_assert_eq!(merged.annual_income, fragment.annual_income.or(base.annual_income));
        prop_assert_eq!(merged.cash_payment, fragment.cash_payment.or(base.cash_payment));
        prop_assert_eq!(merged.savings, base.savings);
    }
}
