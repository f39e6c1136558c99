//! Property tests for carmatch-flags: determinism, completeness of the flag
//! set, and row independence.

use proptest::prelude::*;

use carmatch_core::config::FlagsConfig;
use carmatch_core::flags::Flag;
use carmatch_core::models::{ClimateInfo, PassengerInfo};
use carmatch_core::profile::{
    AdventureLevel, DrivingStyle, Rating, TriState, TripDistance, UsageFrequency, UserProfile,
};
use carmatch_flags::rules::standard_definitions;
use carmatch_flags::{derive_flags, FlagInputs, FlagTable};

fn tri_state() -> impl Strategy<Value = TriState> {
    prop_oneof![Just(TriState::Yes), Just(TriState::No), Just(TriState::Unknown)]
}

fn rating() -> impl Strategy<Value = Option<Rating>> {
    prop::option::of((0u8..=10).prop_filter_map("in range", Rating::new))
}

fn profile() -> impl Strategy<Value = UserProfile> {
    (
        prop::option::of(prop_oneof![
            Just(AdventureLevel::None),
            Just(AdventureLevel::Occasional),
            Just(AdventureLevel::Extreme),
            Just(AdventureLevel::Unrecognized),
        ]),
        prop::option::of(prop_oneof![
            Just(DrivingStyle::Calm),
            Just(DrivingStyle::Sporty),
            Just(DrivingStyle::Mixed),
        ]),
        prop::option::of(prop_oneof![
            Just(UsageFrequency::Daily),
            Just(UsageFrequency::Frequent),
            Just(UsageFrequency::Occasional),
        ]),
        prop::option::of(prop_oneof![
            Just(TripDistance::UnderTen),
            Just(TripDistance::TenToFifty),
            Just(TripDistance::FiftyToOneFifty),
            Just(TripDistance::OverOneFifty),
        ]),
        (tri_state(), tri_state(), tri_state()),
        (rating(), rating(), rating()),
    )
        .prop_map(
            |(adventure, style, frequency, distance, (urban, garage, tall), (comfort, env, cost))| {
                UserProfile {
                    adventure,
                    driving_style: style,
                    usage_frequency: frequency,
                    trip_distance: distance,
                    mostly_urban: urban,
                    has_garage: garage,
                    taller_than_190: tall,
                    comfort_rating: comfort,
                    environmental_rating: env,
                    usage_cost_rating: cost,
                    ..Default::default()
                }
            },
        )
}

fn climate() -> impl Strategy<Value = ClimateInfo> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(zbe, snow, mountain, lpg, resolved)| ClimateInfo {
            low_emission_zone: zbe,
            snow_zone: snow,
            mountain_zone: mountain,
            lpg_zone: lpg,
            postal_code_resolved: resolved,
            ..Default::default()
        },
    )
}

proptest! {
    #[test]
    fn derivation_is_deterministic(p in profile(), c in climate()) {
        let passengers = PassengerInfo::default();
        let a = derive_flags(Some(&p), &c, &passengers);
        let b = derive_flags(Some(&p), &c, &passengers);
        prop_assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn every_flag_present_with_declared_kind(p in profile(), c in climate()) {
        let flags = derive_flags(Some(&p), &c, &PassengerInfo::default());
        prop_assert_eq!(flags.iter().count(), Flag::ALL.len());
        for (flag, value) in flags.iter() {
            prop_assert_eq!(value.kind(), flag.kind());
        }
    }
}

// Evaluating the table in reverse yields the same flags: rows never read
// each other's output.
proptest! {
    #[test]
    fn row_order_does_not_matter(p in profile(), c in climate()) {
        let config = FlagsConfig::default();
        let passengers = PassengerInfo::default();
        let inputs = FlagInputs::new(&p, &c, &passengers, &config);

        let forward = FlagTable::new(standard_definitions()).unwrap();
        let mut reversed_defs = standard_definitions();
        reversed_defs.reverse();
        let reversed = FlagTable::new(reversed_defs).unwrap();

        prop_assert_eq!(forward.evaluate(&inputs), reversed.evaluate(&inputs));
    }
}
