//! Rough annual mileage from the usage answers.

use carmatch_core::profile::{LongTripFrequency, TripDistance, UsageFrequency, UserProfile};

const LONG_TRIP_KM: f64 = 500.0;

fn trip_km(distance: TripDistance) -> f64 {
    match distance {
        TripDistance::UnderTen => 7.0,
        TripDistance::TenToFifty => 30.0,
        TripDistance::FiftyToOneFifty => 100.0,
        TripDistance::OverOneFifty => 200.0,
        TripDistance::Unrecognized => 0.0,
    }
}

fn trips_per_year(frequency: UsageFrequency) -> f64 {
    match frequency {
        // Two legs a day on ~220 working days.
        UsageFrequency::Daily => 440.0,
        UsageFrequency::Frequent => 200.0,
        UsageFrequency::Occasional => 50.0,
        UsageFrequency::Unrecognized => 0.0,
    }
}

fn long_trips_per_year(frequency: LongTripFrequency) -> f64 {
    match frequency {
        LongTripFrequency::Frequent => 24.0,
        LongTripFrequency::Occasional => 8.0,
        LongTripFrequency::Sporadic => 2.0,
        LongTripFrequency::Unrecognized => 0.0,
    }
}

/// Regular trips plus long trips, in kilometres per year. Unanswered
/// questions contribute nothing.
pub fn estimate_annual_km(profile: &UserProfile) -> f64 {
    let regular = match (profile.trip_distance, profile.usage_frequency) {
        (Some(distance), Some(frequency)) => trip_km(distance) * trips_per_year(frequency),
        _ => 0.0,
    };
    let long = if profile.makes_long_trips.is_yes() {
        profile
            .long_trip_frequency
            .map_or(0.0, |f| long_trips_per_year(f) * LONG_TRIP_KM)
    } else {
        0.0
    };
    regular + long
}
