//! The read-only view flag predicates evaluate against.

use carmatch_core::config::FlagsConfig;
use carmatch_core::models::{ClimateInfo, CompanionFrequency, PassengerInfo};
use carmatch_core::profile::{
    AdventureLevel, LongTripFrequency, RatingKind, TripDistance, UserProfile,
};

/// Everything a flag predicate may look at. Derived flags are deliberately
/// absent.
#[derive(Debug, Clone, Copy)]
pub struct FlagInputs<'a> {
    pub profile: &'a UserProfile,
    pub climate: &'a ClimateInfo,
    pub passengers: &'a PassengerInfo,
    pub thresholds: &'a FlagsConfig,
}

impl<'a> FlagInputs<'a> {
    pub fn new(
        profile: &'a UserProfile,
        climate: &'a ClimateInfo,
        passengers: &'a PassengerInfo,
        thresholds: &'a FlagsConfig,
    ) -> Self {
        Self {
            profile,
            climate,
            passengers,
            thresholds,
        }
    }

    pub fn comfort_high(&self) -> bool {
        self.profile
            .rating_at_least(RatingKind::Comfort, self.thresholds.comfort_threshold)
    }

    pub fn technology_high(&self) -> bool {
        self.profile
            .rating_at_least(RatingKind::Technology, self.thresholds.technology_threshold)
    }

    pub fn environmental_high(&self) -> bool {
        self.profile.rating_at_least(
            RatingKind::EnvironmentalImpact,
            self.thresholds.environmental_threshold,
        )
    }

    pub fn usage_cost_high(&self) -> bool {
        self.profile
            .rating_at_least(RatingKind::UsageCost, self.thresholds.usage_cost_threshold)
    }

    /// Daily or frequent use.
    pub fn intensive_use(&self) -> bool {
        self.profile
            .usage_frequency
            .is_some_and(|f| f.is_intensive())
    }

    pub fn distance_is(&self, distance: TripDistance) -> bool {
        self.profile.trip_distance == Some(distance)
    }

    pub fn medium_distance(&self) -> bool {
        self.profile.trip_distance.is_some_and(|d| d.is_medium())
    }

    pub fn short_distance(&self) -> bool {
        self.profile.trip_distance.is_some_and(|d| d.is_short())
    }

    /// Long-trip frequency, only when the user said they make long trips.
    pub fn long_trips(&self) -> Option<LongTripFrequency> {
        if self.profile.makes_long_trips.is_yes() {
            self.profile.long_trip_frequency
        } else {
            None
        }
    }

    /// No long trips at all, or only sporadic ones.
    pub fn rare_long_trips(&self) -> bool {
        self.profile.makes_long_trips.is_no()
            || self.long_trips() == Some(LongTripFrequency::Sporadic)
    }

    pub fn adventure_is(&self, level: AdventureLevel) -> bool {
        self.profile.adventure == Some(level)
    }

    /// Never carries companions, or only occasionally with few others.
    ///
    /// Shared by the lifestyle and compact-urban body rules.
    pub fn low_passenger_load(&self) -> bool {
        let p = self.passengers;
        if p.usually_carries_companions.is_no() {
            return true;
        }
        p.usually_carries_companions.is_yes()
            && p.companion_frequency == Some(CompanionFrequency::Occasional)
            && p.others() <= self.thresholds.low_load_max_other_passengers
    }
}
