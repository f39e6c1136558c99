//! What counts as "answered" for each field shape.

use carmatch_core::models::{AcquisitionMode, CompanionFrequency};
use carmatch_core::profile::{
    AdventureLevel, DrivingStyle, LongTripFrequency, ProfessionalUse, Rating, Transmission,
    TriState, TripDistance, UsageFrequency,
};

/// A field holds a usable answer. Unrecognized enum values do not count, so
/// the question is asked again.
pub(crate) trait Answered {
    fn answered(&self) -> bool;
}

impl Answered for TriState {
    fn answered(&self) -> bool {
        self.is_known()
    }
}

impl Answered for Rating {
    fn answered(&self) -> bool {
        true
    }
}

impl Answered for u32 {
    fn answered(&self) -> bool {
        true
    }
}

impl Answered for f64 {
    fn answered(&self) -> bool {
        self.is_finite()
    }
}

impl<T: Answered> Answered for Option<T> {
    fn answered(&self) -> bool {
        self.as_ref().is_some_and(Answered::answered)
    }
}

macro_rules! recognized_enum {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Answered for $ty {
                fn answered(&self) -> bool {
                    *self != <$ty>::Unrecognized
                }
            }
        )*
    };
}

recognized_enum!(
    AdventureLevel,
    DrivingStyle,
    Transmission,
    ProfessionalUse,
    UsageFrequency,
    TripDistance,
    LongTripFrequency,
    CompanionFrequency,
    AcquisitionMode,
);
