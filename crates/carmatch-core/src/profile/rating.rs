use serde::{Deserialize, Serialize};

use crate::constants::MAX_RATING;

/// A 0–10 preference rating. Construction rejects anything outside the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_RATING).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn at_least(self, threshold: u8) -> bool {
        self.0 >= threshold
    }

    /// Rating mapped onto [0.0, 1.0].
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / f64::from(MAX_RATING)
    }
}

impl TryFrom<f64> for Rating {
    type Error = String;

    /// Extractors sometimes emit `7.0` for `7`; whole-ish numbers are rounded.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(format!("rating must be finite, got {value}"));
        }
        let rounded = value.round();
        if !(0.0..=f64::from(MAX_RATING)).contains(&rounded) {
            return Err(format!("rating must be within 0..={MAX_RATING}, got {value}"));
        }
        Ok(Self(rounded as u8))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// The six independent rating questions of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingKind {
    Reliability,
    Safety,
    Comfort,
    EnvironmentalImpact,
    UsageCost,
    Technology,
}

impl RatingKind {
    pub const ALL: [RatingKind; 6] = [
        RatingKind::Reliability,
        RatingKind::Safety,
        RatingKind::Comfort,
        RatingKind::EnvironmentalImpact,
        RatingKind::UsageCost,
        RatingKind::Technology,
    ];
}
