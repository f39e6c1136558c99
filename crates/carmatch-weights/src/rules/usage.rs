//! How and where the vehicle is driven: towing, mileage, terrain, fog.

use carmatch_core::dimension::Dimension;
use carmatch_core::profile::AdventureLevel;

use super::WeightRule;

pub(super) fn rules() -> Vec<WeightRule> {
    vec![
        WeightRule::fixed(
            "tows_trailer",
            |i| i.profile.tows_trailer.is_yes(),
            &[
                (Dimension::TowingBraked, 4.0),
                (Dimension::TowingUnbraked, 4.0),
                (Dimension::Torque, 2.0),
            ],
        ),
        WeightRule::fixed(
            "very_high_mileage",
            |i| i.very_high_mileage(),
            &[
                (Dimension::ElectricRange, 2.0),
                (Dimension::TotalRange, 2.0),
                (Dimension::DcChargePower, 2.0),
                (Dimension::AcChargePower, 1.5),
            ],
        ),
        WeightRule::fixed(
            "adventure_occasional",
            |i| i.profile.adventure == Some(AdventureLevel::Occasional),
            &[(Dimension::GroundClearance, 2.0)],
        ),
        WeightRule::fixed(
            "adventure_extreme",
            |i| i.profile.adventure == Some(AdventureLevel::Extreme),
            &[(Dimension::GroundClearance, 4.0), (Dimension::ApproachAngle, 3.0)],
        ),
        WeightRule::fixed("fog_zone", |i| i.is_fog_zone, &[(Dimension::Safety, 1.3)]),
    ]
}
