//! Body size and interior space: stature, passengers, cargo, parking.

use carmatch_core::dimension::Dimension;
use carmatch_core::profile::GarageDimension;

use super::WeightRule;

pub(super) fn rules() -> Vec<WeightRule> {
    vec![
        WeightRule::fixed(
            "tall_driver",
            |i| i.profile.taller_than_190.is_yes(),
            &[(Dimension::Wheelbase, 2.0), (Dimension::InteriorHeight, 2.5)],
        ),
        // The two passenger tiers are exclusive by companion frequency.
        WeightRule::fixed(
            "frequent_passengers",
            |i| i.passengers.travels_frequently() && i.passengers.others() >= 2,
            &[(Dimension::Width, 2.0)],
        ),
        WeightRule::fixed(
            "occasional_passengers",
            |i| i.passengers.travels_occasionally() && i.passengers.total_passengers() >= 2,
            &[(Dimension::Width, 1.5)],
        ),
        WeightRule::fixed(
            "bulky_cargo",
            |i| i.profile.carries_bulky_cargo.is_yes(),
            &[(Dimension::MinTrunk, 2.0), (Dimension::MaxTrunk, 2.5)],
        ),
        WeightRule::fixed(
            "special_objects",
            |i| {
                i.profile.carries_bulky_cargo.is_yes()
                    && i.profile.needs_special_object_space.is_yes()
            },
            &[
                (Dimension::MaxTrunk, 1.5),
                (Dimension::Width, 1.3),
                (Dimension::Length, 1.5),
            ],
        ),
        WeightRule::fixed(
            "urban_driving",
            |i| i.profile.mostly_urban.is_yes(),
            &[(Dimension::TurningDiameter, 2.0)],
        ),
        WeightRule::fixed(
            "street_parking",
            |i| i.profile.has_garage.is_no() && i.profile.street_parking_problems.is_yes(),
            &[(Dimension::Footprint, 3.0)],
        ),
        WeightRule::fixed(
            "tight_garage",
            |i| i.tight_garage(),
            &[(Dimension::TurningDiameter, 1.5)],
        ),
        WeightRule::fixed(
            "tight_garage_length",
            |i| i.tight_garage() && i.profile.has_garage_problem(GarageDimension::Length),
            &[(Dimension::CompactLength, 2.5)],
        ),
        WeightRule::fixed(
            "tight_garage_width",
            |i| i.tight_garage() && i.profile.has_garage_problem(GarageDimension::Width),
            &[(Dimension::CompactWidth, 2.5)],
        ),
        WeightRule::fixed(
            "tight_garage_height",
            |i| i.tight_garage() && i.profile.has_garage_problem(GarageDimension::Height),
            &[(Dimension::CompactHeight, 2.5)],
        ),
    ]
}
