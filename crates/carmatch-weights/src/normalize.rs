//! Projection of raw weights onto the simplex.

use carmatch_core::dimension::WeightVector;

fn usable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Divide every weight by the total so the result sums to 1.
///
/// Non-finite and negative entries count as zero and come back as `0.0`.
/// An all-zero input uses a divisor of 1.0 and returns all zeros.
pub fn normalize(raw: &WeightVector) -> WeightVector {
    let sum: f64 = raw.values().copied().map(usable).sum();
    let divisor = if sum > 0.0 { sum } else { 1.0 };
    raw.iter()
        .map(|(dimension, value)| (*dimension, usable(*value) / divisor))
        .collect()
}
