//! ULP distance between two single-precision values.
//!
//! Distances are measured on the raw encodings. Values of equal sign are ordered
//! by their bit patterns, so the distance is the difference of the patterns.
//! Values of opposite sign are routed through zero: the distance is the sum of
//! both magnitudes, i.e. the steps from one value down to zero plus the steps
//! from zero up to the other.
//!
//! | Reference | Candidate | Distance |
//! |-----------|-----------|----------|
//! | NaN       | NaN       | 0 (any payload) |
//! | ±Inf      | same Inf  | 0 |
//! | x         | y, x == y | 0 (includes `+0.0` vs `-0.0`) |
//! | sign(x) ≠ sign(y) |   | `mag(x) + mag(y)` |
//! | otherwise |           | `bits(x).abs_diff(bits(y))` |

use crate::common::bits::{f32_to_bits, is_negative, magnitude_bits};

/// Returns the ULP distance between `reference` and `candidate`.
///
/// The sign test reads the sign bit, so `-0.0` and negative NaNs count as
/// negative. The result is widened to `u64` so the sign-crossing sum cannot
/// overflow.
///
/// # Arguments
///
/// * `reference` - The golden value.
/// * `candidate` - The value produced by the unit under test.
///
/// # Returns
///
/// The number of representable steps between the two encodings, or 0 for the
/// equivalent special cases listed in the module table.
pub fn ulp_distance(reference: f32, candidate: f32) -> u64 {
    if reference.is_nan() && candidate.is_nan() {
        return 0;
    }
    if reference.is_infinite()
        && candidate.is_infinite()
        && is_negative(reference) == is_negative(candidate)
    {
        return 0;
    }
    // IEEE equality, so +0.0 and -0.0 collapse here even though their bits differ.
    if reference == candidate {
        return 0;
    }

    if is_negative(reference) != is_negative(candidate) {
        return u64::from(magnitude_bits(reference)) + u64::from(magnitude_bits(candidate));
    }

    u64::from(f32_to_bits(reference).abs_diff(f32_to_bits(candidate)))
}
