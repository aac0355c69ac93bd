//! Relative error metric.
//!
//! `|(h - g) / d|` in double precision, where `g` is the reference, `h` the
//! candidate, and `d` is `g` unless either operand is exactly zero, in which case
//! `d` is 1. Near the origin this degrades to an absolute error. It is not a true
//! relative error, but results stay comparable with earlier runs of the bench.

/// Returns the relative error of `candidate` against `reference`.
///
/// Two NaNs, or two infinities of any sign, score 0.0. Any other NaN operand
/// propagates into the result.
///
/// # Arguments
///
/// * `reference` - The golden value.
/// * `candidate` - The value produced by the unit under test.
///
/// # Returns
///
/// A non-negative error, `+Inf` when only the candidate is infinite, or NaN
/// when only the reference is infinite or exactly one operand is NaN.
pub fn relative_error(reference: f32, candidate: f32) -> f64 {
    let g = f64::from(reference);
    let h = f64::from(candidate);

    if (g.is_nan() && h.is_nan()) || (g.is_infinite() && h.is_infinite()) {
        return 0.0;
    }

    let denom = if g == 0.0 || h == 0.0 { 1.0 } else { g };
    ((h - g) / denom).abs()
}
