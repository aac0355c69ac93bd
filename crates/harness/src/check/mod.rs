//! Floating-point equivalence checking.
//!
//! Grades a candidate value produced by the unit under test against a golden
//! reference. It provides:
//! - [`ulp`]: Bit-level ULP distance with explicit NaN, infinity, and sign-crossing rules.
//! - [`relative`]: The bench's relative error metric (denominator forced to 1 near zero).
//! - [`Thresholds`] and [`Verdict`]: Pass/fail classification of a [`Comparison`].
//!
//! All functions are pure.

/// Relative error metric.
pub mod relative;

/// ULP distance metric.
pub mod ulp;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_ERROR_THRESHOLD, DEFAULT_ULP_THRESHOLD};

pub use relative::relative_error;
pub use ulp::ulp_distance;

/// Deviation of a candidate from its reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Relative error as computed by [`relative_error`].
    pub relative_error: f64,
    /// Distance in units in the last place as computed by [`ulp_distance`].
    pub ulp_distance: u64,
}

/// Outcome of classifying one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The candidate is acceptably close to the reference.
    Pass,
    /// The candidate deviates beyond at least one threshold.
    Fail,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Pass`].
    #[inline]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Acceptance thresholds for the equivalence checker.
///
/// A sample passes when its relative error is strictly below `error` and its ULP
/// distance is at most `ulp`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Thresholds {
    /// Exclusive upper bound on relative error.
    #[serde(default = "Thresholds::default_error")]
    pub error: f64,
    /// Inclusive upper bound on ULP distance.
    #[serde(default = "Thresholds::default_ulp")]
    pub ulp: u64,
}

impl Thresholds {
    /// Creates thresholds from an error bound and a ULP bound.
    pub const fn new(error: f64, ulp: u64) -> Self {
        Self { error, ulp }
    }

    const fn default_error() -> f64 {
        DEFAULT_ERROR_THRESHOLD
    }

    const fn default_ulp() -> u64 {
        DEFAULT_ULP_THRESHOLD
    }

    /// Classifies a comparison of `candidate` against `reference`.
    ///
    /// Two NaNs always pass, and so do two infinities of either sign. The ULP
    /// metric is stricter here: opposite infinities report a large distance, but
    /// the verdict ignores it.
    ///
    /// # Arguments
    ///
    /// * `reference` - The golden value.
    /// * `candidate` - The value produced by the unit under test.
    /// * `cmp` - The comparison previously computed for this pair.
    pub fn classify(self, reference: f32, candidate: f32, cmp: Comparison) -> Verdict {
        if (reference.is_nan() && candidate.is_nan())
            || (reference.is_infinite() && candidate.is_infinite())
        {
            return Verdict::Pass;
        }
        if cmp.relative_error < self.error && cmp.ulp_distance <= self.ulp {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_THRESHOLD, DEFAULT_ULP_THRESHOLD)
    }
}

/// Compares a candidate against a reference value.
///
/// # Arguments
///
/// * `reference` - The golden value.
/// * `candidate` - The value produced by the unit under test.
///
/// # Returns
///
/// The relative error and ULP distance of the pair.
///
/// # Examples
///
/// ```
/// use tanhsim_core::check::{compare, Thresholds, Verdict};
///
/// let one_up = f32::from_bits(1.0_f32.to_bits() + 1);
/// let cmp = compare(1.0, one_up);
/// assert_eq!(cmp.ulp_distance, 1);
/// assert_eq!(Thresholds::default().classify(1.0, one_up, cmp), Verdict::Pass);
/// ```
pub fn compare(reference: f32, candidate: f32) -> Comparison {
    Comparison {
        relative_error: relative_error(reference, candidate),
        ulp_distance: ulp_distance(reference, candidate),
    }
}
