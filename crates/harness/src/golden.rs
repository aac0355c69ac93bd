//! Golden-model oracles.
//!
//! The harness grades the unit against an independent reference computed in
//! software. Any oracle producing one reference per input, in input order, can
//! implement [`GoldenModel`]; a batch oracle backed by an accelerator overrides
//! [`GoldenModel::reference_batch`].
//!
//! Also provides the fixed edge-case vector set run before random sweeps.

use std::f32::consts::{E, LN_2, LN_10, PI};

/// Reference implementation of the function under test.
pub trait GoldenModel {
    /// Short name for logs and reports (e.g. `"libm tanhf"`).
    fn name(&self) -> &str;

    /// Computes the reference value for one input.
    fn reference(&self, x: f32) -> f32;

    /// Appends the reference of every input to `out`, in input order.
    fn reference_batch(&self, inputs: &[f32], out: &mut Vec<f32>) {
        out.extend(inputs.iter().map(|&x| self.reference(x)));
    }
}

/// The platform math library's single-precision `tanh`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibmTanh;

impl GoldenModel for LibmTanh {
    fn name(&self) -> &str {
        "libm tanhf"
    }

    #[inline]
    fn reference(&self, x: f32) -> f32 {
        x.tanh()
    }
}

/// Any `Fn(f32) -> f32` paired with a name.
#[derive(Debug, Clone)]
pub struct FnModel<F> {
    name: String,
    func: F,
}

impl<F: Fn(f32) -> f32> FnModel<F> {
    /// Wraps `func` as a golden model called `name`.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F: Fn(f32) -> f32> GoldenModel for FnModel<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn reference(&self, x: f32) -> f32 {
        (self.func)(x)
    }
}

/// Edge cases for a tanh unit: signed zeros, saturation thresholds on both
/// sides, infinities, NaN, subnormals, extremes, and a few constants.
const SPECIAL_CASES: [f32; 43] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    10.0,
    -10.0,
    50.0,
    -50.0,
    88.699_999,
    88.7,
    88.700_001,
    -87.300_001,
    -87.3,
    -87.299_999,
    100.0,
    -100.0,
    f32::INFINITY,
    f32::NEG_INFINITY,
    f32::NAN,
    1e-37,
    -1e-37,
    1e38,
    -1e38,
    1e-45,
    -1e-45,
    f32::MIN_POSITIVE,
    -f32::MIN_POSITIVE,
    f32::MAX,
    -f32::MAX,
    PI,
    -PI,
    E,
    -E,
    LN_2,
    -LN_2,
    LN_10,
    -LN_10,
    88.0,
    89.0,
    90.0,
    -87.0,
    -88.0,
    -89.0,
];

/// Returns the fixed edge-case input vector.
pub fn special_case_inputs() -> Vec<f32> {
    SPECIAL_CASES.to_vec()
}
