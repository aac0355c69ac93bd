//! # Relative Error Tests

use proptest::prelude::*;
use rstest::rstest;
use tanhsim_core::check::relative_error;

#[rstest]
#[case::nan_pair(f32::NAN, f32::NAN, 0.0)]
#[case::same_inf(f32::INFINITY, f32::INFINITY, 0.0)]
#[case::opposite_inf(f32::INFINITY, f32::NEG_INFINITY, 0.0)]
#[case::signed_zero(0.0, -0.0, 0.0)]
#[case::zero_reference(0.0, 0.25, 0.25)]
#[case::zero_candidate(-0.5, 0.0, 0.5)]
#[case::halved(2.0, 1.0, 0.5)]
#[case::negative_reference(-4.0, -3.0, 0.25)]
fn exact_cases(#[case] reference: f32, #[case] candidate: f32, #[case] expected: f64) {
    assert_eq!(relative_error(reference, candidate), expected);
}

#[test]
fn one_nan_propagates() {
    assert!(relative_error(f32::NAN, 1.0).is_nan());
    assert!(relative_error(1.0, f32::NAN).is_nan());
}

#[test]
fn infinite_candidate_is_infinite_error() {
    assert_eq!(relative_error(1.0, f32::INFINITY), f64::INFINITY);
    assert_eq!(relative_error(-1.0, f32::NEG_INFINITY), f64::INFINITY);
}

#[test]
fn infinite_reference_against_finite_is_nan() {
    // Divides by the infinite reference: inf / inf.
    assert!(relative_error(f32::NEG_INFINITY, 1.0).is_nan());
    assert!(relative_error(f32::INFINITY, 0.5).is_nan());
}

#[test]
fn computed_in_double_precision() {
    let one_up = f32::from_bits(1.0_f32.to_bits() + 1);
    let err = relative_error(1.0, one_up);
    assert_eq!(err, f64::from(f32::EPSILON));
}

proptest! {
    #[test]
    fn identical_values_have_zero_error(bits in any::<u32>()) {
        let a = f32::from_bits(bits);
        prop_assert_eq!(relative_error(a, a), 0.0);
    }

    #[test]
    fn error_is_never_negative(a in any::<f32>(), b in any::<f32>()) {
        let err = relative_error(a, b);
        prop_assert!(err.is_nan() || err >= 0.0);
    }
}
