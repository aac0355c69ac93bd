//! # ULP Distance Tests
//!
//! Covers the special-value table (NaN, infinities, signed zero), the
//! sign-crossing rule, and same-sign symmetry.

use proptest::prelude::*;
use rstest::rstest;
use tanhsim_core::check::ulp_distance;

fn up(f: f32, n: u32) -> f32 {
    f32::from_bits(f.to_bits() + n)
}

#[rstest]
#[case::nan_pair(f32::NAN, f32::NAN, 0)]
#[case::nan_payloads(f32::from_bits(0x7fc0_0001), f32::from_bits(0xffc0_1234), 0)]
#[case::pos_inf(f32::INFINITY, f32::INFINITY, 0)]
#[case::neg_inf(f32::NEG_INFINITY, f32::NEG_INFINITY, 0)]
#[case::signed_zero(0.0, -0.0, 0)]
#[case::signed_zero_rev(-0.0, 0.0, 0)]
#[case::two_up(1.0, up(1.0, 2), 2)]
#[case::across_exponent(1.0, f32::from_bits(0x3f7f_ffff), 1)]
#[case::one_and_minus_one(1.0, -1.0, 2 * 0x3f80_0000)]
#[case::zero_to_min_subnormal(-0.0, f32::from_bits(1), 1)]
fn special_and_exact_cases(#[case] reference: f32, #[case] candidate: f32, #[case] expected: u64) {
    assert_eq!(ulp_distance(reference, candidate), expected);
}

#[test]
fn opposite_infinities_are_far_apart() {
    let d = ulp_distance(f32::INFINITY, f32::NEG_INFINITY);
    assert_ne!(d, 0);
    assert_eq!(d, 2 * 0x7f80_0000);
}

#[test]
fn signed_zero_distance_comes_from_ieee_equality() {
    // The encodings differ, so only the IEEE equality shortcut can yield 0.
    assert_ne!(0.0_f32.to_bits(), (-0.0_f32).to_bits());
    assert!(0.0_f32 == -0.0_f32);
    assert_eq!(ulp_distance(0.0, -0.0), 0);
}

#[test]
fn nan_against_number_is_not_zero() {
    assert_ne!(ulp_distance(f32::NAN, 1.0), 0);
    assert_ne!(ulp_distance(1.0, f32::NAN), 0);
}

#[test]
fn largest_crossing_does_not_overflow() {
    let d = ulp_distance(f32::MAX, -f32::MAX);
    assert_eq!(d, 2 * u64::from(f32::MAX.to_bits()));
}

proptest! {
    #[test]
    fn identical_values_have_zero_distance(bits in any::<u32>()) {
        let a = f32::from_bits(bits);
        prop_assert_eq!(ulp_distance(a, a), 0);
    }

    #[test]
    fn same_sign_distance_is_symmetric(a in any::<u32>(), b in any::<u32>()) {
        let b = (b & 0x7fff_ffff) | (a & 0x8000_0000);
        let (x, y) = (f32::from_bits(a), f32::from_bits(b));
        prop_assert_eq!(ulp_distance(x, y), ulp_distance(y, x));
    }

    #[test]
    fn sign_crossing_sums_magnitudes(a in 1u32..=0x7f80_0000, b in 1u32..=0x7f80_0000) {
        let pos = f32::from_bits(a);
        let neg = f32::from_bits(b | 0x8000_0000);
        let expected = u64::from(a) + u64::from(b);
        prop_assert_eq!(ulp_distance(pos, neg), expected);
        prop_assert_eq!(ulp_distance(neg, pos), expected);
    }

    #[test]
    fn same_sign_distance_is_bit_difference(a in 0u32..0x7f80_0000, b in 0u32..0x7f80_0000) {
        let expected = u64::from(a.abs_diff(b));
        prop_assert_eq!(ulp_distance(f32::from_bits(a), f32::from_bits(b)), expected);
        prop_assert_eq!(
            ulp_distance(f32::from_bits(a | 0x8000_0000), f32::from_bits(b | 0x8000_0000)),
            expected
        );
    }
}
