//! Bit reinterpretation for IEEE 754 single-precision values.
//!
//! The unit under test exchanges raw 32-bit patterns on its data lines, and the
//! ULP checker works on the same patterns. Every conversion between the two
//! views goes through this module:
//!
//! - **Encoding** ([`f32_to_bits`]): The raw pattern presented on the input port.
//! - **Decoding** ([`f32_from_bits`]): The float read back from the output port.
//! - **Sign/magnitude** ([`is_negative`], [`magnitude_bits`]): Signed-magnitude
//!   fields used by the sign-crossing ULP rule.
//!
//! Both directions are exact: no rounding, and NaN payloads and the sign of zero
//! survive a round trip.

use super::constants::{F32_MAGNITUDE_MASK, F32_SIGN_BIT};

/// Returns the raw IEEE 754 bit pattern of `f`.
///
/// # Arguments
///
/// * `f` - The single-precision value to reinterpret.
///
/// # Returns
///
/// The 32-bit pattern with sign in bit 31, exponent in bits 30..23, and
/// mantissa in bits 22..0.
#[inline]
pub const fn f32_to_bits(f: f32) -> u32 {
    f.to_bits()
}

/// Reinterprets a raw 32-bit pattern as a single-precision value.
///
/// # Arguments
///
/// * `bits` - The raw IEEE 754 bit pattern, typically sampled from a data line.
///
/// # Returns
///
/// The `f32` with exactly that encoding.
#[inline]
pub const fn f32_from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// Returns `true` if the sign bit of `f` is set.
///
/// This reads the encoding, not the algebraic value: `-0.0` and negative NaNs
/// report `true`.
#[inline]
pub const fn is_negative(f: f32) -> bool {
    f32_to_bits(f) & F32_SIGN_BIT != 0
}

/// Returns the bit pattern of `f` with the sign bit cleared.
#[inline]
pub const fn magnitude_bits(f: f32) -> u32 {
    f32_to_bits(f) & F32_MAGNITUDE_MASK
}
