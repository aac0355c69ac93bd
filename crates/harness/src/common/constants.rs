//! Harness-wide constants.
//!
//! IEEE 754 field masks plus the bench defaults:
//! reset length, pass thresholds, and the watchdog window.

/// Bit mask for the sign bit of a 32-bit IEEE 754 float (bit 31).
pub const F32_SIGN_BIT: u32 = 0x8000_0000;

/// Bit mask for the exponent and mantissa of a 32-bit IEEE 754 float.
pub const F32_MAGNITUDE_MASK: u32 = 0x7FFF_FFFF;

/// Number of cycles the reset line is held when a session starts.
pub const RESET_CYCLES: u64 = 10;

/// Relative error strictly below which a sample may pass.
pub const DEFAULT_ERROR_THRESHOLD: f64 = 1e-4;

/// ULP distance at or below which a sample may pass.
pub const DEFAULT_ULP_THRESHOLD: u64 = 2;

/// Consecutive cycles without any handshake transfer before the driver gives up.
pub const HANG_DETECTION_THRESHOLD: u64 = 100_000;

/// Interval, in cycles, between driver progress messages.
pub const STATUS_UPDATE_INTERVAL: u64 = 1 << 20;
