//! Common utilities and types shared by the checker, driver, and aggregator.
//!
//! This module provides:
//! 1. **Bit Reinterpretation:** Lossless conversion between `f32` and its raw bit pattern.
//! 2. **Constants:** IEEE 754 masks and harness defaults (reset length, watchdog threshold).
//! 3. **Error Handling:** The `HarnessError` taxonomy for protocol, liveness, and resource failures.

/// Bit-level reinterpretation of single-precision floats.
pub mod bits;

/// Common constants used throughout the harness.
pub mod constants;

/// Error types for the harness.
pub mod error;

pub use bits::{f32_from_bits, f32_to_bits, is_negative, magnitude_bits};
pub use constants::{F32_MAGNITUDE_MASK, F32_SIGN_BIT};
pub use error::{HarnessError, Result};
