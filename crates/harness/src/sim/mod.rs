//! Simulation session and handshake driver.
//!
//! Owns the clocking of a unit under test and the streaming of operands through
//! it. It provides:
//! 1. **Session:** [`Session`], the explicit owner of the device, cycle counter, and trace hook.
//! 2. **Trace:** [`TraceSink`], the seam for waveform capture.
//! 3. **Driver:** [`drive`], which streams an input sequence through the unit and
//!    collects results in submission order.

/// Streaming valid/ready driver.
pub mod driver;

/// Session lifecycle and cycle stepping.
pub mod session;

/// Waveform trace hook.
pub mod trace;

pub use driver::{DriveOutcome, drive};
pub use session::Session;
pub use trace::TraceSink;
