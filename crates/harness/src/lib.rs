//! Verification harness for a streaming FP32 tanh unit.
//!
//! This crate drives a cycle-stepped unit under test over a valid/ready handshake
//! and grades its outputs against a software golden model. It provides:
//! 1. **Common:** Bit reinterpretation helpers, constants, and the harness error type.
//! 2. **UUT:** The `HandshakeDevice` port contract and a behavioural pipelined unit model.
//! 3. **Simulation:** The clocked `Session` and the streaming handshake driver.
//! 4. **Checking:** ULP distance, relative error, and pass/fail classification.
//! 5. **Statistics:** Per-run aggregation of samples into pass/fail counts and error summaries.
//! 6. **Suite:** The golden -> drive -> compare pipeline tying the pieces together.

/// Common types and constants (bit reinterpretation, errors, masks).
pub mod common;
/// Harness configuration (thresholds, drive watchdog, reporting).
pub mod config;
/// Floating-point equivalence checking (ULP distance, relative error, verdicts).
pub mod check;
/// Golden-model oracles and fixed edge-case vectors.
pub mod golden;
/// Simulation session, trace hook, and the streaming handshake driver.
pub mod sim;
/// Run statistics aggregation.
pub mod stats;
/// End-to-end suite runner.
pub mod suite;
/// Unit-under-test port contract and software unit model.
pub mod uut;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Harness error type returned by the driver and suite runner.
pub use crate::common::HarnessError;
/// Clocked session owning a device under test.
pub use crate::sim::Session;
/// Accumulated pass/fail statistics for one run.
pub use crate::stats::RunStatistics;
