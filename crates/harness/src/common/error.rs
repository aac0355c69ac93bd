//! Harness error definitions.
//!
//! Failures of the harness itself, as opposed to numeric mismatches of the unit
//! under test (those are recorded as [`Verdict::Fail`](crate::check::Verdict)
//! and never raised). It covers:
//! 1. **Protocol violations:** The unit produced an output nobody asked for.
//! 2. **Liveness violations:** The unit stopped accepting or producing data.
//! 3. **Resource exhaustion:** Test-vector buffers could not be allocated.
//! 4. **Setup errors:** Oracle length mismatches and unreadable configuration.
//!
//! No variant is retried: every run is deterministic given the device and inputs.

use thiserror::Error;

/// Errors raised by the driver, session, and suite runner.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// Output `valid` was observed with no outstanding input.
    ///
    /// A correct in-order unit never emits more results than it accepted.
    #[error(
        "protocol violation at cycle {cycle}: output valid with {received} received of {issued} issued"
    )]
    ProtocolViolation {
        /// Session cycle at which the spurious output was sampled.
        cycle: u64,
        /// Inputs accepted by the unit so far.
        issued: usize,
        /// Outputs collected before the spurious one.
        received: usize,
    },

    /// The unit made no progress within the watchdog window or cycle budget.
    #[error(
        "liveness violation after {cycles} cycles: {issued} issued, {received} received"
    )]
    LivenessViolation {
        /// Session cycle count when the driver gave up.
        cycles: u64,
        /// Inputs accepted by the unit so far.
        issued: usize,
        /// Outputs collected so far.
        received: usize,
    },

    /// A test-vector buffer of `requested` elements could not be reserved.
    #[error("failed to reserve buffer for {requested} samples")]
    ResourceExhausted {
        /// Number of elements requested.
        requested: usize,
    },

    /// The golden model returned a different number of references than inputs.
    #[error("golden model produced {references} references for {inputs} inputs")]
    LengthMismatch {
        /// Number of inputs submitted.
        inputs: usize,
        /// Number of references produced.
        references: usize,
    },

    /// Configuration could not be read or parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result alias used throughout the harness.
pub type Result<T> = std::result::Result<T, HarnessError>;
