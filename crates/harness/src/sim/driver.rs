//! Streaming valid/ready driver.
//!
//! Feeds an ordered operand sequence into the unit's input port and collects
//! its results from the output port. Per cycle:
//! 1. **Issue:** If operands remain and `in_ready` is high, present the next one
//!    with `in_valid` high; otherwise drop `in_valid`.
//! 2. **Step:** Advance the session by one full clock cycle.
//! 3. **Collect:** If `out_valid` is high, read the result word.
//!
//! `out_ready` is held high for the whole drive; the harness never
//! back-pressures the result path. The unit is assumed to be in-order, so the
//! i-th result belongs to the i-th operand regardless of latency.
//!
//! A watchdog bounds the loop: too many consecutive cycles without any transfer,
//! or an exhausted cycle budget, end the drive with a liveness violation.

use tracing::{debug, error, trace, warn};

use super::session::Session;
use crate::common::bits::{f32_from_bits, f32_to_bits};
use crate::common::constants::STATUS_UPDATE_INTERVAL;
use crate::common::error::{HarnessError, Result};
use crate::config::DriveConfig;
use crate::uut::HandshakeDevice;

/// Results of one drive.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveOutcome {
    /// Results in submission order; `outputs[i]` belongs to `inputs[i]`.
    pub outputs: Vec<f32>,
    /// Cycles stepped by this drive.
    pub cycles: u64,
}

/// Streams `inputs` through the session's device and collects one result per input.
///
/// # Arguments
///
/// * `session` - The session owning the device; must be out of reset.
/// * `inputs` - Operands in submission order.
/// * `config` - Watchdog, cycle budget, and rounding mode.
///
/// # Returns
///
/// The results in submission order and the number of cycles taken.
///
/// # Errors
///
/// - [`HarnessError::ProtocolViolation`] if the device raises `out_valid` with
///   no operand outstanding.
/// - [`HarnessError::LivenessViolation`] if `config.hang_threshold` consecutive
///   cycles pass without a transfer, or `config.max_cycles` is reached.
/// - [`HarnessError::ResourceExhausted`] if the output buffer cannot be reserved.
pub fn drive<D: HandshakeDevice>(
    session: &mut Session<D>,
    inputs: &[f32],
    config: &DriveConfig,
) -> Result<DriveOutcome> {
    let len = inputs.len();
    let mut outputs = Vec::new();
    outputs
        .try_reserve_exact(len)
        .map_err(|_| HarnessError::ResourceExhausted { requested: len })?;

    let start = session.cycles();
    let mut issued = 0usize;
    let mut received = 0usize;
    let mut idle = 0u64;

    debug!(len, start_cycle = start, "drive started");

    {
        let dev = session.device_mut();
        dev.set_out_ready(true);
        dev.set_in_valid(false);
        dev.set_in_rounding_mode(config.rounding_mode);
    }

    while received < len {
        let elapsed = session.cycles() - start;
        if config.max_cycles.is_some_and(|max| elapsed >= max) {
            error!(elapsed, issued, received, "cycle budget exhausted");
            return Err(liveness(session, issued, received));
        }

        let dev = session.device_mut();
        let accepted = issued < len && dev.in_ready();
        if accepted {
            dev.set_in_bits(f32_to_bits(inputs[issued]));
            dev.set_in_valid(true);
            issued += 1;
        } else {
            dev.set_in_valid(false);
        }

        session.single_cycle();

        let mut produced = false;
        if session.device().out_valid() {
            if received >= issued {
                error!(
                    cycle = session.cycles(),
                    issued, received, "output valid with no outstanding input"
                );
                session.device_mut().set_in_valid(false);
                return Err(HarnessError::ProtocolViolation {
                    cycle: session.cycles(),
                    issued,
                    received,
                });
            }
            let value = f32_from_bits(session.device().out_bits());
            trace!(index = received, value, "output collected");
            outputs.push(value);
            received += 1;
            produced = true;
        }

        if accepted || produced {
            idle = 0;
        } else {
            idle += 1;
            if idle >= config.hang_threshold {
                warn!(idle, issued, received, "no handshake progress");
                return Err(liveness(session, issued, received));
            }
        }

        if (session.cycles() - start).is_multiple_of(STATUS_UPDATE_INTERVAL) {
            debug!(cycles = session.cycles() - start, issued, received, "drive progress");
        }
    }

    session.device_mut().set_in_valid(false);
    let cycles = session.cycles() - start;
    debug!(len, cycles, "drive finished");
    Ok(DriveOutcome { outputs, cycles })
}

fn liveness<D: HandshakeDevice>(
    session: &mut Session<D>,
    issued: usize,
    received: usize,
) -> HarnessError {
    session.device_mut().set_in_valid(false);
    HarnessError::LivenessViolation {
        cycles: session.cycles(),
        issued,
        received,
    }
}
