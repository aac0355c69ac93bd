//! Simulation session: owns the device under test and its clock.
//!
//! A [`Session`] replaces process-wide simulator globals with one explicitly
//! constructed value. Each session holds:
//! 1. **Device:** The unit under test, exclusively owned.
//! 2. **Time:** The cycle counter and the half-cycle simulation time.
//! 3. **Trace:** An optional [`TraceSink`] fed after every evaluation.
//!
//! Construction resets the device; [`Session::finish`] closes the trace and
//! hands the device back. A session dropped without `finish`, e.g. on an error
//! path, still closes its trace. Independent sessions share nothing.

use tracing::debug;

use super::trace::TraceSink;
use crate::config::Config;
use crate::uut::HandshakeDevice;

/// Trace sink that is closed exactly once, when dropped.
struct OpenTrace(Box<dyn TraceSink>);

impl Drop for OpenTrace {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// Clocked simulation of one device under test.
pub struct Session<D> {
    device: D,
    trace: Option<OpenTrace>,
    cycle_count: u64,
    time: u64,
}

impl<D: HandshakeDevice> Session<D> {
    /// Creates a session and holds reset for `config.reset_cycles` cycles.
    pub fn new(device: D, config: &Config) -> Self {
        Self::with_trace(device, None, config)
    }

    /// Creates a session that dumps to `trace`, then resets the device.
    pub fn with_trace(device: D, trace: Option<Box<dyn TraceSink>>, config: &Config) -> Self {
        let mut session = Self {
            device,
            trace: trace.map(OpenTrace),
            cycle_count: 0,
            time: 0,
        };
        session.reset(config.reset_cycles);
        debug!(
            cycles = session.cycle_count,
            traced = session.trace.is_some(),
            "session initialized"
        );
        session
    }

    /// Advances the device by one full clock cycle (falling then rising edge).
    pub fn single_cycle(&mut self) {
        self.half_cycle(false);
        self.half_cycle(true);
        self.cycle_count += 1;
    }

    /// Holds reset for `cycles` cycles, then releases it.
    pub fn reset(&mut self, cycles: u64) {
        self.device.set_reset(true);
        for _ in 0..cycles {
            self.single_cycle();
        }
        self.device.set_reset(false);
    }

    fn half_cycle(&mut self, level: bool) {
        self.device.set_clock(level);
        self.device.eval();
        if let Some(trace) = self.trace.as_mut() {
            trace.0.dump(self.time);
            self.time += 1;
        }
    }

    /// Full cycles stepped since the session was created, reset included.
    pub const fn cycles(&self) -> u64 {
        self.cycle_count
    }

    /// Simulation time in half-cycles; advances only while tracing.
    pub const fn time(&self) -> u64 {
        self.time
    }

    /// Shared access to the device.
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Exclusive access to the device, for driving its pins between cycles.
    pub const fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// Closes the trace and returns the device.
    pub fn finish(self) -> D {
        let Self {
            device,
            trace,
            cycle_count,
            ..
        } = self;
        drop(trace);
        debug!(cycles = cycle_count, "session finished");
        device
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for Session<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("device", &self.device)
            .field("traced", &self.trace.is_some())
            .field("cycle_count", &self.cycle_count)
            .field("time", &self.time)
            .finish()
    }
}
