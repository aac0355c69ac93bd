//! Waveform trace hook.
//!
//! A session calls [`TraceSink::dump`] after every clock-phase evaluation with
//! the current simulation time, the way an FST/VCD writer is driven. Writing an
//! actual waveform file is left to the implementor.

/// Receiver of per-evaluation trace dumps.
pub trait TraceSink {
    /// Records the device state at simulation time `time`.
    fn dump(&mut self, time: u64);

    /// Flushes and closes the trace. Called once, when the session finishes or
    /// is dropped.
    fn close(&mut self) {}
}
