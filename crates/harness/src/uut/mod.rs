//! Unit-under-test port contract.
//!
//! The unit is opaque: the harness only sees its clock, reset, and two
//! valid/ready handshake ports. This module defines:
//! 1. **Ports:** [`HandshakePort`], the signal bundle of one direction.
//! 2. **Device:** [`HandshakeDevice`], the trait a simulated RTL model or a
//!    software stand-in implements so the driver can clock it.
//! 3. **Operand fields:** [`RoundingMode`], carried on the input port.
//! 4. **Software unit:** [`model::PipelinedUnit`], a behavioural in-order pipeline.
//!
//! A transfer happens on a rising clock edge exactly when the sender's `valid`
//! and the receiver's `ready` are both high.

/// Behavioural pipelined unit.
pub mod model;

/// Rounding mode operand field.
pub mod rounding_mode;

pub use model::{LatencyModel, PipelinedUnit, ReadyPattern};
pub use rounding_mode::RoundingMode;

/// Signals of one valid/ready port.
///
/// `valid` and `bits` are driven by the sender, `ready` by the receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandshakePort {
    /// Sender has data on `bits` this cycle.
    pub valid: bool,
    /// Receiver can accept data this cycle.
    pub ready: bool,
    /// Raw 32-bit data word.
    pub bits: u32,
}

impl HandshakePort {
    /// Returns `true` if a transfer happens on the next rising edge.
    #[inline]
    pub const fn fires(&self) -> bool {
        self.valid && self.ready
    }
}

/// Trait for a clocked unit with one input and one output handshake port.
///
/// Setters drive the unit's input pins; getters sample its output pins as of
/// the last [`eval`](HandshakeDevice::eval). A Verilator wrapper maps these onto
/// `clock`, `reset`, `io_in_*`, and `io_out_*`.
pub trait HandshakeDevice {
    /// Drives the clock pin.
    fn set_clock(&mut self, level: bool);
    /// Drives the synchronous reset pin.
    fn set_reset(&mut self, asserted: bool);
    /// Evaluates the model after pin changes; a low-to-high clock transition is a rising edge.
    fn eval(&mut self);

    /// Samples `io_in_ready`.
    fn in_ready(&self) -> bool;
    /// Drives `io_in_valid`.
    fn set_in_valid(&mut self, valid: bool);
    /// Drives `io_in_bits_in`.
    fn set_in_bits(&mut self, bits: u32);
    /// Drives `io_in_bits_rm`. Units without a rounding-mode field ignore it.
    fn set_in_rounding_mode(&mut self, _rm: RoundingMode) {}

    /// Samples `io_out_valid`.
    fn out_valid(&self) -> bool;
    /// Samples `io_out_bits_out`.
    fn out_bits(&self) -> u32;
    /// Drives `io_out_ready`.
    fn set_out_ready(&mut self, ready: bool);
}

impl<D: HandshakeDevice + ?Sized> HandshakeDevice for Box<D> {
    fn set_clock(&mut self, level: bool) {
        (**self).set_clock(level);
    }
    fn set_reset(&mut self, asserted: bool) {
        (**self).set_reset(asserted);
    }
    fn eval(&mut self) {
        (**self).eval();
    }
    fn in_ready(&self) -> bool {
        (**self).in_ready()
    }
    fn set_in_valid(&mut self, valid: bool) {
        (**self).set_in_valid(valid);
    }
    fn set_in_bits(&mut self, bits: u32) {
        (**self).set_in_bits(bits);
    }
    fn set_in_rounding_mode(&mut self, rm: RoundingMode) {
        (**self).set_in_rounding_mode(rm);
    }
    fn out_valid(&self) -> bool {
        (**self).out_valid()
    }
    fn out_bits(&self) -> u32 {
        (**self).out_bits()
    }
    fn set_out_ready(&mut self, ready: bool) {
        (**self).set_out_ready(ready);
    }
}
