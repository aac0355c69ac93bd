//! Behavioural model of a pipelined single-operand FPU.
//!
//! [`PipelinedUnit`] stands in for an RTL simulation when exercising the harness.
//! It accepts one operand per rising edge when `in_ready` is high, computes the
//! result with an arbitrary `f32 -> f32` function, holds each result for a
//! configurable number of edges, and presents results strictly in acceptance
//! order. Back-pressure comes from two sources:
//! - a bounded number of in-flight operations, and
//! - a repeating [`ReadyPattern`] that forces stall cycles.
//!
//! The arithmetic itself is whatever function the caller supplies; the model
//! only reproduces the handshake timing of a real unit.

use std::collections::VecDeque;
use std::fmt;

use super::{HandshakeDevice, HandshakePort, RoundingMode};
use crate::common::bits::{f32_from_bits, f32_to_bits};

/// Default pipeline depth in edges.
const DEFAULT_LATENCY: u32 = 4;

/// Default number of operations in flight.
const DEFAULT_CAPACITY: usize = 8;

/// Per-operation latency of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyModel {
    /// Every operation takes the same number of edges.
    Fixed(u32),
    /// Latency derived from the operand, e.g. longer for saturating inputs.
    InputDependent(fn(f32) -> u32),
}

impl LatencyModel {
    fn latency(self, operand: f32) -> u32 {
        match self {
            Self::Fixed(n) => n,
            Self::InputDependent(f) => f(operand),
        }
    }
}

/// Stall schedule for `in_ready`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReadyPattern {
    /// Ready whenever there is room in the pipeline.
    #[default]
    Always,
    /// Ready only on edges where the pattern, repeated, holds `true`.
    Repeating(Vec<bool>),
}

impl ReadyPattern {
    fn allows(&self, edge: u64) -> bool {
        match self {
            Self::Always => true,
            Self::Repeating(p) if p.is_empty() => true,
            Self::Repeating(p) => p[(edge % p.len() as u64) as usize],
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    bits: u32,
    remaining: u32,
}

/// Behavioural valid/ready pipeline around a software function.
pub struct PipelinedUnit<F> {
    func: F,
    latency: LatencyModel,
    ready_pattern: ReadyPattern,
    capacity: usize,

    clock: bool,
    last_clock: bool,
    reset: bool,
    rounding_mode: RoundingMode,

    in_port: HandshakePort,
    out_port: HandshakePort,
    pipeline: VecDeque<InFlight>,

    edges: u64,
    accepted: u64,
    delivered: u64,
}

impl<F: Fn(f32) -> f32> PipelinedUnit<F> {
    /// Creates a unit computing `func` with a fixed latency of 4 and room for 8
    /// operations in flight.
    pub fn new(func: F) -> Self {
        let mut unit = Self {
            func,
            latency: LatencyModel::Fixed(DEFAULT_LATENCY),
            ready_pattern: ReadyPattern::Always,
            capacity: DEFAULT_CAPACITY,
            clock: false,
            last_clock: false,
            reset: false,
            rounding_mode: RoundingMode::Rne,
            in_port: HandshakePort::default(),
            out_port: HandshakePort::default(),
            pipeline: VecDeque::with_capacity(DEFAULT_CAPACITY),
            edges: 0,
            accepted: 0,
            delivered: 0,
        };
        unit.update_outputs();
        unit
    }

    /// Sets the latency model.
    #[must_use]
    pub fn with_latency(mut self, latency: LatencyModel) -> Self {
        self.latency = latency;
        self
    }

    /// Sets the stall schedule for `in_ready`.
    #[must_use]
    pub fn with_ready_pattern(mut self, pattern: ReadyPattern) -> Self {
        self.ready_pattern = pattern;
        self.update_outputs();
        self
    }

    /// Sets the maximum number of operations in flight (at least 1).
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self.update_outputs();
        self
    }

    /// Number of operations accepted and not yet delivered.
    pub fn in_flight(&self) -> usize {
        self.pipeline.len()
    }

    /// Total operations accepted since the last reset.
    pub const fn accepted(&self) -> u64 {
        self.accepted
    }

    /// Total results delivered since the last reset.
    pub const fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Rounding mode most recently driven on the input port.
    pub const fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    /// Rising-edge behaviour: retire the presented result, age the pipeline,
    /// then accept a new operand.
    fn rising_edge(&mut self) {
        if self.reset {
            self.pipeline.clear();
            self.edges = 0;
            self.accepted = 0;
            self.delivered = 0;
            return;
        }

        if self.out_port.fires() {
            let _ = self.pipeline.pop_front();
            self.delivered += 1;
        }

        for op in &mut self.pipeline {
            op.remaining = op.remaining.saturating_sub(1);
        }

        if self.in_port.fires() {
            let operand = f32_from_bits(self.in_port.bits);
            self.pipeline.push_back(InFlight {
                bits: f32_to_bits((self.func)(operand)),
                remaining: self.latency.latency(operand),
            });
            self.accepted += 1;
        }

        self.edges += 1;
    }

    /// Recomputes the combinational outputs from the current state.
    fn update_outputs(&mut self) {
        match self.pipeline.front() {
            Some(head) if head.remaining == 0 && !self.reset => {
                self.out_port.valid = true;
                self.out_port.bits = head.bits;
            }
            _ => self.out_port.valid = false,
        }
        self.in_port.ready = !self.reset
            && self.pipeline.len() < self.capacity
            && self.ready_pattern.allows(self.edges);
    }
}

impl<F: Fn(f32) -> f32> HandshakeDevice for PipelinedUnit<F> {
    fn set_clock(&mut self, level: bool) {
        self.clock = level;
    }

    fn set_reset(&mut self, asserted: bool) {
        self.reset = asserted;
    }

    fn eval(&mut self) {
        if self.clock && !self.last_clock {
            self.rising_edge();
        }
        self.last_clock = self.clock;
        self.update_outputs();
    }

    fn in_ready(&self) -> bool {
        self.in_port.ready
    }

    fn set_in_valid(&mut self, valid: bool) {
        self.in_port.valid = valid;
    }

    fn set_in_bits(&mut self, bits: u32) {
        self.in_port.bits = bits;
    }

    fn set_in_rounding_mode(&mut self, rm: RoundingMode) {
        self.rounding_mode = rm;
    }

    fn out_valid(&self) -> bool {
        self.out_port.valid
    }

    fn out_bits(&self) -> u32 {
        self.out_port.bits
    }

    fn set_out_ready(&mut self, ready: bool) {
        self.out_port.ready = ready;
    }
}

impl<F> fmt::Debug for PipelinedUnit<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelinedUnit")
            .field("latency", &self.latency)
            .field("ready_pattern", &self.ready_pattern)
            .field("capacity", &self.capacity)
            .field("in_flight", &self.pipeline.len())
            .field("accepted", &self.accepted)
            .field("delivered", &self.delivered)
            .finish_non_exhaustive()
    }
}
