//! Rounding mode field of the unit's input port.
//!
//! The operand bundle carries a 3-bit `rm` field next to the data word:
//!
//! | Value | Mode | Description                          |
//! |-------|------|--------------------------------------|
//! | 0b000 | RNE  | Round to Nearest, ties to Even       |
//! | 0b001 | RTZ  | Round towards Zero                   |
//! | 0b010 | RDN  | Round Down (towards −∞)              |
//! | 0b011 | RUP  | Round Up (towards +∞)                |
//! | 0b100 | RMM  | Round to Nearest, ties to Max Magnitude |
//!
//! The bench drives RNE unless configured otherwise.

use serde::Deserialize;

/// Rounding mode encoding presented on the input port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even (default IEEE mode).
    #[default]
    #[serde(alias = "Rne")]
    Rne = 0b000,
    /// Round towards Zero.
    #[serde(alias = "Rtz")]
    Rtz = 0b001,
    /// Round Down (towards −∞).
    #[serde(alias = "Rdn")]
    Rdn = 0b010,
    /// Round Up (towards +∞).
    #[serde(alias = "Rup")]
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    #[serde(alias = "Rmm")]
    Rmm = 0b100,
}

impl RoundingMode {
    /// Returns the 3-bit encoding driven on the port.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}
