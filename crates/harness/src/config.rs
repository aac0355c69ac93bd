//! Configuration for the verification harness.
//!
//! This module defines the structures used to parameterize a run. It provides:
//! 1. **Defaults:** The reset length, pass thresholds, and watchdog window the bench ships with.
//! 2. **Structures:** Hierarchical config for thresholds, the handshake driver, and reporting.
//! 3. **Loading:** Parsing from a JSON string or file; use `Config::default()` otherwise.
//!
//! Every field is optional in JSON; omitted fields take their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::check::Thresholds;
use crate::common::error::{HarnessError, Result};
use crate::uut::RoundingMode;

/// Default configuration values.
mod defaults {
    use crate::common::constants;

    /// Reset cycles applied when a session is created.
    pub const RESET_CYCLES: u64 = constants::RESET_CYCLES;

    /// Watchdog window, in cycles without a handshake transfer.
    pub const HANG_THRESHOLD: u64 = constants::HANG_DETECTION_THRESHOLD;

    /// Failing samples are collected for the report sink by default.
    pub const COLLECT_FAILURES: bool = true;
}

/// Root configuration for a verification run.
///
/// # Examples
///
/// ```
/// use tanhsim_core::config::Config;
/// use tanhsim_core::uut::RoundingMode;
///
/// let json = r#"{
///     "reset_cycles": 4,
///     "thresholds": { "error": 1e-3, "ulp": 8 },
///     "drive": { "hang_threshold": 500, "max_cycles": 1000000, "rounding_mode": "RTZ" },
///     "report": { "collect_failures": false }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.reset_cycles, 4);
/// assert_eq!(config.thresholds.ulp, 8);
/// assert_eq!(config.drive.max_cycles, Some(1_000_000));
/// assert_eq!(config.drive.rounding_mode, RoundingMode::Rtz);
/// assert!(!config.report.collect_failures);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Cycles the reset line is held when a session starts.
    #[serde(default = "Config::default_reset_cycles")]
    pub reset_cycles: u64,
    /// Pass/fail thresholds for the equivalence checker.
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Handshake driver settings.
    #[serde(default)]
    pub drive: DriveConfig,
    /// Report collection settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Returns the default reset length.
    const fn default_reset_cycles() -> u64 {
        defaults::RESET_CYCLES
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HarnessError::Config(e.to_string()))
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Config`] if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| HarnessError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_cycles: defaults::RESET_CYCLES,
            thresholds: Thresholds::default(),
            drive: DriveConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Handshake driver settings.
///
/// The watchdog trips when `hang_threshold` consecutive cycles pass with neither
/// an input accepted nor an output produced. `max_cycles` additionally caps the
/// whole drive regardless of progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DriveConfig {
    /// Consecutive idle cycles tolerated before a liveness violation.
    #[serde(default = "DriveConfig::default_hang_threshold")]
    pub hang_threshold: u64,

    /// Absolute cycle budget for one drive, counted from its first cycle.
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Rounding mode driven on the input port alongside each operand.
    #[serde(default)]
    pub rounding_mode: RoundingMode,
}

impl DriveConfig {
    /// Returns the default watchdog window.
    const fn default_hang_threshold() -> u64 {
        defaults::HANG_THRESHOLD
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            hang_threshold: defaults::HANG_THRESHOLD,
            max_cycles: None,
            rounding_mode: RoundingMode::default(),
        }
    }
}

/// Report collection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    /// Keep a row for every failing sample.
    #[serde(default = "ReportConfig::default_collect_failures")]
    pub collect_failures: bool,
}

impl ReportConfig {
    const fn default_collect_failures() -> bool {
        defaults::COLLECT_FAILURES
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            collect_failures: defaults::COLLECT_FAILURES,
        }
    }
}
