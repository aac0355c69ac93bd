//! End-to-end verification suite.
//!
//! Runs one input vector through the full pipeline:
//! 1. **Golden:** Compute a reference for every input with the oracle.
//! 2. **Drive:** Stream the inputs through the unit and collect its results.
//! 3. **Pair:** Zip inputs, references, and results into samples by position.
//! 4. **Grade:** Aggregate the samples into run statistics and failure rows.

use tracing::{info, warn};

use crate::common::error::{HarnessError, Result};
use crate::config::Config;
use crate::golden::GoldenModel;
use crate::sim::{Session, drive};
use crate::stats::{FailureRow, RunStatistics, Sample, accumulate, accumulate_with_failures};
use crate::uut::HandshakeDevice;

/// Outcome of one suite run.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteReport {
    /// Suite name, for reports.
    pub name: String,
    /// Name of the golden model used.
    pub reference: String,
    /// Aggregated statistics.
    pub stats: RunStatistics,
    /// Failing samples in order; empty unless collection is enabled.
    pub failures: Vec<FailureRow>,
    /// Every graded sample in submission order.
    pub samples: Vec<Sample>,
    /// Cycles spent driving the unit.
    pub cycles: u64,
}

/// Runs `inputs` through the session's device and grades the results against `golden`.
///
/// # Errors
///
/// Propagates driver failures, and returns [`HarnessError::ResourceExhausted`] if
/// the reference or sample buffers cannot be reserved, or
/// [`HarnessError::LengthMismatch`] if the oracle returns the wrong number of
/// references.
pub fn run_suite<D, G>(
    name: &str,
    session: &mut Session<D>,
    golden: &G,
    inputs: &[f32],
    config: &Config,
) -> Result<SuiteReport>
where
    D: HandshakeDevice,
    G: GoldenModel + ?Sized,
{
    let len = inputs.len();
    info!(suite = name, reference = golden.name(), len, "suite started");

    let mut references = Vec::new();
    references
        .try_reserve_exact(len)
        .map_err(|_| HarnessError::ResourceExhausted { requested: len })?;
    golden.reference_batch(inputs, &mut references);
    if references.len() != len {
        return Err(HarnessError::LengthMismatch {
            inputs: len,
            references: references.len(),
        });
    }

    let outcome = drive(session, inputs, &config.drive)?;

    let mut samples = Vec::new();
    samples
        .try_reserve_exact(len)
        .map_err(|_| HarnessError::ResourceExhausted { requested: len })?;
    samples.extend(
        inputs
            .iter()
            .zip(&references)
            .zip(&outcome.outputs)
            .map(|((&input, &reference), &candidate)| Sample::new(input, reference, candidate)),
    );

    let (stats, failures) = if config.report.collect_failures {
        accumulate_with_failures(&samples, config.thresholds)
    } else {
        (accumulate(&samples, config.thresholds), Vec::new())
    };

    for row in &failures {
        warn!(
            suite = name,
            index = row.index,
            input = row.sample.input,
            reference = row.sample.reference,
            candidate = row.sample.candidate,
            error = row.comparison.relative_error,
            ulp = row.comparison.ulp_distance,
            "sample failed"
        );
    }
    let [counts, errors, ulps] = stats.summary_lines();
    info!(suite = name, cycles = outcome.cycles, "{counts}");
    info!(suite = name, "{errors}");
    info!(suite = name, "{ulps}");

    Ok(SuiteReport {
        name: name.to_owned(),
        reference: golden.name().to_owned(),
        stats,
        failures,
        samples,
        cycles: outcome.cycles,
    })
}
