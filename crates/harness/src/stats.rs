//! Run statistics collection and reporting.
//!
//! This module aggregates graded samples for one verification run. It provides:
//! 1. **Samples:** The `(input, reference, candidate)` triple produced by pairing
//!    the driver's results with the golden sequence.
//! 2. **Counts:** Total, passing, and failing samples, with rates derived on read.
//! 3. **Error summary:** Sum and maximum of relative error and ULP distance.
//! 4. **Failures:** Optional rows describing each failing sample, for a report sink.

use std::fmt;

use crate::check::{Comparison, Thresholds, Verdict, compare};

/// One graded input: the operand, its golden result, and the unit's result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Operand submitted to the unit.
    pub input: f32,
    /// Golden-model result for `input`.
    pub reference: f32,
    /// Result produced by the unit for `input`.
    pub candidate: f32,
}

impl Sample {
    /// Creates a sample.
    pub const fn new(input: f32, reference: f32, candidate: f32) -> Self {
        Self {
            input,
            reference,
            candidate,
        }
    }
}

/// A failing sample with its position in the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FailureRow {
    /// Zero-based position of the sample in submission order.
    pub index: usize,
    /// The failing sample.
    pub sample: Sample,
    /// Its deviation from the reference.
    pub comparison: Comparison,
}

/// Accumulated pass/fail statistics for one run.
///
/// Owned by a single aggregation pass. Rates and means are computed on read and
/// are 0 for an empty run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStatistics {
    /// Samples recorded.
    pub total: u64,
    /// Samples that passed.
    pub pass_count: u64,
    /// Samples that failed.
    pub fail_count: u64,
    /// Sum of relative errors.
    pub sum_error: f64,
    /// Largest relative error seen.
    pub max_error: f64,
    /// Sum of ULP distances.
    pub sum_ulp: u64,
    /// Largest ULP distance seen.
    pub max_ulp: u64,
}

impl RunStatistics {
    /// Grades one sample and folds it into the totals.
    ///
    /// # Returns
    ///
    /// The sample's comparison and verdict.
    pub fn record(&mut self, sample: &Sample, thresholds: Thresholds) -> (Comparison, Verdict) {
        let cmp = compare(sample.reference, sample.candidate);
        let verdict = thresholds.classify(sample.reference, sample.candidate, cmp);

        self.total += 1;
        match verdict {
            Verdict::Pass => self.pass_count += 1,
            Verdict::Fail => self.fail_count += 1,
        }
        self.sum_error += cmp.relative_error;
        if cmp.relative_error > self.max_error {
            self.max_error = cmp.relative_error;
        }
        self.sum_ulp = self.sum_ulp.saturating_add(cmp.ulp_distance);
        self.max_ulp = self.max_ulp.max(cmp.ulp_distance);

        (cmp, verdict)
    }

    /// Percentage of samples that passed.
    pub fn pass_rate(&self) -> f64 {
        self.percent(self.pass_count)
    }

    /// Percentage of samples that failed.
    pub fn fail_rate(&self) -> f64 {
        self.percent(self.fail_count)
    }

    /// Mean relative error.
    pub fn mean_error(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.sum_error / self.total as f64
        }
    }

    /// Mean ULP distance.
    pub fn mean_ulp(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.sum_ulp as f64 / self.total as f64
        }
    }

    /// Returns `true` if every recorded sample passed.
    pub const fn all_passed(&self) -> bool {
        self.fail_count == 0
    }

    fn percent(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }

    /// Summary lines in the bench's report format.
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!(
                "Total={}, Pass={} ({:.2}%), Fail={} ({:.2}%)",
                self.total,
                self.pass_count,
                self.pass_rate(),
                self.fail_count,
                self.fail_rate()
            ),
            format!(
                "AvgErr={:e}, MaxErr={:e}",
                self.mean_error(),
                self.max_error
            ),
            format!("AvgULP={:.2}, MaxULP={}", self.mean_ulp(), self.max_ulp),
        ]
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [counts, errors, ulps] = self.summary_lines();
        write!(f, "{counts}; {errors}; {ulps}")
    }
}

/// Grades `samples` in order and returns the run statistics.
///
/// Pure: the same samples and thresholds always give identical statistics.
pub fn accumulate(samples: &[Sample], thresholds: Thresholds) -> RunStatistics {
    let mut stats = RunStatistics::default();
    for sample in samples {
        let _ = stats.record(sample, thresholds);
    }
    stats
}

/// Like [`accumulate`], also returning a row for every failing sample in order.
pub fn accumulate_with_failures(
    samples: &[Sample],
    thresholds: Thresholds,
) -> (RunStatistics, Vec<FailureRow>) {
    let mut stats = RunStatistics::default();
    let mut failures = Vec::new();
    for (index, sample) in samples.iter().enumerate() {
        let (comparison, verdict) = stats.record(sample, thresholds);
        if verdict == Verdict::Fail {
            failures.push(FailureRow {
                index,
                sample: *sample,
                comparison,
            });
        }
    }
    (stats, failures)
}
