//! # Run Statistics Tests

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tanhsim_core::check::{Thresholds, Verdict, relative_error};
use tanhsim_core::stats::{RunStatistics, Sample, accumulate, accumulate_with_failures};

fn up(f: f32, n: u32) -> f32 {
    f32::from_bits(f.to_bits() + n)
}

fn tanh_samples() -> Vec<Sample> {
    vec![
        Sample::new(0.0, 0.0, 0.0),
        Sample::new(1.0, 0.761_594_2, 0.761_594_2),
        Sample::new(-1.0, -0.761_594_2, -0.761_594_2),
    ]
}

#[test]
fn empty_run_is_all_zero() {
    let stats = accumulate(&[], Thresholds::default());
    assert_eq!(stats, RunStatistics::default());
    assert_eq!(stats.pass_rate(), 0.0);
    assert_eq!(stats.fail_rate(), 0.0);
    assert_eq!(stats.mean_error(), 0.0);
    assert_eq!(stats.mean_ulp(), 0.0);
}

#[test]
fn exact_tanh_results_all_pass() {
    let stats = accumulate(&tanh_samples(), Thresholds::default());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.pass_count, 3);
    assert_eq!(stats.fail_count, 0);
    assert_eq!(stats.sum_error, 0.0);
    assert_eq!(stats.max_ulp, 0);
    assert!(stats.all_passed());
    assert_eq!(stats.pass_rate(), 100.0);
}

#[test]
fn failures_are_counted_and_reported_in_order() {
    let samples = vec![
        Sample::new(1.0, 1.0, up(1.0, 2)),
        Sample::new(2.0, 0.5, 0.6),
        Sample::new(3.0, 0.25, 0.25),
        Sample::new(4.0, 1.0, up(1.0, 3)),
    ];
    let (stats, failures) = accumulate_with_failures(&samples, Thresholds::default());
    assert_eq!(stats.total, 4);
    assert_eq!(stats.pass_count, 2);
    assert_eq!(stats.fail_count, 2);
    assert_eq!(stats.fail_rate(), 50.0);
    let indices: Vec<usize> = failures.iter().map(|row| row.index).collect();
    assert_eq!(indices, vec![1, 3]);
    assert_eq!(failures[1].comparison.ulp_distance, 3);
    assert_eq!(failures[0].sample.input, 2.0);
}

#[test]
fn sums_and_maxima_track_every_sample() {
    let samples = vec![
        Sample::new(0.0, 1.0, up(1.0, 1)),
        Sample::new(0.0, 1.0, up(1.0, 4)),
        Sample::new(0.0, 1.0, 1.0),
    ];
    let stats = accumulate(&samples, Thresholds::default());
    assert_eq!(stats.sum_ulp, 5);
    assert_eq!(stats.max_ulp, 4);
    assert_eq!(stats.max_error, 4.0 * f64::from(f32::EPSILON));
    assert!((stats.mean_ulp() - 5.0 / 3.0).abs() < 1e-12);
}

#[test]
fn opposite_infinities_pass_but_add_distance() {
    let samples = [Sample::new(100.0, f32::INFINITY, f32::NEG_INFINITY)];
    let stats = accumulate(&samples, Thresholds::default());
    assert_eq!(stats.pass_count, 1);
    assert_eq!(stats.sum_error, 0.0);
    assert_eq!(stats.max_ulp, 2 * 0x7f80_0000);
}

#[test]
fn lone_nan_fails_and_poisons_error_sum() {
    let samples = [
        Sample::new(0.0, 0.5, 0.5),
        Sample::new(0.0, 0.5, f32::NAN),
    ];
    let stats = accumulate(&samples, Thresholds::default());
    assert_eq!(stats.fail_count, 1);
    assert!(stats.sum_error.is_nan());
    assert_eq!(stats.max_error, 0.0);
}

#[test]
fn finite_result_against_infinite_reference_fails() {
    let close = Sample::new(0.0, 0.5, up(0.5, 1));
    let samples = [close, Sample::new(100.0, f32::INFINITY, 1.0)];
    let stats = accumulate(&samples, Thresholds::default());
    assert_eq!(stats.pass_count, 1);
    assert_eq!(stats.fail_count, 1);
    assert!(stats.sum_error.is_nan());
    assert_eq!(stats.max_error, relative_error(0.5, up(0.5, 1)));
    assert_eq!(stats.max_ulp, u64::from(0x7f80_0000_u32 - 0x3f80_0000));
}

#[test]
fn record_returns_comparison_and_verdict() {
    let mut stats = RunStatistics::default();
    let (cmp, verdict) = stats.record(&Sample::new(1.0, 1.0, up(1.0, 2)), Thresholds::new(1e-4, 1));
    assert_eq!(cmp.ulp_distance, 2);
    assert_eq!(verdict, Verdict::Fail);
    assert_eq!(stats.fail_count, 1);
}

#[test]
fn summary_lines_follow_report_format() {
    let samples = vec![
        Sample::new(0.0, 1.0, 1.0),
        Sample::new(0.0, 1.0, 2.0),
    ];
    let stats = accumulate(&samples, Thresholds::default());
    let [counts, errors, ulps] = stats.summary_lines();
    assert_eq!(counts, "Total=2, Pass=1 (50.00%), Fail=1 (50.00%)");
    assert!(errors.starts_with("AvgErr=5e-1, MaxErr=1e0"));
    assert_eq!(ulps, format!("AvgULP={:.2}, MaxULP={}", 0x0080_0000 as f64 / 2.0, 0x0080_0000));
    assert!(stats.to_string().contains("Total=2"));
}

proptest! {
    #[test]
    fn accumulation_is_idempotent(
        triples in prop::collection::vec((any::<f32>(), any::<f32>(), any::<f32>()), 0..100),
        ulp in 0u64..16,
    ) {
        let samples: Vec<Sample> = triples
            .into_iter()
            .map(|(i, r, c)| Sample::new(i, r, c))
            .collect();
        let thresholds = Thresholds::new(1e-4, ulp);
        let first = accumulate(&samples, thresholds);
        let second = accumulate(&samples, thresholds);
        prop_assert_eq!(first.total, second.total);
        prop_assert_eq!(first.pass_count, second.pass_count);
        prop_assert_eq!(first.fail_count, second.fail_count);
        prop_assert_eq!(first.sum_error.to_bits(), second.sum_error.to_bits());
        prop_assert_eq!(first.max_error.to_bits(), second.max_error.to_bits());
        prop_assert_eq!(first.sum_ulp, second.sum_ulp);
        prop_assert_eq!(first.max_ulp, second.max_ulp);
        prop_assert_eq!(first.pass_count + first.fail_count, samples.len() as u64);
    }
}
