//! Sensitivity sweep tests

use crate::analysis::{Lever, SweepMetric, sample_points, stride, sweep};
use crate::error::SweepError;
use crate::evaluate::compute;
use crate::model::RoiScenario;

#[test]
fn test_stride_by_step_count() {
    assert_eq!(stride(2), Ok(40));
    assert_eq!(stride(5), Ok(10));
    assert_eq!(stride(15), Ok(2));
    assert_eq!(stride(30), Ok(1));
    assert_eq!(stride(41), Ok(1));
    assert_eq!(stride(500), Ok(1));
}

#[test]
fn test_sample_counts() {
    // (steps, expected number of points)
    let cases = [(2, 2), (5, 5), (7, 7), (15, 21), (20, 21), (21, 21), (22, 41), (30, 41)];
    for (steps, expected) in cases {
        let points = sample_points(steps).unwrap();
        assert_eq!(points.len(), expected, "steps = {steps}");
    }
}

#[test]
fn test_sample_values_are_whole_percentages() {
    let points = sample_points(7).unwrap();
    // stride is floor(40 / 6) = 6
    assert_eq!(points, vec![0.0, 0.06, 0.12, 0.18, 0.24, 0.30, 0.36]);
}

#[test]
fn test_too_few_steps_rejected() {
    let base = RoiScenario::default();
    assert_eq!(
        sweep(&base, Lever::ManpowerReduction, 1),
        Err(SweepError::TooFewSteps { steps: 1 })
    );
    assert_eq!(
        sweep(&base, Lever::ProductivityGain, 0),
        Err(SweepError::TooFewSteps { steps: 0 })
    );
}

#[test]
fn test_sweep_bounds_and_order() {
    let base = RoiScenario::default();
    for lever in Lever::ALL {
        for steps in 2..=45 {
            let points = sweep(&base, lever, steps).unwrap();
            assert_eq!(points.first().map(|p| p.lever_value), Some(0.0));
            assert!(points.last().is_some_and(|p| p.lever_value <= 0.40));
            assert!(
                points.windows(2).all(|w| w[0].lever_value < w[1].lever_value),
                "{lever:?} with {steps} steps is not ascending"
            );
            assert_eq!(points.len(), sample_points(steps).unwrap().len());
        }
    }
}

#[test]
fn test_sweep_varies_only_the_lever() {
    let base = RoiScenario::default();
    let points = sweep(&base, Lever::ManpowerReduction, 5).unwrap();

    for point in &points {
        let expected = compute(&RoiScenario {
            manpower_reduction: point.lever_value,
            ..base
        });
        assert_eq!(point.result, expected);
        assert_eq!(point.result.productivity_gain, base.productivity_gain);
        assert_eq!(point.result.labor_share, base.labor_share);
    }
}

#[test]
fn test_productivity_sweep_leaves_cost_flat() {
    let base = RoiScenario::default();
    let points = sweep(&base, Lever::ProductivityGain, 5).unwrap();
    let savings = SweepMetric::Savings.series(&points);

    assert!(savings.iter().all(|(_, s)| *s == savings[0].1));
    let last = points.last().map(|p| p.result.throughput_multiplier).unwrap();
    assert!((last - 1.40).abs() < 1e-12);
}

#[test]
fn test_manpower_sweep_improves_roi() {
    let points = sweep(&RoiScenario::default(), Lever::ManpowerReduction, 5).unwrap();
    let roi = SweepMetric::Roi.series(&points);
    assert!(roi.windows(2).all(|w| w[0].1 < w[1].1));

    let (lo, hi) = SweepMetric::Roi.range(&points).unwrap();
    assert_eq!(lo, roi[0].1);
    assert_eq!(hi, roi[roi.len() - 1].1);
}

#[test]
fn test_sweep_is_restartable() {
    let base = RoiScenario {
        platform_cost: 750_000.0,
        ..RoiScenario::default()
    };
    let first = sweep(&base, Lever::ManpowerReduction, 15).unwrap();
    let second = sweep(&base, Lever::ManpowerReduction, 15).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_metric_range_of_empty_sweep() {
    assert_eq!(SweepMetric::Savings.range(&[]), None);
}

#[test]
fn test_lever_toggle_round_trips() {
    for lever in Lever::ALL {
        assert_ne!(lever.toggled(), lever);
        assert_eq!(lever.toggled().toggled(), lever);
    }
}
