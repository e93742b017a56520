//! Test the days-to-target query against full simulations.

use crate::GrowthError;
use crate::e2e_tests::helpers::*;
use crate::types::Capacity;

#[test]
fn test_matches_first_day_in_simulation() {
    let sim = seeded(50, Capacity::Limited(3));
    let series = sim.simulate(0.3, 60).unwrap();

    for target in [1, 25, 100, 400] {
        let days = sim.days_to_target(0.3, target).unwrap();
        let first = series.iter().position(|&c| c >= target).unwrap() as u64 + 1;
        assert_eq!(days, first, "target = {target}");
    }
}

#[test]
fn test_target_exceeded_counts() {
    // Cumulative jumps 2 -> 6, so a target of 4 is first met on day 2.
    assert_eq!(seeded(2, Capacity::Unbounded).days_to_target(1.0, 4), Ok(2));
}

#[test]
fn test_bad_probability_rejected_before_running() {
    let err = seeded(1, Capacity::Unbounded)
        .days_to_target(1.5, 10)
        .unwrap_err();
    assert!(matches!(err, GrowthError::InvalidArgument { .. }));
}

#[test]
fn test_unreachable_reports_progress() {
    // Without seeds there is nobody to refer.
    let err = seeded(0, Capacity::Limited(5))
        .days_to_target(0.5, 3)
        .unwrap_err();
    let GrowthError::UnreachableTarget {
        target,
        days_simulated,
        cumulative_hires,
    } = err
    else {
        panic!("expected UnreachableTarget, got {err:?}");
    };
    assert_eq!(target, 3);
    assert_eq!(days_simulated, 0);
    assert_eq!(cumulative_hires, 0);
}
