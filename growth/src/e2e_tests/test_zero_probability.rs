//! Test that a zero referral probability never produces a hire.

use crate::GrowthError;
use crate::e2e_tests::helpers::*;
use crate::types::Capacity;

#[test]
fn test_simulate_all_zeros() {
    let series = seeded(100, Capacity::Unbounded).simulate(0.0, 25).unwrap();
    assert_eq!(series, vec![0; 25]);
}

#[test]
fn test_days_to_target_unreachable() {
    for target in [1, 10, 1_000_000] {
        let err = seeded(100, Capacity::Limited(10))
            .days_to_target(0.0, target)
            .unwrap_err();
        assert_eq!(
            err,
            GrowthError::UnreachableTarget {
                target,
                days_simulated: 0,
                cumulative_hires: 0,
            }
        );
    }
}

#[test]
fn test_zero_target_is_met_immediately() {
    assert_eq!(seeded(100, Capacity::Limited(10)).days_to_target(0.0, 0), Ok(0));
}
