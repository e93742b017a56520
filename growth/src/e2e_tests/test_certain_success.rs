//! Test growth when every referral attempt succeeds.

use crate::e2e_tests::helpers::*;
use crate::types::Capacity;

#[test]
fn test_unbounded_growth_doubles_population() {
    for seeds in [1u64, 2, 5] {
        let series = seeded(seeds, Capacity::Unbounded).simulate(1.0, 10).unwrap();
        let expected: Vec<u64> = (1..=10).map(|d| seeds * ((1 << d) - 1)).collect();
        assert_eq!(series, expected, "seeds = {seeds}");
    }
}

#[test]
fn test_two_seeds_unbounded() {
    let series = seeded(2, Capacity::Unbounded).simulate(1.0, 4).unwrap();
    assert_eq!(series, vec![2, 6, 14, 30]);
}

#[test]
fn test_single_capacity_grows_by_one_per_day() {
    // The seed refers once and is exhausted; each hire refers once the next day.
    let series = seeded(1, Capacity::Limited(1)).simulate(1.0, 3).unwrap();
    assert_eq!(series, vec![1, 2, 3]);
}

#[test]
fn test_capacity_two_is_fibonacci_like() {
    // Active pool: day 1 {s}, day 2 {s, a}, day 3 {a, b, c}, day 4 {b, c, d, e, f}
    let state = seeded(1, Capacity::Limited(2)).run(1.0, 4).unwrap();
    assert_eq!(state.daily_hires(), &[1, 2, 3, 5]);
    assert_invariants(&state);
}
