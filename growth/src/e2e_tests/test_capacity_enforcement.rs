//! Test that no referrer ever exceeds its referral capacity.

use crate::e2e_tests::helpers::*;
use crate::types::Capacity;

#[test]
fn test_no_referrer_exceeds_capacity() {
    for (capacity, p) in [(1, 0.9), (3, 0.5), (5, 0.25)] {
        let state = seeded(20, Capacity::Limited(capacity)).run(p, 15).unwrap();
        for referrer in state.model().referrers() {
            assert!(
                referrer.referral_count <= capacity,
                "{} made {} referrals with capacity {capacity}",
                referrer.id,
                referrer.referral_count
            );
        }
        assert_invariants(&state);
    }
}

#[test]
fn test_daily_hires_bounded_by_active_pool() {
    let sim = seeded(10, Capacity::Limited(2));
    let state = sim.run(0.7, 15).unwrap();
    let series = state.cumulative_series();

    assert!(is_non_decreasing(&series));
    // Population at the start of day d is 10 + cumulative through day d - 1,
    // so no day can hire more than that.
    let mut population = 10;
    for &hires in state.daily_hires() {
        assert!(hires <= population);
        population += hires;
    }
}

#[test]
fn test_exhausted_referrers_are_retained() {
    let state = seeded(4, Capacity::Limited(1)).run(1.0, 3).unwrap();
    let exhausted = state
        .model()
        .referrers()
        .iter()
        .filter(|r| !r.is_active())
        .count();
    // Every referrer that existed before day 3 has referred once.
    assert_eq!(exhausted, 12);
    assert_eq!(state.model().len(), 16);
    assert_eq!(state.cumulative_hires(), 12);
}
