//! Test that the lineage graph of a run mirrors its referral counts.

use crate::e2e_tests::helpers::*;
use crate::types::{Capacity, ReferrerId};

#[test]
fn test_lineage_matches_referral_counts() {
    let state = seeded(15, Capacity::Limited(3)).run(0.45, 12).unwrap();
    let model = state.model();
    let graph = model.graph();

    assert_eq!(graph.node_count(), model.len());
    assert_eq!(graph.edge_count() as u64, state.cumulative_hires());
    for referrer in model.referrers() {
        assert_eq!(
            graph.direct_referrals(referrer.id).len() as u64,
            referrer.referral_count
        );
    }
}

#[test]
fn test_seeds_have_no_referrer() {
    let state = seeded(5, Capacity::Limited(2)).run(1.0, 3).unwrap();
    let graph = state.model().graph();

    for seed in 0..5 {
        assert_eq!(graph.referrer_of(ReferrerId(seed)), None);
    }
    for hire in 5..state.model().len() as u64 {
        assert!(graph.referrer_of(ReferrerId(hire)).is_some());
    }
}

#[test]
fn test_top_referrer_is_a_seed() {
    // With p = 1 every seed has the same reach, and seeds come first.
    let state = seeded(3, Capacity::Unbounded).run(1.0, 4).unwrap();
    let top = state.model().graph().top_referrers(3);
    assert_eq!(
        top.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
        vec![ReferrerId(0), ReferrerId(1), ReferrerId(2)]
    );
    // Each seed's subtree doubles daily: 2^4 - 1 descendants.
    assert!(top.iter().all(|&(_, reach)| reach == 15));
}
