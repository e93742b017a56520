//! Test a network with no seed referrers.

use crate::e2e_tests::helpers::*;
use crate::types::Capacity;

#[test]
fn test_empty_network_stays_empty() {
    let sim = seeded(0, Capacity::Unbounded);
    assert_eq!(sim.simulate(1.0, 5).unwrap(), vec![0; 5]);

    let state = sim.run(1.0, 5).unwrap();
    assert!(state.model().is_empty());
    assert_eq!(state.day(), 5);
    assert_invariants(&state);
}

#[test]
fn test_empty_network_zero_days() {
    assert!(seeded(0, Capacity::Unbounded).simulate(0.5, 0).unwrap().is_empty());
}
