//! Common helpers for end-to-end tests.

use crate::config::SimulatorConfig;
use crate::simulation::{GrowthSimulator, InvariantChecker, SimulationState};
use crate::types::Capacity;

/// Seed used by tests that don't care about the particular draw.
pub const TEST_SEED: u64 = 12345;

/// Create a simulator with a fixed random seed.
#[must_use]
pub fn seeded(seed_referrers: u64, capacity: Capacity) -> GrowthSimulator {
    seeded_with(seed_referrers, capacity, TEST_SEED)
}

/// Create a simulator with the given random seed.
#[must_use]
pub fn seeded_with(seed_referrers: u64, capacity: Capacity, seed: u64) -> GrowthSimulator {
    GrowthSimulator::new(SimulatorConfig::new(seed_referrers, capacity).with_random_seed(seed))
}

/// Whether a cumulative series never decreases.
#[must_use]
pub fn is_non_decreasing(series: &[u64]) -> bool {
    series.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Assert that a finished state satisfies every bookkeeping invariant.
pub fn assert_invariants(state: &SimulationState) {
    let mut checker = InvariantChecker::new();
    checker.check_state(state);
    assert!(
        !checker.has_violations(),
        "invariant violations: {:?}",
        checker.violations()
    );
}
