//! Invariant checking for simulation runs.
//!
//! Verifies the bookkeeping of a [`SimulationState`]. [`InvariantChecker::check_day`]
//! is constant-time and runs after every simulated day; [`InvariantChecker::check_state`]
//! also walks the full history and every referrer, and runs once per run.

use super::state::SimulationState;
use crate::types::Capacity;

/// An invariant violation detected during simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Day at which it was detected.
    pub day: u64,
    /// Additional context.
    pub context: String,
}

/// Checker for simulation state invariants.
#[derive(Debug, Default)]
pub struct InvariantChecker {
    /// Detected violations.
    violations: Vec<InvariantViolation>,
}

impl InvariantChecker {
    /// Create a new invariant checker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Get all violations.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Check if any violations were detected.
    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Add a violation.
    pub fn add_violation(&mut self, violation: InvariantViolation) {
        self.violations.push(violation);
    }

    /// Check that cumulative hires equal the sum of daily hires.
    pub fn check_hire_totals(&mut self, state: &SimulationState) {
        let sum: u64 = state.daily_hires().iter().sum();
        if sum != state.cumulative_hires() {
            self.violations.push(InvariantViolation {
                description: "Cumulative hires differ from sum of daily hires".to_string(),
                day: state.day(),
                context: format!("cumulative {}, sum {}", state.cumulative_hires(), sum),
            });
        }
    }

    /// Check that the day counter matches the number of recorded days.
    pub fn check_day_counter(&mut self, state: &SimulationState) {
        let recorded = state.daily_hires().len() as u64;
        if recorded != state.day() {
            self.violations.push(InvariantViolation {
                description: "Day counter differs from recorded days".to_string(),
                day: state.day(),
                context: format!("recorded {recorded} days"),
            });
        }
    }

    /// Check that every hire added exactly one referrer and one lineage edge.
    pub fn check_population(&mut self, state: &SimulationState) {
        let model = state.model();
        let expected = model.seed_count() + state.cumulative_hires();
        if model.len() as u64 != expected {
            self.violations.push(InvariantViolation {
                description: "Population differs from seeds plus hires".to_string(),
                day: state.day(),
                context: format!("population {}, expected {}", model.len(), expected),
            });
        }

        let edges = model.graph().edge_count() as u64;
        if edges != state.cumulative_hires() {
            self.violations.push(InvariantViolation {
                description: "Lineage edges differ from hires".to_string(),
                day: state.day(),
                context: format!("edges {}, hires {}", edges, state.cumulative_hires()),
            });
        }
    }

    /// Check that no referrer exceeds its capacity.
    pub fn check_capacity(&mut self, state: &SimulationState) {
        for referrer in state.model().referrers() {
            let over = match referrer.capacity {
                Capacity::Limited(max) => referrer.referral_count > max,
                Capacity::Unbounded => false,
            };
            if over {
                self.violations.push(InvariantViolation {
                    description: "Referrer exceeded its capacity".to_string(),
                    day: state.day(),
                    context: format!(
                        "{} made {} referrals with capacity {}",
                        referrer.id, referrer.referral_count, referrer.capacity
                    ),
                });
            }
        }
    }

    /// Checks that only look at running totals, cheap enough to run every day.
    pub fn check_day(&mut self, state: &SimulationState) {
        self.check_day_counter(state);
        self.check_population(state);
    }

    /// Run all checks on a state.
    pub fn check_state(&mut self, state: &SimulationState) {
        self.check_hire_totals(state);
        self.check_day_counter(state);
        self.check_population(state);
        self.check_capacity(state);
    }
}
