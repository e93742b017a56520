//! Day-stepped growth simulator.
//!
//! Each public call builds its own [`SimulationState`] and its own random
//! generator from the configuration, so calls never influence each other.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::invariants::InvariantChecker;
use super::state::SimulationState;
use crate::config::SimulatorConfig;
use crate::error::{GrowthError, validate_capacity, validate_probability};
use crate::network::ReferralCapacityModel;

/// Runs the referral growth model and answers hire-count questions.
#[derive(Debug, Clone)]
pub struct GrowthSimulator {
    config: SimulatorConfig,
}

impl GrowthSimulator {
    /// Create a new simulator with the given configuration.
    #[must_use]
    pub const fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Cumulative hires at the end of each of `days` days.
    ///
    /// Entry `i` is the total through day `i + 1`; `days == 0` yields an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidArgument`] if `probability` is outside
    /// `[0, 1]` or the referral capacity is zero.
    pub fn simulate(&self, probability: f64, days: u64) -> Result<Vec<u64>, GrowthError> {
        Ok(self.run(probability, days)?.cumulative_series())
    }

    /// Simulate `days` days and return the final state.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidArgument`] if `probability` is outside
    /// `[0, 1]` or the referral capacity is zero.
    pub fn run(&self, probability: f64, days: u64) -> Result<SimulationState, GrowthError> {
        self.validate(probability)?;

        let (mut state, mut rng) = self.fresh_run();
        let mut checker = InvariantChecker::new();
        for _ in 0..days {
            state.step(probability, &mut rng)?;
            if cfg!(debug_assertions) {
                checker.check_day(&state);
            }
        }
        if cfg!(debug_assertions) {
            checker.check_state(&state);
        }
        for violation in checker.violations() {
            tracing::warn!(
                "invariant violation on day {}: {} ({})",
                violation.day,
                violation.description,
                violation.context
            );
        }

        tracing::info!(
            "simulated {} days at p={}: {} hires from {} seed referrers",
            days,
            probability,
            state.cumulative_hires(),
            self.config.seed_referrers
        );
        Ok(state)
    }

    /// First day (1-based) on which cumulative hires reach `target_total`.
    ///
    /// A target of zero is met before any day runs and returns `0`.
    ///
    /// # Errors
    ///
    /// - [`GrowthError::InvalidArgument`] if `probability` is outside `[0, 1]`
    ///   or the referral capacity is zero
    /// - [`GrowthError::UnreachableTarget`] once no referrer can ever hire
    ///   again (empty active pool, or a probability too small for any trial
    ///   to succeed) before the target is met
    pub fn days_to_target(&self, probability: f64, target_total: u64) -> Result<u64, GrowthError> {
        self.validate(probability)?;
        if target_total == 0 {
            return Ok(0);
        }

        let can_hire = ReferralCapacityModel::can_succeed(probability);
        let (mut state, mut rng) = self.fresh_run();
        loop {
            if !can_hire || !state.has_active_referrers() {
                tracing::info!(
                    "target of {} hires unreachable: stalled at {} hires after {} days",
                    target_total,
                    state.cumulative_hires(),
                    state.day()
                );
                return Err(GrowthError::UnreachableTarget {
                    target: target_total,
                    days_simulated: state.day(),
                    cumulative_hires: state.cumulative_hires(),
                });
            }

            state.step(probability, &mut rng)?;
            if state.cumulative_hires() >= target_total {
                tracing::info!(
                    "reached {} hires (target {}) on day {}",
                    state.cumulative_hires(),
                    target_total,
                    state.day()
                );
                return Ok(state.day());
            }
        }
    }

    fn validate(&self, probability: f64) -> Result<(), GrowthError> {
        validate_probability(probability)?;
        validate_capacity(self.config.referral_capacity)
    }

    /// A day-0 state and the generator for one run.
    fn fresh_run(&self) -> (SimulationState, StdRng) {
        let state =
            SimulationState::new(self.config.seed_referrers, self.config.referral_capacity);
        let rng = match self.config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        (state, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Capacity;

    fn simulator(seeds: u64, capacity: Capacity) -> GrowthSimulator {
        GrowthSimulator::new(SimulatorConfig::new(seeds, capacity).with_random_seed(12345))
    }

    #[test]
    fn test_simulate_length_matches_days() {
        let sim = simulator(10, Capacity::Limited(3));
        for days in [0, 1, 5, 20] {
            assert_eq!(sim.simulate(0.3, days).unwrap().len() as u64, days);
        }
    }

    #[test]
    fn test_simulate_zero_days_is_empty() {
        assert!(simulator(10, Capacity::Limited(3)).simulate(0.5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_simulate_rejects_bad_probability() {
        let sim = simulator(1, Capacity::Unbounded);
        for p in [-0.5, 1.000_001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                sim.simulate(p, 3),
                Err(GrowthError::InvalidArgument { name: "probability", .. })
            ));
        }
    }

    #[test]
    fn test_simulate_certain_success_doubles() {
        let series = simulator(2, Capacity::Unbounded).simulate(1.0, 5).unwrap();
        assert_eq!(series, vec![2, 6, 14, 30, 62]);
    }

    #[test]
    fn test_simulate_single_capacity_chain() {
        // Each hire refers exactly once, the day after it joins.
        let series = simulator(1, Capacity::Limited(1)).simulate(1.0, 3).unwrap();
        assert_eq!(series, vec![1, 2, 3]);
    }

    #[test]
    fn test_calls_do_not_share_state() {
        let sim = simulator(20, Capacity::Limited(2));
        let first = sim.simulate(0.4, 10).unwrap();
        let _ = sim.simulate(0.9, 10).unwrap();
        assert_eq!(sim.simulate(0.4, 10).unwrap(), first);
    }

    #[test]
    fn test_days_to_target_zero() {
        assert_eq!(simulator(0, Capacity::Limited(1)).days_to_target(0.0, 0), Ok(0));
    }

    #[test]
    fn test_days_to_target_certain_success() {
        let sim = simulator(2, Capacity::Unbounded);
        // Cumulative: 2, 6, 14, 30
        assert_eq!(sim.days_to_target(1.0, 2), Ok(1));
        assert_eq!(sim.days_to_target(1.0, 3), Ok(2));
        assert_eq!(sim.days_to_target(1.0, 30), Ok(4));
    }

    #[test]
    fn test_days_to_target_zero_probability_unreachable() {
        let err = simulator(5, Capacity::Limited(2))
            .days_to_target(0.0, 1)
            .unwrap_err();
        assert_eq!(
            err,
            GrowthError::UnreachableTarget {
                target: 1,
                days_simulated: 0,
                cumulative_hires: 0,
            }
        );
    }

    #[test]
    fn test_days_to_target_no_seeds_unreachable() {
        let err = simulator(0, Capacity::Unbounded)
            .days_to_target(1.0, 5)
            .unwrap_err();
        assert!(matches!(err, GrowthError::UnreachableTarget { .. }));
    }

    #[test]
    fn test_days_to_target_unrealisable_probability_unreachable() {
        let sim = simulator(1, Capacity::Limited(1));
        assert_eq!(
            sim.days_to_target(1e-20, 1),
            Err(GrowthError::UnreachableTarget {
                target: 1,
                days_simulated: 0,
                cumulative_hires: 0,
            })
        );
        assert_eq!(sim.simulate(1e-20, 3).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let sim = simulator(3, Capacity::Limited(0));
        assert!(matches!(
            sim.simulate(1.0, 3),
            Err(GrowthError::InvalidArgument { name: "referral_capacity", .. })
        ));
        assert!(matches!(
            sim.days_to_target(1.0, 1),
            Err(GrowthError::InvalidArgument { name: "referral_capacity", .. })
        ));
        assert!(matches!(
            sim.days_to_target(1.0, 0),
            Err(GrowthError::InvalidArgument { name: "referral_capacity", .. })
        ));
    }

    #[test]
    fn test_run_exposes_final_state() {
        let state = simulator(3, Capacity::Limited(2)).run(1.0, 2).unwrap();
        assert_eq!(state.day(), 2);
        assert_eq!(state.daily_hires(), &[3, 6]);
        assert_eq!(state.model().graph().edge_count(), 9);
    }
}
