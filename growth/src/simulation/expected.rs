//! Expected-value growth projection.
//!
//! A deterministic counterpart to [`GrowthSimulator`](super::GrowthSimulator):
//! instead of drawing Bernoulli trials it books the expected number of hires
//! each day, `active * p`, as a fractional amount. Only the seed cohort refers;
//! hires are counted but do not join the pool. Remaining capacity is drained
//! evenly across the pool, and a referrer leaves the pool once its remaining
//! capacity reaches zero.

use crate::error::{GrowthError, validate_capacity, validate_probability};
use crate::types::Capacity;

/// Deterministic projection of the seed cohort's expected hires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedGrowthModel {
    initial_referrers: u64,
    capacity: Capacity,
}

impl ExpectedGrowthModel {
    /// Create a projection for `initial_referrers` seeds of the given capacity.
    #[must_use]
    pub const fn new(initial_referrers: u64, capacity: Capacity) -> Self {
        Self {
            initial_referrers,
            capacity,
        }
    }

    /// Expected cumulative hires at the end of each of `days` days.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidArgument`] if `probability` is outside
    /// `[0, 1]` or the capacity is zero.
    pub fn simulate(&self, probability: f64, days: u64) -> Result<Vec<f64>, GrowthError> {
        validate_probability(probability)?;
        validate_capacity(self.capacity)?;

        let mut pool = self.initial_pool();
        let mut cumulative = 0.0;
        let mut totals = Vec::new();
        for _ in 0..days {
            cumulative += Self::step(&mut pool, probability);
            totals.push(cumulative);
        }
        Ok(totals)
    }

    /// First day on which expected cumulative hires reach `target_total`.
    ///
    /// # Errors
    ///
    /// - [`GrowthError::InvalidArgument`] if `probability` is outside `[0, 1]`
    ///   or the capacity is zero
    /// - [`GrowthError::UnreachableTarget`] if the pool empties or a day adds
    ///   no expected hires before the target is met
    #[allow(clippy::cast_precision_loss)] // Targets beyond 2^53 hires are not meaningful
    pub fn days_to_target(&self, probability: f64, target_total: u64) -> Result<u64, GrowthError> {
        validate_probability(probability)?;
        validate_capacity(self.capacity)?;

        let target = target_total as f64;
        let mut pool = self.initial_pool();
        let mut cumulative = 0.0;
        let mut days = 0;
        while cumulative < target {
            let hires = Self::step(&mut pool, probability);
            if hires <= 0.0 {
                return Err(Self::unreachable(target_total, days, cumulative));
            }
            cumulative += hires;
            days += 1;
        }
        Ok(days)
    }

    /// Book one day of expected hires and drain capacity from the pool.
    #[allow(clippy::cast_precision_loss)] // Pool sizes beyond 2^53 are not meaningful
    fn step(pool: &mut Vec<f64>, probability: f64) -> f64 {
        if pool.is_empty() {
            return 0.0;
        }
        let active = pool.len() as f64;
        let remaining: f64 = pool.iter().sum();
        let expected = (active * probability).min(remaining);

        let per_referrer = expected / active;
        for capacity in pool.iter_mut() {
            *capacity -= per_referrer;
        }
        pool.retain(|&capacity| capacity > 0.0);
        expected
    }

    fn initial_pool(&self) -> Vec<f64> {
        (0..self.initial_referrers)
            .map(|_| self.capacity.as_f64())
            .collect()
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Non-negative, floored
    fn unreachable(target: u64, days_simulated: u64, cumulative: f64) -> GrowthError {
        GrowthError::UnreachableTarget {
            target,
            days_simulated,
            cumulative_hires: cumulative.floor() as u64,
        }
    }
}
