//! Network state advanced one day at a time.

use rand::Rng;

use crate::error::GrowthError;
use crate::network::ReferralCapacityModel;
use crate::types::Capacity;

/// The referral network at a point in time.
///
/// # Invariants
///
/// - `cumulative_hires == daily_hires.iter().sum()`
/// - `model.len() == seed_count + cumulative_hires`
/// - `day == daily_hires.len()`
#[derive(Debug, Clone)]
pub struct SimulationState {
    model: ReferralCapacityModel,
    day: u64,
    cumulative_hires: u64,
    /// Hires per day; index is `day - 1`.
    daily_hires: Vec<u64>,
}

impl SimulationState {
    /// Create a state at day 0 holding `seed_count` fresh seed referrers.
    #[must_use]
    pub fn new(seed_count: u64, capacity: Capacity) -> Self {
        let mut model = ReferralCapacityModel::new(capacity);
        model.create_seed_referrers(seed_count);
        Self {
            model,
            day: 0,
            cumulative_hires: 0,
            daily_hires: Vec::new(),
        }
    }

    /// Advance one day and return the number of hires made that day.
    ///
    /// The active pool is captured before any attempt, so hires made today
    /// only start referring tomorrow.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        probability: f64,
        rng: &mut R,
    ) -> Result<u64, GrowthError> {
        let active = self.model.active_referrers();
        let mut hires = 0;
        for referrer in &active {
            if self
                .model
                .attempt_referral(*referrer, probability, rng)?
                .is_some()
            {
                hires += 1;
            }
        }

        self.daily_hires.push(hires);
        self.cumulative_hires += hires;
        self.day += 1;

        tracing::debug!(
            "day {}: {} active referrers, {} hires, {} cumulative",
            self.day,
            active.len(),
            hires,
            self.cumulative_hires
        );
        Ok(hires)
    }

    /// Whether any referrer still has capacity left.
    #[must_use]
    pub fn has_active_referrers(&self) -> bool {
        self.model.referrers().iter().any(|r| r.is_active())
    }

    /// Cumulative hires through each simulated day.
    #[must_use]
    pub fn cumulative_series(&self) -> Vec<u64> {
        self.daily_hires
            .iter()
            .scan(0u64, |total, &hires| {
                *total += hires;
                Some(*total)
            })
            .collect()
    }

    /// Days simulated so far.
    #[must_use]
    pub const fn day(&self) -> u64 {
        self.day
    }

    /// Total hires so far.
    #[must_use]
    pub const fn cumulative_hires(&self) -> u64 {
        self.cumulative_hires
    }

    /// Hires per day; index is `day - 1`.
    #[must_use]
    pub fn daily_hires(&self) -> &[u64] {
        &self.daily_hires
    }

    /// The underlying capacity model.
    #[must_use]
    pub const fn model(&self) -> &ReferralCapacityModel {
        &self.model
    }
}
