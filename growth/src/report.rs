//! Serializable summaries of simulation runs.
//!
//! Reports are what the command line prints: JSON through `serde_json`, or
//! plain text through `Display`.

use std::fmt;

use serde::Serialize;

use crate::config::SimulatorConfig;
use crate::simulation::SimulationState;
use crate::types::{Capacity, ReferrerId};

/// A referrer together with its downstream reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedReferrer {
    pub id: ReferrerId,
    pub reach: usize,
}

/// Summary of one stochastic run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub probability: f64,
    pub days: u64,
    pub seed_referrers: u64,
    pub referral_capacity: Capacity,
    pub random_seed: Option<u64>,
    pub daily_hires: Vec<u64>,
    pub cumulative_hires: Vec<u64>,
    pub total_referrers: usize,
    pub exhausted_referrers: usize,
    pub top_referrers: Vec<RankedReferrer>,
}

impl SimulationReport {
    /// Summarise a finished state, ranking the `top_k` referrers by reach.
    #[must_use]
    pub fn from_state(
        config: &SimulatorConfig,
        probability: f64,
        state: &SimulationState,
        top_k: usize,
    ) -> Self {
        let model = state.model();
        let top_referrers = if top_k == 0 {
            Vec::new()
        } else {
            model
                .graph()
                .top_referrers(top_k)
                .into_iter()
                .map(|(id, reach)| RankedReferrer { id, reach })
                .collect()
        };

        Self {
            probability,
            days: state.day(),
            seed_referrers: config.seed_referrers,
            referral_capacity: config.referral_capacity,
            random_seed: config.random_seed,
            daily_hires: state.daily_hires().to_vec(),
            cumulative_hires: state.cumulative_series(),
            total_referrers: model.len(),
            exhausted_referrers: model.referrers().iter().filter(|r| !r.is_active()).count(),
            top_referrers,
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} seed referrers, capacity {}, p={}",
            self.seed_referrers, self.referral_capacity, self.probability
        )?;
        for (idx, (daily, cumulative)) in self
            .daily_hires
            .iter()
            .zip(&self.cumulative_hires)
            .enumerate()
        {
            writeln!(f, "day {:>4}: +{daily} -> {cumulative}", idx + 1)?;
        }
        write!(
            f,
            "{} referrers, {} exhausted",
            self.total_referrers, self.exhausted_referrers
        )?;
        for ranked in &self.top_referrers {
            write!(f, "\n{} reach {}", ranked.id, ranked.reach)?;
        }
        Ok(())
    }
}

/// Outcome of a days-to-target query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TargetReport {
    pub target: u64,
    pub days: u64,
}

impl fmt::Display for TargetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hires reached on day {}", self.target, self.days)
    }
}

/// Expected-value projection over a number of days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpectedReport {
    pub probability: f64,
    pub initial_referrers: u64,
    pub referral_capacity: Capacity,
    pub cumulative_hires: Vec<f64>,
}

impl fmt::Display for ExpectedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} seed referrers, capacity {}, p={} (expected values)",
            self.initial_referrers, self.referral_capacity, self.probability
        )?;
        for (idx, cumulative) in self.cumulative_hires.iter().enumerate() {
            write!(f, "\nday {:>4}: {cumulative:.2}", idx + 1)?;
        }
        Ok(())
    }
}
