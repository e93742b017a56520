//! Referral capacity model.
//!
//! Keeps the referrer arena, enforces per-referrer capacity, and decides each
//! referral attempt with a Bernoulli trial drawn from a caller-supplied
//! generator.
//!
//! # Invariants
//!
//! - `0 <= referral_count <= capacity` for every referrer.
//! - `index[id]` is the arena position of `id`; arena order is creation order.
//! - `referrers.len() == seed_count + successful referrals`.
//! - Every successful referral is recorded as one edge in the lineage graph.

use std::collections::HashMap;

use rand::Rng;
use rand::distr::{Bernoulli, Distribution};

use super::graph::ReferralGraph;
use crate::error::GrowthError;
use crate::types::{Capacity, ReferrerId};

/// Resolution of a referral trial: probabilities are realised as multiples of 2^-64.
const TRIAL_RESOLUTION: f64 = 18_446_744_073_709_551_616.0;

/// One individual able to produce referrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Referrer {
    /// Identifier assigned at creation.
    pub id: ReferrerId,
    /// Successful referrals attributed to this referrer so far.
    pub referral_count: u64,
    /// Maximum referrals this referrer may ever produce.
    pub capacity: Capacity,
}

impl Referrer {
    /// Whether this referrer may still attempt referrals.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.capacity.allows(self.referral_count)
    }
}

/// Referrer bookkeeping plus the per-attempt referral decision.
#[derive(Debug, Clone)]
pub struct ReferralCapacityModel {
    default_capacity: Capacity,
    /// All referrers in creation order.
    referrers: Vec<Referrer>,
    /// Referrer ID -> arena index.
    index: HashMap<ReferrerId, usize>,
    next_id: ReferrerId,
    seed_count: u64,
    graph: ReferralGraph,
}

impl ReferralCapacityModel {
    /// Create an empty model whose referrers get `default_capacity`.
    #[must_use]
    pub fn new(default_capacity: Capacity) -> Self {
        Self {
            default_capacity,
            referrers: Vec::new(),
            index: HashMap::new(),
            next_id: ReferrerId(0),
            seed_count: 0,
            graph: ReferralGraph::new(),
        }
    }

    /// Register `count` seed referrers with no referrals yet.
    ///
    /// A count of zero is valid and leaves the network empty.
    pub fn create_seed_referrers(&mut self, count: u64) -> Vec<ReferrerId> {
        let ids: Vec<ReferrerId> = (0..count).map(|_| self.register()).collect();
        self.seed_count += count;
        ids
    }

    /// Attempt one referral from `referrer_id` with success probability `probability`.
    ///
    /// On success the referrer's count is incremented and a new referrer is
    /// created and returned. On failure nothing changes and `None` is returned.
    ///
    /// # Errors
    ///
    /// - [`GrowthError::InvalidProbability`] if `probability` is outside `[0, 1]`
    /// - [`GrowthError::UnknownReferrer`] if the ID was never issued by this model
    /// - [`GrowthError::ExhaustedReferrer`] if the referrer is at capacity
    ///
    /// No state is mutated when an error is returned.
    pub fn attempt_referral<R: Rng + ?Sized>(
        &mut self,
        referrer_id: ReferrerId,
        probability: f64,
        rng: &mut R,
    ) -> Result<Option<ReferrerId>, GrowthError> {
        let trial =
            Bernoulli::new(probability).map_err(|_| GrowthError::InvalidProbability(probability))?;
        let &slot = self
            .index
            .get(&referrer_id)
            .ok_or(GrowthError::UnknownReferrer(referrer_id))?;
        if !self.referrers[slot].is_active() {
            return Err(GrowthError::ExhaustedReferrer(referrer_id));
        }

        if !trial.sample(rng) {
            return Ok(None);
        }

        self.graph.add_referral(referrer_id, self.next_id)?;
        self.referrers[slot].referral_count += 1;
        let hire = self.register();
        Ok(Some(hire))
    }

    /// Whether a referral trial at `probability` can ever succeed.
    ///
    /// Probabilities below the trial resolution sample as zero, as do NaN and
    /// negative values.
    #[must_use]
    pub const fn can_succeed(probability: f64) -> bool {
        probability * TRIAL_RESOLUTION >= 1.0
    }

    /// IDs of referrers with capacity left, in creation order.
    #[must_use]
    pub fn active_referrers(&self) -> Vec<ReferrerId> {
        self.referrers
            .iter()
            .filter(|r| r.is_active())
            .map(|r| r.id)
            .collect()
    }

    /// Look up a referrer by ID.
    #[must_use]
    pub fn referrer(&self, id: ReferrerId) -> Option<&Referrer> {
        self.index.get(&id).map(|&slot| &self.referrers[slot])
    }

    /// All referrers in creation order, exhausted ones included.
    #[must_use]
    pub fn referrers(&self) -> &[Referrer] {
        &self.referrers
    }

    /// Total number of referrers ever created.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.referrers.len()
    }

    /// Whether no referrer exists.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.referrers.is_empty()
    }

    /// Number of seed referrers registered.
    #[must_use]
    pub const fn seed_count(&self) -> u64 {
        self.seed_count
    }

    /// Capacity given to new referrers.
    #[must_use]
    pub const fn default_capacity(&self) -> Capacity {
        self.default_capacity
    }

    /// Who-referred-whom lineage of every successful referral.
    #[must_use]
    pub const fn graph(&self) -> &ReferralGraph {
        &self.graph
    }

    fn register(&mut self) -> ReferrerId {
        let id = self.next_id;
        self.next_id = id.next();
        self.index.insert(id, self.referrers.len());
        self.referrers.push(Referrer {
            id,
            referral_count: 0,
            capacity: self.default_capacity,
        });
        self.graph.add_referrer(id);
        id
    }
}
