//! Referral lineage graph.
//!
//! Records which referrer brought in which hire and answers reach and
//! influence questions over the resulting forest.
//!
//! # Invariants
//!
//! - No node refers itself.
//! - Every node has at most one referrer.
//! - The graph is acyclic.
//! - Node order is insertion order; every query that ranks nodes breaks ties
//!   by that order, so results are deterministic.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::types::ReferrerId;

/// Error returned when a referral edge would break a lineage constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A referrer tried to refer itself.
    SelfReferral(ReferrerId),
    /// The candidate already has a referrer.
    AlreadyReferred {
        candidate: ReferrerId,
        existing_referrer: ReferrerId,
    },
    /// The candidate can already reach the referrer, so the edge would close a cycle.
    CycleDetected {
        referrer: ReferrerId,
        candidate: ReferrerId,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfReferral(id) => write!(f, "{id} cannot refer itself"),
            Self::AlreadyReferred {
                candidate,
                existing_referrer,
            } => write!(f, "{candidate} was already referred by {existing_referrer}"),
            Self::CycleDetected {
                referrer,
                candidate,
            } => write!(f, "referral {referrer} -> {candidate} would create a cycle"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Directed referrer -> candidate graph.
#[derive(Debug, Clone, Default)]
pub struct ReferralGraph {
    /// Nodes in insertion order.
    nodes: Vec<ReferrerId>,
    /// Direct referrals per node, in the order they were made.
    children: HashMap<ReferrerId, Vec<ReferrerId>>,
    /// Candidate -> referrer.
    parent: HashMap<ReferrerId, ReferrerId>,
    edge_count: usize,
}

impl ReferralGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a node exists. Idempotent.
    pub fn add_referrer(&mut self, id: ReferrerId) {
        if !self.children.contains_key(&id) {
            self.children.insert(id, Vec::new());
            self.nodes.push(id);
        }
    }

    /// Add the edge `referrer -> candidate`.
    ///
    /// Both endpoints are registered as nodes even when the edge is rejected.
    ///
    /// # Errors
    ///
    /// - [`GraphError::SelfReferral`] if `referrer == candidate`
    /// - [`GraphError::AlreadyReferred`] if `candidate` already has a referrer
    /// - [`GraphError::CycleDetected`] if `candidate` can reach `referrer`
    pub fn add_referral(
        &mut self,
        referrer: ReferrerId,
        candidate: ReferrerId,
    ) -> Result<(), GraphError> {
        self.add_referrer(referrer);
        self.add_referrer(candidate);

        if referrer == candidate {
            return Err(GraphError::SelfReferral(referrer));
        }
        if let Some(&existing_referrer) = self.parent.get(&candidate) {
            return Err(GraphError::AlreadyReferred {
                candidate,
                existing_referrer,
            });
        }
        if self.is_reachable(candidate, referrer) {
            return Err(GraphError::CycleDetected {
                referrer,
                candidate,
            });
        }

        self.children.entry(referrer).or_default().push(candidate);
        self.parent.insert(candidate, referrer);
        self.edge_count += 1;
        Ok(())
    }

    /// Number of nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of referral edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[ReferrerId] {
        &self.nodes
    }

    /// Direct referrals made by `id`, in the order they were made.
    #[must_use]
    pub fn direct_referrals(&self, id: ReferrerId) -> &[ReferrerId] {
        self.children.get(&id).map_or(&[][..], Vec::as_slice)
    }

    /// The referrer who brought in `id`, if any.
    #[must_use]
    pub fn referrer_of(&self, id: ReferrerId) -> Option<ReferrerId> {
        self.parent.get(&id).copied()
    }

    /// Number of direct and indirect referrals downstream of `id`.
    ///
    /// Complexity: O(V + E).
    #[must_use]
    pub fn total_referrals(&self, id: ReferrerId) -> usize {
        self.downstream(id).len()
    }

    /// The `k` nodes with the largest reach, as `(id, reach)` pairs sorted by
    /// reach descending.
    #[must_use]
    pub fn top_referrers(&self, k: usize) -> Vec<(ReferrerId, usize)> {
        let mut counts: Vec<(ReferrerId, usize)> = self
            .nodes
            .iter()
            .map(|&id| (id, self.total_referrals(id)))
            .collect();
        // Stable sort keeps insertion order among equal reach.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(k);
        counts
    }

    /// Nodes ordered by greedy marginal unique reach.
    ///
    /// Repeatedly picks the node whose downstream set adds the most nodes not
    /// yet covered by earlier picks, stopping once no node adds anything.
    #[must_use]
    pub fn unique_reach_expansion(&self) -> Vec<ReferrerId> {
        let reach_sets: Vec<(ReferrerId, HashSet<ReferrerId>)> = self
            .nodes
            .iter()
            .map(|&id| (id, self.downstream(id)))
            .collect();
        let mut covered: HashSet<ReferrerId> = HashSet::new();
        let mut picked = vec![false; reach_sets.len()];
        let mut selected = Vec::new();

        loop {
            let mut best: Option<(usize, usize)> = None;
            for (idx, (_, reach)) in reach_sets.iter().enumerate() {
                if picked[idx] {
                    continue;
                }
                let gain = reach.difference(&covered).count();
                if gain > best.map_or(0, |(_, g)| g) {
                    best = Some((idx, gain));
                }
            }
            let Some((idx, _)) = best else {
                break;
            };
            picked[idx] = true;
            let (id, reach) = &reach_sets[idx];
            selected.push(*id);
            covered.extend(reach.iter().copied());
        }

        selected
    }

    /// Betweenness-like centrality over shortest referral paths.
    ///
    /// For every ordered pair `(s, t)` with `t` reachable from `s`, each other
    /// node `v` with `dist(s, v) + dist(v, t) == dist(s, t)` scores one point.
    /// Returns nodes with a positive score, highest first.
    ///
    /// Complexity: O(V * (V + E)) for distances plus O(V^3) for the triple scan.
    #[must_use]
    pub fn flow_centrality(&self) -> Vec<(ReferrerId, u64)> {
        let distances: HashMap<ReferrerId, HashMap<ReferrerId, usize>> = self
            .nodes
            .iter()
            .map(|&id| (id, self.bfs_distances(id)))
            .collect();

        let mut scores: Vec<u64> = vec![0; self.nodes.len()];
        for &s in &self.nodes {
            let from_s = &distances[&s];
            for &t in &self.nodes {
                if s == t {
                    continue;
                }
                let Some(&d_st) = from_s.get(&t) else {
                    continue;
                };
                for (v_idx, &v) in self.nodes.iter().enumerate() {
                    if v == s || v == t {
                        continue;
                    }
                    let on_shortest_path = match (from_s.get(&v), distances[&v].get(&t)) {
                        (Some(&d_sv), Some(&d_vt)) => d_sv + d_vt == d_st,
                        _ => false,
                    };
                    if on_shortest_path {
                        scores[v_idx] += 1;
                    }
                }
            }
        }

        let mut ranked: Vec<(ReferrerId, u64)> = self
            .nodes
            .iter()
            .zip(scores)
            .filter(|&(_, score)| score > 0)
            .map(|(&id, score)| (id, score))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Whether `target` is reachable from `source` (a node reaches itself).
    fn is_reachable(&self, source: ReferrerId, target: ReferrerId) -> bool {
        source == target || self.downstream(source).contains(&target)
    }

    /// All nodes reachable from `id`, excluding `id` itself.
    fn downstream(&self, id: ReferrerId) -> HashSet<ReferrerId> {
        let mut visited = HashSet::new();
        let mut queue: VecDeque<ReferrerId> =
            self.direct_referrals(id).iter().copied().collect();
        while let Some(current) = queue.pop_front() {
            if visited.insert(current) {
                queue.extend(self.direct_referrals(current).iter().copied());
            }
        }
        visited
    }

    /// Hop distances from `start` to every node reachable from it (including itself).
    fn bfs_distances(&self, start: ReferrerId) -> HashMap<ReferrerId, usize> {
        let mut distances = HashMap::new();
        distances.insert(start, 0);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            let next = distances[&current] + 1;
            for &child in self.direct_referrals(current) {
                if !distances.contains_key(&child) {
                    distances.insert(child, next);
                    queue.push_back(child);
                }
            }
        }
        distances
    }
}
