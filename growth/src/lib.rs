#![cfg_attr(test, allow(clippy::unwrap_used))]
// Life of a run:
// 1. Configuration comes in (environment, then CLI overrides)
// 2. The simulator builds a fresh network state and seeded generator
// 3. Each day:
//     - Snapshot the referrers that still have capacity
//     - One Bernoulli attempt per snapshot referrer
//     - Record the day's hires and the lineage of each hire
// 4. Answer the query:
//     - Cumulative hires per day, or
//     - The first day a hire target is met
//
// System components:
//  - Referral capacity model (referrer arena + lineage graph)
//  - Growth simulator
//  - Expected-value projection

pub mod config;
pub mod error;
pub mod network;
pub mod report;
pub mod simulation;
pub mod types;

#[cfg(test)]
mod e2e_tests;

pub use config::SimulatorConfig;
pub use error::GrowthError;
pub use simulation::GrowthSimulator;
