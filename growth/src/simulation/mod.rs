//! Day-stepped referral growth simulation.
//!
//! This module provides the stochastic simulator and its deterministic
//! expected-value counterpart:
//! - All randomness is seeded per run for reproducibility
//! - Hires made on a day only start referring on the next day
//! - Invariants are checked after every day in debug builds
//!
//! # Usage
//!
//! ```
//! use growth::config::SimulatorConfig;
//! use growth::simulation::GrowthSimulator;
//! use growth::types::Capacity;
//!
//! let config = SimulatorConfig::new(2, Capacity::Unbounded).with_random_seed(12345);
//! let sim = GrowthSimulator::new(config);
//!
//! assert_eq!(sim.simulate(1.0, 3).unwrap(), vec![2, 6, 14]);
//! assert_eq!(sim.days_to_target(1.0, 10).unwrap(), 3);
//! ```

mod expected;
mod invariants;
mod simulator;
mod state;

pub use expected::ExpectedGrowthModel;
pub use invariants::{InvariantChecker, InvariantViolation};
pub use simulator::GrowthSimulator;
pub use state::SimulationState;
