//! Simulator configuration module.
//!
//! This module provides the simulator configuration and loads it from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `GROWTH_SEED_REFERRERS`: Number of seed referrers at day 0 (default: `100`)
//! - `GROWTH_REFERRAL_CAPACITY`: Referrals allowed per referrer, or `unbounded` (default: `10`)
//! - `GROWTH_RANDOM_SEED`: Seed for the per-run random generator (default: unset, OS entropy)
//!
//! # Invariants
//!
//! - `referral_capacity` is never a zero limit
//! - a configured `random_seed` makes every run reproducible

use crate::types::Capacity;

/// Simulator configuration.
///
/// # Post-conditions
///
/// When constructed via `from_env()`, every value has been parsed and
/// validated; missing optional variables fall back to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Referrers present before the first day.
    pub seed_referrers: u64,
    /// Capacity given to every referrer, seeds and hires alike.
    pub referral_capacity: Capacity,
    /// Seed for the random generator built at the start of each run.
    /// `None` draws a fresh seed from the operating system per run.
    pub random_seed: Option<u64>,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED_REFERRERS, Capacity::default())
    }
}

impl SimulatorConfig {
    /// Default number of seed referrers.
    pub const DEFAULT_SEED_REFERRERS: u64 = 100;

    /// Create a config with no fixed random seed.
    #[must_use]
    pub const fn new(seed_referrers: u64, referral_capacity: Capacity) -> Self {
        Self {
            seed_referrers,
            referral_capacity,
            random_seed: None,
        }
    }

    /// Fix the random seed so runs are reproducible.
    #[must_use]
    pub const fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Draw a fresh random seed per run.
    #[must_use]
    pub const fn without_random_seed(mut self) -> Self {
        self.random_seed = None;
        self
    }

    /// Set the number of seed referrers.
    #[must_use]
    pub const fn with_seed_referrers(mut self, count: u64) -> Self {
        self.seed_referrers = count;
        self
    }

    /// Set the per-referrer capacity.
    #[must_use]
    pub const fn with_referral_capacity(mut self, capacity: Capacity) -> Self {
        self.referral_capacity = capacity;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if
    /// `GROWTH_REFERRAL_CAPACITY` is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`SimulatorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed_referrers = match lookup("GROWTH_SEED_REFERRERS") {
            Some(value) => parse_u64("GROWTH_SEED_REFERRERS", &value)?,
            None => Self::DEFAULT_SEED_REFERRERS,
        };

        let referral_capacity = match lookup("GROWTH_REFERRAL_CAPACITY") {
            Some(value) => value
                .parse::<Capacity>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "GROWTH_REFERRAL_CAPACITY".to_string(),
                    message: e.to_string(),
                })?,
            None => Capacity::default(),
        };

        let random_seed = lookup("GROWTH_RANDOM_SEED")
            .map(|value| parse_u64("GROWTH_RANDOM_SEED", &value))
            .transpose()?;

        Ok(Self {
            seed_referrers,
            referral_capacity,
            random_seed,
        })
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue {
            name: name.to_string(),
            message: format!("'{value}' is not a non-negative integer"),
        })
}
