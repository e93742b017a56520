//! Error taxonomy for the growth engine.

use std::fmt;

use crate::network::GraphError;
use crate::types::{Capacity, ReferrerId};

/// Errors surfaced by the capacity model and the simulator.
#[derive(Debug, Clone, PartialEq)]
pub enum GrowthError {
    /// A public operation received an argument outside its domain.
    InvalidArgument { name: &'static str, message: String },
    /// A referral probability outside `[0, 1]` (or NaN) reached the model.
    InvalidProbability(f64),
    /// A referral was attempted on a referrer already at capacity.
    ///
    /// The simulator filters exhausted referrers before attempting, so this
    /// only surfaces from direct misuse of the model.
    ExhaustedReferrer(ReferrerId),
    /// A referral was attempted on an ID the model never issued.
    UnknownReferrer(ReferrerId),
    /// No further hire can ever happen and the target was not met.
    UnreachableTarget {
        /// Requested cumulative hire count.
        target: u64,
        /// Days simulated before giving up.
        days_simulated: u64,
        /// Cumulative hires reached when the simulation stopped.
        cumulative_hires: u64,
    },
    /// Recording a referral edge violated a lineage constraint.
    Graph(GraphError),
}

impl GrowthError {
    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            message: message.into(),
        }
    }
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, message } => {
                write!(f, "invalid argument {name}: {message}")
            }
            Self::InvalidProbability(p) => {
                write!(f, "probability {p} is outside [0, 1]")
            }
            Self::ExhaustedReferrer(id) => {
                write!(f, "referrer {id} has no referral capacity left")
            }
            Self::UnknownReferrer(id) => write!(f, "unknown referrer {id}"),
            Self::UnreachableTarget {
                target,
                days_simulated,
                cumulative_hires,
            } => write!(
                f,
                "target of {target} hires is unreachable: network stopped growing at \
                 {cumulative_hires} hires after {days_simulated} days"
            ),
            Self::Graph(e) => write!(f, "referral graph error: {e}"),
        }
    }
}

impl std::error::Error for GrowthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for GrowthError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Validate a referral probability at a public operation boundary.
pub(crate) fn validate_probability(p: f64) -> Result<(), GrowthError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GrowthError::invalid_argument(
            "probability",
            format!("{p} is outside [0, 1]"),
        ))
    }
}

/// Validate a referral capacity at a public operation boundary.
pub(crate) fn validate_capacity(capacity: Capacity) -> Result<(), GrowthError> {
    if capacity == Capacity::Limited(0) {
        Err(GrowthError::invalid_argument(
            "referral_capacity",
            "capacity must be a positive integer or unbounded",
        ))
    } else {
        Ok(())
    }
}
