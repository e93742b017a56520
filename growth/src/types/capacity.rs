//! Referral capacity: how many successful referrals one referrer may produce.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Maximum number of successful referrals a single referrer may ever produce.
///
/// # Invariants
///
/// - `Limited(n)` always has `n >= 1`; use [`Capacity::limited`] to construct
///   it from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    /// At most this many referrals.
    Limited(u64),
    /// No cap.
    Unbounded,
}

impl Capacity {
    /// Create a limited capacity, rejecting zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use growth::types::Capacity;
    /// assert_eq!(Capacity::limited(3), Some(Capacity::Limited(3)));
    /// assert_eq!(Capacity::limited(0), None);
    /// ```
    #[must_use]
    pub const fn limited(n: u64) -> Option<Self> {
        if n == 0 { None } else { Some(Self::Limited(n)) }
    }

    /// Whether a referrer with `referral_count` successful referrals may still refer.
    #[must_use]
    pub const fn allows(self, referral_count: u64) -> bool {
        match self {
            Self::Limited(max) => referral_count < max,
            Self::Unbounded => true,
        }
    }

    /// The capacity as a float, `f64::INFINITY` when unbounded.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Capacities beyond 2^53 are not meaningful
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Limited(max) => max as f64,
            Self::Unbounded => f64::INFINITY,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::Limited(10)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(max) => write!(f, "{max}"),
            Self::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Error returned when parsing a [`Capacity`] fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCapacityError(String);

impl fmt::Display for ParseCapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a valid capacity (expected a positive integer or 'unbounded')",
            self.0
        )
    }
}

impl std::error::Error for ParseCapacityError {}

impl FromStr for Capacity {
    type Err = ParseCapacityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") {
            return Ok(Self::Unbounded);
        }
        trimmed
            .parse::<u64>()
            .ok()
            .and_then(Self::limited)
            .ok_or_else(|| ParseCapacityError(s.to_string()))
    }
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Limited(max) => serializer.serialize_u64(*max),
            Self::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}
