//! ID type for referrers.
//!
//! Referrers are abstract counters, so their identity is a plain sequence
//! number assigned by the capacity model in creation order.

use std::fmt;

use serde::Serialize;

/// A unique identifier for a referrer.
///
/// Wraps a `u64`. The inner field is public so tests and reports can build
/// and read IDs directly.
///
/// # Invariants
///
/// - IDs issued by one [`ReferralCapacityModel`](crate::network::ReferralCapacityModel)
///   start at 0 and increase by one per created referrer.
/// - Ordering of IDs matches creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ReferrerId(pub u64);

impl ReferrerId {
    /// Get the underlying sequence number.
    ///
    /// # Examples
    ///
    /// ```
    /// use growth::types::ReferrerId;
    /// let id = ReferrerId(7);
    /// assert_eq!(id.as_u64(), 7);
    /// ```
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The ID that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ReferrerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

impl From<u64> for ReferrerId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl From<ReferrerId> for u64 {
    fn from(id: ReferrerId) -> Self {
        id.0
    }
}
