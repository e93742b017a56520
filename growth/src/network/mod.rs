//! Referral network bookkeeping: who can still refer, and who referred whom.

mod graph;
mod model;

pub use graph::{GraphError, ReferralGraph};
pub use model::{ReferralCapacityModel, Referrer};
