mod capacity;
mod ids;

pub use capacity::{Capacity, ParseCapacityError};
pub use ids::ReferrerId;
