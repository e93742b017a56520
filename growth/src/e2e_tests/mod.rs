//! End-to-end tests at the public simulator level.
//!
//! Each test file covers a specific scenario, using fixed seeds to verify
//! complete runs deterministically.

#![cfg(test)]

mod helpers;

mod test_capacity_enforcement;
mod test_certain_success;
mod test_days_to_target;
mod test_determinism;
mod test_empty_network;
mod test_lineage;
mod test_zero_probability;
