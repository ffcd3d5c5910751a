//! IPAM (IP Address Management) resources
//!
//! Handles: aggregates, RIRs, IPAM roles, VRFs

pub mod aggregate;
#[cfg(test)]
mod aggregate_test;
pub mod rir;
pub mod role;
pub mod vrf;
