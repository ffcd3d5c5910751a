//! DCIM (Data Center Infrastructure Management) resources
//!
//! Handles: sites, manufacturers, platforms

pub mod manufacturer;
pub mod platform;
pub mod site;
#[cfg(test)]
mod site_test;
