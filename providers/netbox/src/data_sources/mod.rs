//! Read-only lookups
//!
//! Each data source queries NetBox with a narrowing filter and requires
//! exactly one match.

pub mod device;
pub mod ip_range;

pub use device::{DeviceDataSource, DeviceQuery, DeviceState};
pub use ip_range::{IpRangeDataSource, IpRangeQuery, IpRangeState};

/// Page size for lookups: two results are enough to detect ambiguity
pub(crate) const LOOKUP_LIMIT: &str = "2";
