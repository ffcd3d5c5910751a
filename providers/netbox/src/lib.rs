//! NetBox provider
//!
//! Terraform-style resources and data sources for NetBox:
//! - Resources: aggregates, circuit types, cluster groups, cluster types,
//!   custom fields, IPAM roles, manufacturers, platforms, RIRs, sites, tags,
//!   tenant groups, API tokens, VRFs
//! - Data sources: device lookup by name, IP range lookup by contained prefix
//!
//! Every adapter validates its attribute map against a [`schema::Schema`],
//! translates it into a NetBox write model and reads the object back after
//! each change, so the returned state always reflects NetBox.
//!
//! # Example
//!
//! ```no_run
//! use netbox_provider::{Provider, ProviderConfig};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), netbox_provider::ProviderError> {
//! let config = ProviderConfig::new("https://netbox.example.com", "0123456789abcdef")?;
//! let provider = Provider::configure(&config).await?;
//!
//! let site = provider
//!     .create("netbox_site", json!({"name": "Frankfurt 1", "slug": "fra1", "status": "active"}))
//!     .await?;
//! println!("created site {}", site["id"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_sources;
pub mod error;
pub mod helpers;
pub mod provider;
pub mod resource;
pub mod resources;
pub mod schema;

#[cfg(test)]
mod test_utils;

pub use config::{ConnectionArgs, ProviderConfig};
pub use error::{Diagnostic, ProviderError};
pub use provider::{Provider, ProviderSchema, Registry};
pub use resource::{DataSource, DynamicDataSource, DynamicResource, Erased, Resource, ResourceId};
pub use schema::{Attribute, AttributeKind, AttributeMode, Constraint, Schema};
