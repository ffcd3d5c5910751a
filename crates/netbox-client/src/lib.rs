//! NetBox REST API Client
//!
//! A Rust client library for the parts of the NetBox REST API managed by the
//! NetBox Terraform provider: IPAM aggregates, RIRs, roles, VRFs and IP ranges,
//! DCIM sites, manufacturers, platforms and devices, circuit types, cluster
//! groups and types, tenant groups, tags, custom fields and API tokens.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, NetBoxClientTrait, WritableNamed};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Check the token before doing anything else
//! client.validate_token().await?;
//!
//! // Create a manufacturer
//! let manufacturer = client.create_manufacturer(&WritableNamed {
//!     name: "Juniper".to_string(),
//!     slug: "juniper".to_string(),
//!     description: None,
//! }).await?;
//!
//! // Look up a device by name
//! let page = client.list_devices(&[("name", "edge-1"), ("limit", "2")]).await?;
//! println!("{} matches, manufacturer {}", page.count, manufacturer.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Typed models**: read models per serializer, `Writable*` request bodies
//! - **Error mapping**: 404, 401/403 and 400 responses become distinct errors
//! - **Filtered lists**: single-page queries keeping the total `count`
//! - **Mocking**: `test-util` feature exposes an in-memory `MockNetBoxClient`

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{ClientOptions, NetBoxClient};
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetBoxClient;
