//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// One method per remote call. Updates are partial (`PATCH`) and carry the
/// full write model, so every managed field is replaced on each update.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the API token
    async fn validate_token(&self) -> Result<(), NetBoxError>;

    // IPAM Operations
    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError>;
    async fn create_aggregate(&self, body: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    async fn update_aggregate(&self, id: u64, body: &WritableAggregate) -> Result<Aggregate, NetBoxError>;
    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError>;
    async fn create_rir(&self, body: &WritableNamed) -> Result<Rir, NetBoxError>;
    async fn update_rir(&self, id: u64, body: &WritableNamed) -> Result<Rir, NetBoxError>;
    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_role(&self, id: u64) -> Result<Role, NetBoxError>;
    async fn create_role(&self, body: &WritableRole) -> Result<Role, NetBoxError>;
    async fn update_role(&self, id: u64, body: &WritableRole) -> Result<Role, NetBoxError>;
    async fn delete_role(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError>;
    async fn create_vrf(&self, body: &WritableVrf) -> Result<Vrf, NetBoxError>;
    async fn update_vrf(&self, id: u64, body: &WritableVrf) -> Result<Vrf, NetBoxError>;
    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError>;
    async fn list_ip_ranges(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<IpRange>, NetBoxError>;

    // DCIM Operations
    async fn get_site(&self, id: u64) -> Result<Site, NetBoxError>;
    async fn create_site(&self, body: &WritableSite) -> Result<Site, NetBoxError>;
    async fn update_site(&self, id: u64, body: &WritableSite) -> Result<Site, NetBoxError>;
    async fn delete_site(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_manufacturer(&self, id: u64) -> Result<Manufacturer, NetBoxError>;
    async fn create_manufacturer(&self, body: &WritableNamed) -> Result<Manufacturer, NetBoxError>;
    async fn update_manufacturer(&self, id: u64, body: &WritableNamed) -> Result<Manufacturer, NetBoxError>;
    async fn delete_manufacturer(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_platform(&self, id: u64) -> Result<Platform, NetBoxError>;
    async fn create_platform(&self, body: &WritableNamed) -> Result<Platform, NetBoxError>;
    async fn update_platform(&self, id: u64, body: &WritableNamed) -> Result<Platform, NetBoxError>;
    async fn delete_platform(&self, id: u64) -> Result<(), NetBoxError>;
    async fn list_devices(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Device>, NetBoxError>;

    // Circuits Operations
    async fn get_circuit_type(&self, id: u64) -> Result<CircuitType, NetBoxError>;
    async fn create_circuit_type(&self, body: &WritableNamed) -> Result<CircuitType, NetBoxError>;
    async fn update_circuit_type(&self, id: u64, body: &WritableNamed) -> Result<CircuitType, NetBoxError>;
    async fn delete_circuit_type(&self, id: u64) -> Result<(), NetBoxError>;

    // Virtualization Operations
    async fn get_cluster_group(&self, id: u64) -> Result<ClusterGroup, NetBoxError>;
    async fn create_cluster_group(&self, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError>;
    async fn update_cluster_group(&self, id: u64, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError>;
    async fn delete_cluster_group(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_cluster_type(&self, id: u64) -> Result<ClusterType, NetBoxError>;
    async fn create_cluster_type(&self, body: &WritableNamed) -> Result<ClusterType, NetBoxError>;
    async fn update_cluster_type(&self, id: u64, body: &WritableNamed) -> Result<ClusterType, NetBoxError>;
    async fn delete_cluster_type(&self, id: u64) -> Result<(), NetBoxError>;

    // Tenancy Operations
    async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError>;
    async fn create_tenant_group(&self, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError>;
    async fn update_tenant_group(&self, id: u64, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError>;
    async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError>;

    // Extras Operations
    async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<Vec<Tag>, NetBoxError>;
    async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError>;
    async fn create_tag(&self, body: &WritableTag) -> Result<Tag, NetBoxError>;
    async fn update_tag(&self, id: u64, body: &WritableTag) -> Result<Tag, NetBoxError>;
    async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError>;
    async fn get_custom_field(&self, id: u64) -> Result<CustomField, NetBoxError>;
    async fn create_custom_field(&self, body: &WritableCustomField) -> Result<CustomField, NetBoxError>;
    async fn update_custom_field(&self, id: u64, body: &WritableCustomField) -> Result<CustomField, NetBoxError>;
    async fn delete_custom_field(&self, id: u64) -> Result<(), NetBoxError>;

    // Users Operations
    async fn get_token(&self, id: u64) -> Result<Token, NetBoxError>;
    async fn create_token(&self, body: &WritableToken) -> Result<Token, NetBoxError>;
    async fn update_token(&self, id: u64, body: &WritableToken) -> Result<Token, NetBoxError>;
    async fn delete_token(&self, id: u64) -> Result<(), NetBoxError>;
}
