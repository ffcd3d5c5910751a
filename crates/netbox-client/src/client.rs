//! NetBox API client
//!
//! Implements the NetBox REST API client for the object types managed by the
//! provider. Every object lives under `/api/<section>/<endpoint>/` and is
//! addressed by its integer ID.

use crate::common::query::{collection_path, object_path, query_page};
use crate::common::HttpClient;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

const AGGREGATES: &str = "ipam/aggregates";
const RIRS: &str = "ipam/rirs";
const ROLES: &str = "ipam/roles";
const VRFS: &str = "ipam/vrfs";
const SITES: &str = "dcim/sites";
const MANUFACTURERS: &str = "dcim/manufacturers";
const PLATFORMS: &str = "dcim/platforms";
const CIRCUIT_TYPES: &str = "circuits/circuit-types";
const CLUSTER_GROUPS: &str = "virtualization/cluster-groups";
const CLUSTER_TYPES: &str = "virtualization/cluster-types";
const TENANT_GROUPS: &str = "tenancy/tenant-groups";
const TAGS: &str = "extras/tags";
const CUSTOM_FIELDS: &str = "extras/custom-fields";
const TOKENS: &str = "users/tokens";
const DEVICES: &str = "dcim/devices";
const IP_RANGES: &str = "ipam/ip-ranges";

/// Connection options for [`NetBoxClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Per-request timeout
    pub timeout: Duration,
    /// Skip TLS certificate verification (self-signed lab instances)
    pub accept_invalid_certs: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            accept_invalid_certs: false,
        }
    }
}

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        Self::with_options(base_url, token, ClientOptions::default())
    }

    /// Create a new NetBox client with explicit connection options
    pub fn with_options(base_url: String, token: String, options: ClientOptions) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(options.timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs)
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the API token by making a simple authenticated request.
    ///
    /// This method tests connectivity and token validity before proceeding with operations.
    /// It makes a lightweight request to the NetBox status endpoint.
    ///
    /// # Returns
    /// * `Ok(())` - Token is valid and NetBox is reachable
    /// * `Err(NetBoxError)` - Token is invalid or NetBox is unreachable
    pub async fn validate_token(&self) -> Result<(), NetBoxError> {
        debug!("Validating NetBox token and connectivity");
        let _status: serde_json::Value = self.http.get("/api/status/").await?;
        debug!("Token validated successfully");
        Ok(())
    }

    async fn get_object<T: serde::de::DeserializeOwned>(&self, endpoint: &str, id: u64) -> Result<T, NetBoxError> {
        debug!("Fetching {} {} from NetBox", endpoint, id);
        self.http.get(&object_path(endpoint, id)).await
    }

    async fn create_object<B: serde::Serialize + Sync, T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, NetBoxError> {
        debug!("Creating {} in NetBox", endpoint);
        self.http.post(&collection_path(endpoint), body).await
    }

    async fn update_object<B: serde::Serialize + Sync, T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        id: u64,
        body: &B,
    ) -> Result<T, NetBoxError> {
        debug!("Updating {} {} in NetBox", endpoint, id);
        self.http.patch(&object_path(endpoint, id), body).await
    }

    async fn delete_object(&self, endpoint: &str, id: u64) -> Result<(), NetBoxError> {
        debug!("Deleting {} {} from NetBox", endpoint, id);
        self.http.delete(&object_path(endpoint, id)).await
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.http.base_url()
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        NetBoxClient::validate_token(self).await
    }

    // ====================
    // IPAM API Methods
    // ====================

    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        self.get_object(AGGREGATES, id).await
    }

    async fn create_aggregate(&self, body: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.create_object(AGGREGATES, body).await
    }

    async fn update_aggregate(&self, id: u64, body: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        self.update_object(AGGREGATES, id, body).await
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(AGGREGATES, id).await
    }

    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        self.get_object(RIRS, id).await
    }

    async fn create_rir(&self, body: &WritableNamed) -> Result<Rir, NetBoxError> {
        self.create_object(RIRS, body).await
    }

    async fn update_rir(&self, id: u64, body: &WritableNamed) -> Result<Rir, NetBoxError> {
        self.update_object(RIRS, id, body).await
    }

    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(RIRS, id).await
    }

    async fn get_role(&self, id: u64) -> Result<Role, NetBoxError> {
        self.get_object(ROLES, id).await
    }

    async fn create_role(&self, body: &WritableRole) -> Result<Role, NetBoxError> {
        self.create_object(ROLES, body).await
    }

    async fn update_role(&self, id: u64, body: &WritableRole) -> Result<Role, NetBoxError> {
        self.update_object(ROLES, id, body).await
    }

    async fn delete_role(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(ROLES, id).await
    }

    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        self.get_object(VRFS, id).await
    }

    async fn create_vrf(&self, body: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.create_object(VRFS, body).await
    }

    async fn update_vrf(&self, id: u64, body: &WritableVrf) -> Result<Vrf, NetBoxError> {
        self.update_object(VRFS, id, body).await
    }

    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(VRFS, id).await
    }

    async fn list_ip_ranges(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<IpRange>, NetBoxError> {
        debug!("Querying IP ranges with filters: {:?}", filters);
        query_page(&self.http, IP_RANGES, filters).await
    }

    // ====================
    // DCIM API Methods
    // ====================

    async fn get_site(&self, id: u64) -> Result<Site, NetBoxError> {
        self.get_object(SITES, id).await
    }

    async fn create_site(&self, body: &WritableSite) -> Result<Site, NetBoxError> {
        self.create_object(SITES, body).await
    }

    async fn update_site(&self, id: u64, body: &WritableSite) -> Result<Site, NetBoxError> {
        self.update_object(SITES, id, body).await
    }

    async fn delete_site(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(SITES, id).await
    }

    async fn get_manufacturer(&self, id: u64) -> Result<Manufacturer, NetBoxError> {
        self.get_object(MANUFACTURERS, id).await
    }

    async fn create_manufacturer(&self, body: &WritableNamed) -> Result<Manufacturer, NetBoxError> {
        self.create_object(MANUFACTURERS, body).await
    }

    async fn update_manufacturer(&self, id: u64, body: &WritableNamed) -> Result<Manufacturer, NetBoxError> {
        self.update_object(MANUFACTURERS, id, body).await
    }

    async fn delete_manufacturer(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(MANUFACTURERS, id).await
    }

    async fn get_platform(&self, id: u64) -> Result<Platform, NetBoxError> {
        self.get_object(PLATFORMS, id).await
    }

    async fn create_platform(&self, body: &WritableNamed) -> Result<Platform, NetBoxError> {
        self.create_object(PLATFORMS, body).await
    }

    async fn update_platform(&self, id: u64, body: &WritableNamed) -> Result<Platform, NetBoxError> {
        self.update_object(PLATFORMS, id, body).await
    }

    async fn delete_platform(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(PLATFORMS, id).await
    }

    async fn list_devices(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Device>, NetBoxError> {
        debug!("Querying devices with filters: {:?}", filters);
        query_page(&self.http, DEVICES, filters).await
    }

    // ====================
    // Circuits API Methods
    // ====================

    async fn get_circuit_type(&self, id: u64) -> Result<CircuitType, NetBoxError> {
        self.get_object(CIRCUIT_TYPES, id).await
    }

    async fn create_circuit_type(&self, body: &WritableNamed) -> Result<CircuitType, NetBoxError> {
        self.create_object(CIRCUIT_TYPES, body).await
    }

    async fn update_circuit_type(&self, id: u64, body: &WritableNamed) -> Result<CircuitType, NetBoxError> {
        self.update_object(CIRCUIT_TYPES, id, body).await
    }

    async fn delete_circuit_type(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(CIRCUIT_TYPES, id).await
    }

    // ====================
    // Virtualization API Methods
    // ====================

    async fn get_cluster_group(&self, id: u64) -> Result<ClusterGroup, NetBoxError> {
        self.get_object(CLUSTER_GROUPS, id).await
    }

    async fn create_cluster_group(&self, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError> {
        self.create_object(CLUSTER_GROUPS, body).await
    }

    async fn update_cluster_group(&self, id: u64, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError> {
        self.update_object(CLUSTER_GROUPS, id, body).await
    }

    async fn delete_cluster_group(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(CLUSTER_GROUPS, id).await
    }

    async fn get_cluster_type(&self, id: u64) -> Result<ClusterType, NetBoxError> {
        self.get_object(CLUSTER_TYPES, id).await
    }

    async fn create_cluster_type(&self, body: &WritableNamed) -> Result<ClusterType, NetBoxError> {
        self.create_object(CLUSTER_TYPES, body).await
    }

    async fn update_cluster_type(&self, id: u64, body: &WritableNamed) -> Result<ClusterType, NetBoxError> {
        self.update_object(CLUSTER_TYPES, id, body).await
    }

    async fn delete_cluster_type(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(CLUSTER_TYPES, id).await
    }

    // ====================
    // Tenancy API Methods
    // ====================

    async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError> {
        self.get_object(TENANT_GROUPS, id).await
    }

    async fn create_tenant_group(&self, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        self.create_object(TENANT_GROUPS, body).await
    }

    async fn update_tenant_group(&self, id: u64, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        self.update_object(TENANT_GROUPS, id, body).await
    }

    async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(TENANT_GROUPS, id).await
    }

    // ====================
    // Extras API Methods
    // ====================

    async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<Vec<Tag>, NetBoxError> {
        debug!("Querying tags with filters: {:?}", filters);
        let page: PaginatedResponse<Tag> = query_page(&self.http, TAGS, filters).await?;
        Ok(page.results)
    }

    async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError> {
        self.get_object(TAGS, id).await
    }

    async fn create_tag(&self, body: &WritableTag) -> Result<Tag, NetBoxError> {
        self.create_object(TAGS, body).await
    }

    async fn update_tag(&self, id: u64, body: &WritableTag) -> Result<Tag, NetBoxError> {
        self.update_object(TAGS, id, body).await
    }

    async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(TAGS, id).await
    }

    async fn get_custom_field(&self, id: u64) -> Result<CustomField, NetBoxError> {
        self.get_object(CUSTOM_FIELDS, id).await
    }

    async fn create_custom_field(&self, body: &WritableCustomField) -> Result<CustomField, NetBoxError> {
        self.create_object(CUSTOM_FIELDS, body).await
    }

    async fn update_custom_field(&self, id: u64, body: &WritableCustomField) -> Result<CustomField, NetBoxError> {
        self.update_object(CUSTOM_FIELDS, id, body).await
    }

    async fn delete_custom_field(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(CUSTOM_FIELDS, id).await
    }

    // ====================
    // Users API Methods
    // ====================

    async fn get_token(&self, id: u64) -> Result<Token, NetBoxError> {
        self.get_object(TOKENS, id).await
    }

    async fn create_token(&self, body: &WritableToken) -> Result<Token, NetBoxError> {
        self.create_object(TOKENS, body).await
    }

    async fn update_token(&self, id: u64, body: &WritableToken) -> Result<Token, NetBoxError> {
        self.update_object(TOKENS, id, body).await
    }

    async fn delete_token(&self, id: u64) -> Result<(), NetBoxError> {
        self.delete_object(TOKENS, id).await
    }
}
