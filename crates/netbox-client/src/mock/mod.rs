//! Mock NetBoxClient for unit testing
//!
//! This module provides an in-memory implementation of NetBoxClientTrait that can be
//! used in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into domain-specific modules:
//! - `ipam.rs` - aggregates, RIRs, IPAM roles, VRFs, IP ranges
//! - `dcim.rs` - sites, manufacturers, platforms, devices
//! - `organization.rs` - circuit types, cluster groups, cluster types, tenant groups
//! - `extras.rs` - tags and custom fields
//! - `users.rs` - API tokens
//! - `helpers.rs` - builders for nested reference types

mod dcim;
mod extras;
mod helpers;
mod ipam;
mod organization;
mod users;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Store<T> = Arc<Mutex<HashMap<u64, T>>>;

/// Mock NetBoxClient for testing
///
/// Objects are kept in memory keyed by ID. IDs come from a single counter
/// shared by every object type, like a fresh NetBox database would hand out.
#[derive(Clone, Default)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    pub(crate) aggregates: Store<Aggregate>,
    pub(crate) rirs: Store<Rir>,
    pub(crate) roles: Store<Role>,
    pub(crate) vrfs: Store<Vrf>,
    pub(crate) ip_ranges: Store<IpRange>,
    pub(crate) sites: Store<Site>,
    pub(crate) manufacturers: Store<Manufacturer>,
    pub(crate) platforms: Store<Platform>,
    pub(crate) devices: Store<Device>,
    pub(crate) circuit_types: Store<CircuitType>,
    pub(crate) cluster_groups: Store<ClusterGroup>,
    pub(crate) cluster_types: Store<ClusterType>,
    pub(crate) tenant_groups: Store<TenantGroup>,
    pub(crate) tags: Store<Tag>,
    pub(crate) custom_fields: Store<CustomField>,
    pub(crate) tokens: Store<Token>,
    pub(crate) next_id: Arc<Mutex<u64>>,
    pub(crate) reject_token: Arc<Mutex<bool>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            next_id: Arc::new(Mutex::new(1)),
            ..Self::default()
        }
    }

    /// Make `validate_token` fail with an authentication error
    pub fn reject_token(&self) {
        *lock(&self.reject_token) = true;
    }

    /// Add a device to the mock store (for test setup)
    pub fn add_device(&self, device: Device) {
        lock(&self.devices).insert(device.id, device);
    }

    /// Add an IP range to the mock store (for test setup)
    pub fn add_ip_range(&self, range: IpRange) {
        lock(&self.ip_ranges).insert(range.id, range);
    }

    /// Add a tag to the mock store (for test setup)
    pub fn add_tag(&self, tag: Tag) {
        lock(&self.tags).insert(tag.id, tag);
    }

    /// Add a tenant group to the mock store (for test setup)
    pub fn add_tenant_group(&self, group: TenantGroup) {
        lock(&self.tenant_groups).insert(group.id, group);
    }

    /// Number of tags currently stored
    pub fn tag_count(&self) -> usize {
        lock(&self.tags).len()
    }

    /// Generate next ID
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = lock(&self.next_id);
        let current = (*id).max(1);
        *id = current + 1;
        current
    }

    /// Get helpers instance
    pub(crate) fn helpers(&self) -> helpers::Helpers<'_> {
        helpers::Helpers::new(self)
    }
}

/// Lock a store, recovering the data if a panicking test poisoned it
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn fetch<T: Clone>(store: &Store<T>, id: u64, kind: &str) -> Result<T, NetBoxError> {
    lock(store)
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))
}

pub(crate) fn remove<T>(store: &Store<T>, id: u64, kind: &str) -> Result<(), NetBoxError> {
    lock(store)
        .remove(&id)
        .map(|_| ())
        .ok_or_else(|| NetBoxError::NotFound(format!("{} {} not found", kind, id)))
}

/// Insert an object, or replace an existing one when updating
pub(crate) fn store<T: Clone>(store: &Store<T>, id: u64, object: T) -> T {
    lock(store).insert(id, object.clone());
    object
}

pub(crate) fn ensure_exists<T>(store: &Store<T>, id: u64, kind: &str) -> Result<(), NetBoxError> {
    if lock(store).contains_key(&id) {
        Ok(())
    } else {
        Err(NetBoxError::NotFound(format!("{} {} not found", kind, id)))
    }
}

/// Value of a query filter, if present
pub(crate) fn filter_value<'a>(filters: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    filters.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Page of results honoring the `limit` filter, with `count` set to all matches
pub(crate) fn paginate<T>(mut matches: Vec<T>, filters: &[(&str, &str)]) -> PaginatedResponse<T> {
    let count = matches.len() as u64;
    if let Some(limit) = filter_value(filters, "limit").and_then(|l| l.parse::<usize>().ok()) {
        matches.truncate(limit);
    }
    PaginatedResponse {
        count,
        next: None,
        previous: None,
        results: matches,
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), NetBoxError> {
        if *lock(&self.reject_token) {
            return Err(NetBoxError::Authentication("Invalid token".to_string()));
        }
        Ok(())
    }

    // IPAM Operations - delegated to ipam module
    async fn get_aggregate(&self, id: u64) -> Result<Aggregate, NetBoxError> {
        fetch(&self.aggregates, id, "Aggregate")
    }

    async fn create_aggregate(&self, body: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ipam::save_aggregate(self, self.next_id(), body)
    }

    async fn update_aggregate(&self, id: u64, body: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
        ensure_exists(&self.aggregates, id, "Aggregate")?;
        ipam::save_aggregate(self, id, body)
    }

    async fn delete_aggregate(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.aggregates, id, "Aggregate")
    }

    async fn get_rir(&self, id: u64) -> Result<Rir, NetBoxError> {
        fetch(&self.rirs, id, "RIR")
    }

    async fn create_rir(&self, body: &WritableNamed) -> Result<Rir, NetBoxError> {
        ipam::save_rir(self, self.next_id(), body)
    }

    async fn update_rir(&self, id: u64, body: &WritableNamed) -> Result<Rir, NetBoxError> {
        ensure_exists(&self.rirs, id, "RIR")?;
        ipam::save_rir(self, id, body)
    }

    async fn delete_rir(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.rirs, id, "RIR")
    }

    async fn get_role(&self, id: u64) -> Result<Role, NetBoxError> {
        fetch(&self.roles, id, "Role")
    }

    async fn create_role(&self, body: &WritableRole) -> Result<Role, NetBoxError> {
        ipam::save_role(self, self.next_id(), body)
    }

    async fn update_role(&self, id: u64, body: &WritableRole) -> Result<Role, NetBoxError> {
        ensure_exists(&self.roles, id, "Role")?;
        ipam::save_role(self, id, body)
    }

    async fn delete_role(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.roles, id, "Role")
    }

    async fn get_vrf(&self, id: u64) -> Result<Vrf, NetBoxError> {
        fetch(&self.vrfs, id, "VRF")
    }

    async fn create_vrf(&self, body: &WritableVrf) -> Result<Vrf, NetBoxError> {
        ipam::save_vrf(self, self.next_id(), body)
    }

    async fn update_vrf(&self, id: u64, body: &WritableVrf) -> Result<Vrf, NetBoxError> {
        ensure_exists(&self.vrfs, id, "VRF")?;
        ipam::save_vrf(self, id, body)
    }

    async fn delete_vrf(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.vrfs, id, "VRF")
    }

    async fn list_ip_ranges(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<IpRange>, NetBoxError> {
        Ok(ipam::list_ip_ranges(self, filters))
    }

    // DCIM Operations - delegated to dcim module
    async fn get_site(&self, id: u64) -> Result<Site, NetBoxError> {
        fetch(&self.sites, id, "Site")
    }

    async fn create_site(&self, body: &WritableSite) -> Result<Site, NetBoxError> {
        dcim::save_site(self, self.next_id(), body)
    }

    async fn update_site(&self, id: u64, body: &WritableSite) -> Result<Site, NetBoxError> {
        ensure_exists(&self.sites, id, "Site")?;
        dcim::save_site(self, id, body)
    }

    async fn delete_site(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.sites, id, "Site")
    }

    async fn get_manufacturer(&self, id: u64) -> Result<Manufacturer, NetBoxError> {
        fetch(&self.manufacturers, id, "Manufacturer")
    }

    async fn create_manufacturer(&self, body: &WritableNamed) -> Result<Manufacturer, NetBoxError> {
        dcim::save_manufacturer(self, self.next_id(), body)
    }

    async fn update_manufacturer(&self, id: u64, body: &WritableNamed) -> Result<Manufacturer, NetBoxError> {
        ensure_exists(&self.manufacturers, id, "Manufacturer")?;
        dcim::save_manufacturer(self, id, body)
    }

    async fn delete_manufacturer(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.manufacturers, id, "Manufacturer")
    }

    async fn get_platform(&self, id: u64) -> Result<Platform, NetBoxError> {
        fetch(&self.platforms, id, "Platform")
    }

    async fn create_platform(&self, body: &WritableNamed) -> Result<Platform, NetBoxError> {
        dcim::save_platform(self, self.next_id(), body)
    }

    async fn update_platform(&self, id: u64, body: &WritableNamed) -> Result<Platform, NetBoxError> {
        ensure_exists(&self.platforms, id, "Platform")?;
        dcim::save_platform(self, id, body)
    }

    async fn delete_platform(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.platforms, id, "Platform")
    }

    async fn list_devices(&self, filters: &[(&str, &str)]) -> Result<PaginatedResponse<Device>, NetBoxError> {
        Ok(dcim::list_devices(self, filters))
    }

    // Circuits / Virtualization / Tenancy - delegated to organization module
    async fn get_circuit_type(&self, id: u64) -> Result<CircuitType, NetBoxError> {
        fetch(&self.circuit_types, id, "Circuit type")
    }

    async fn create_circuit_type(&self, body: &WritableNamed) -> Result<CircuitType, NetBoxError> {
        organization::save_circuit_type(self, self.next_id(), body)
    }

    async fn update_circuit_type(&self, id: u64, body: &WritableNamed) -> Result<CircuitType, NetBoxError> {
        ensure_exists(&self.circuit_types, id, "Circuit type")?;
        organization::save_circuit_type(self, id, body)
    }

    async fn delete_circuit_type(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.circuit_types, id, "Circuit type")
    }

    async fn get_cluster_group(&self, id: u64) -> Result<ClusterGroup, NetBoxError> {
        fetch(&self.cluster_groups, id, "Cluster group")
    }

    async fn create_cluster_group(&self, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError> {
        organization::save_cluster_group(self, self.next_id(), body)
    }

    async fn update_cluster_group(&self, id: u64, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError> {
        ensure_exists(&self.cluster_groups, id, "Cluster group")?;
        organization::save_cluster_group(self, id, body)
    }

    async fn delete_cluster_group(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.cluster_groups, id, "Cluster group")
    }

    async fn get_cluster_type(&self, id: u64) -> Result<ClusterType, NetBoxError> {
        fetch(&self.cluster_types, id, "Cluster type")
    }

    async fn create_cluster_type(&self, body: &WritableNamed) -> Result<ClusterType, NetBoxError> {
        organization::save_cluster_type(self, self.next_id(), body)
    }

    async fn update_cluster_type(&self, id: u64, body: &WritableNamed) -> Result<ClusterType, NetBoxError> {
        ensure_exists(&self.cluster_types, id, "Cluster type")?;
        organization::save_cluster_type(self, id, body)
    }

    async fn delete_cluster_type(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.cluster_types, id, "Cluster type")
    }

    async fn get_tenant_group(&self, id: u64) -> Result<TenantGroup, NetBoxError> {
        fetch(&self.tenant_groups, id, "Tenant group")
    }

    async fn create_tenant_group(&self, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        organization::save_tenant_group(self, self.next_id(), body)
    }

    async fn update_tenant_group(&self, id: u64, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
        ensure_exists(&self.tenant_groups, id, "Tenant group")?;
        organization::save_tenant_group(self, id, body)
    }

    async fn delete_tenant_group(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.tenant_groups, id, "Tenant group")
    }

    // Extras Operations - delegated to extras module
    async fn query_tags(&self, filters: &[(&str, &str)]) -> Result<Vec<Tag>, NetBoxError> {
        Ok(extras::query_tags(self, filters))
    }

    async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError> {
        fetch(&self.tags, id, "Tag")
    }

    async fn create_tag(&self, body: &WritableTag) -> Result<Tag, NetBoxError> {
        extras::save_tag(self, self.next_id(), body)
    }

    async fn update_tag(&self, id: u64, body: &WritableTag) -> Result<Tag, NetBoxError> {
        ensure_exists(&self.tags, id, "Tag")?;
        extras::save_tag(self, id, body)
    }

    async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.tags, id, "Tag")
    }

    async fn get_custom_field(&self, id: u64) -> Result<CustomField, NetBoxError> {
        fetch(&self.custom_fields, id, "Custom field")
    }

    async fn create_custom_field(&self, body: &WritableCustomField) -> Result<CustomField, NetBoxError> {
        extras::save_custom_field(self, self.next_id(), body)
    }

    async fn update_custom_field(&self, id: u64, body: &WritableCustomField) -> Result<CustomField, NetBoxError> {
        ensure_exists(&self.custom_fields, id, "Custom field")?;
        extras::save_custom_field(self, id, body)
    }

    async fn delete_custom_field(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.custom_fields, id, "Custom field")
    }

    // Users Operations - delegated to users module
    async fn get_token(&self, id: u64) -> Result<Token, NetBoxError> {
        fetch(&self.tokens, id, "Token")
    }

    async fn create_token(&self, body: &WritableToken) -> Result<Token, NetBoxError> {
        users::save_token(self, self.next_id(), body, None)
    }

    async fn update_token(&self, id: u64, body: &WritableToken) -> Result<Token, NetBoxError> {
        let existing = fetch(&self.tokens, id, "Token")?;
        users::save_token(self, id, body, Some(existing))
    }

    async fn delete_token(&self, id: u64) -> Result<(), NetBoxError> {
        remove(&self.tokens, id, "Token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_shared_across_object_types() {
        let client = MockNetBoxClient::new("http://netbox.test");
        let rir = client
            .create_rir(&WritableNamed {
                name: "RIPE".to_string(),
                slug: "ripe".to_string(),
                description: None,
            })
            .await
            .unwrap();
        let platform = client
            .create_platform(&WritableNamed {
                name: "Junos".to_string(),
                slug: "junos".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(rir.id, 1);
        assert_eq!(platform.id, 2);
        assert_eq!(rir.url, "http://netbox.test/api/ipam/rirs/1/");
    }

    #[tokio::test]
    async fn test_update_missing_object_is_not_found() {
        let client = MockNetBoxClient::new("http://netbox.test");
        let err = client
            .update_manufacturer(
                42,
                &WritableNamed {
                    name: "Cisco".to_string(),
                    slug: "cisco".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let client = MockNetBoxClient::new("http://netbox.test");
        let role = client
            .create_role(&WritableRole {
                name: "Backbone".to_string(),
                slug: "backbone".to_string(),
                weight: None,
                description: String::new(),
            })
            .await
            .unwrap();

        client.delete_role(role.id).await.unwrap();
        assert!(client.delete_role(role.id).await.unwrap_err().is_not_found());
        assert!(client.get_role(role.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_reject_token() {
        let client = MockNetBoxClient::new("http://netbox.test");
        assert!(client.validate_token().await.is_ok());
        client.reject_token();
        assert!(matches!(
            client.validate_token().await,
            Err(NetBoxError::Authentication(_))
        ));
    }
}
