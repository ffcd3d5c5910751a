//! Organizational models for MockNetBoxClient
//!
//! Handles circuit types, cluster groups, cluster types and tenant groups

use super::{store, MockNetBoxClient};
use crate::error::NetBoxError;
use crate::models::*;

pub fn save_circuit_type(client: &MockNetBoxClient, id: u64, body: &WritableNamed) -> Result<CircuitType, NetBoxError> {
    let circuit_type = CircuitType {
        id,
        url: client.helpers().url("circuits/circuit-types", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        description: body.description.clone().unwrap_or_default(),
    };
    Ok(store(&client.circuit_types, id, circuit_type))
}

pub fn save_cluster_group(client: &MockNetBoxClient, id: u64, body: &WritableNamed) -> Result<ClusterGroup, NetBoxError> {
    let group = ClusterGroup {
        id,
        url: client.helpers().url("virtualization/cluster-groups", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        description: body.description.clone().unwrap_or_default(),
    };
    Ok(store(&client.cluster_groups, id, group))
}

pub fn save_cluster_type(client: &MockNetBoxClient, id: u64, body: &WritableNamed) -> Result<ClusterType, NetBoxError> {
    let cluster_type = ClusterType {
        id,
        url: client.helpers().url("virtualization/cluster-types", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        description: body.description.clone().unwrap_or_default(),
    };
    Ok(store(&client.cluster_types, id, cluster_type))
}

pub fn save_tenant_group(client: &MockNetBoxClient, id: u64, body: &WritableTenantGroup) -> Result<TenantGroup, NetBoxError> {
    if body.parent == Some(id) {
        return Err(NetBoxError::InvalidRequest(
            "parent: Cannot assign self as parent.".to_string(),
        ));
    }

    let helpers = client.helpers();
    let group = TenantGroup {
        id,
        url: helpers.url("tenancy/tenant-groups", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        parent: body.parent.map(|id| helpers.nested_tenant_group(id)),
        description: body.description.clone(),
    };
    Ok(store(&client.tenant_groups, id, group))
}
