//! IPAM operations for MockNetBoxClient
//!
//! Handles aggregates, RIRs, IPAM roles, VRFs and IP ranges

use super::{lock, paginate, store, MockNetBoxClient};
use crate::error::NetBoxError;
use crate::models::*;

pub fn save_aggregate(client: &MockNetBoxClient, id: u64, body: &WritableAggregate) -> Result<Aggregate, NetBoxError> {
    let helpers = client.helpers();
    let aggregate = Aggregate {
        id,
        url: helpers.url("ipam/aggregates", id),
        display: body.prefix.clone(),
        prefix: body.prefix.clone(),
        rir: body.rir.map(|id| helpers.nested_rir(id)),
        tenant: body.tenant.map(|id| helpers.nested_tenant(id)),
        description: body.description.clone(),
        tags: helpers.nested_tags(&body.tags),
        custom_fields: serde_json::json!({}),
    };
    Ok(store(&client.aggregates, id, aggregate))
}

pub fn save_rir(client: &MockNetBoxClient, id: u64, body: &WritableNamed) -> Result<Rir, NetBoxError> {
    let rir = Rir {
        id,
        url: client.helpers().url("ipam/rirs", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        is_private: false,
        description: body.description.clone().unwrap_or_default(),
    };
    Ok(store(&client.rirs, id, rir))
}

pub fn save_role(client: &MockNetBoxClient, id: u64, body: &WritableRole) -> Result<Role, NetBoxError> {
    let role = Role {
        id,
        url: client.helpers().url("ipam/roles", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        // NetBox defaults the weight to 1000
        weight: Some(body.weight.unwrap_or(1000)),
        description: body.description.clone(),
    };
    Ok(store(&client.roles, id, role))
}

pub fn save_vrf(client: &MockNetBoxClient, id: u64, body: &WritableVrf) -> Result<Vrf, NetBoxError> {
    let helpers = client.helpers();
    let vrf = Vrf {
        id,
        url: helpers.url("ipam/vrfs", id),
        display: body.name.clone(),
        name: body.name.clone(),
        rd: None,
        tenant: body.tenant.map(|id| helpers.nested_tenant(id)),
        tags: helpers.nested_tags(&body.tags),
    };
    Ok(store(&client.vrfs, id, vrf))
}

/// All stored ranges match; the `contains` filter is not evaluated
pub fn list_ip_ranges(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> PaginatedResponse<IpRange> {
    let mut ranges: Vec<IpRange> = lock(&client.ip_ranges).values().cloned().collect();
    ranges.sort_by_key(|r| r.id);
    paginate(ranges, filters)
}
