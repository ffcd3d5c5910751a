//! DCIM operations for MockNetBoxClient
//!
//! Handles sites, manufacturers, platforms and devices

use super::{filter_value, lock, paginate, store, MockNetBoxClient};
use crate::error::NetBoxError;
use crate::models::*;

pub fn save_site(client: &MockNetBoxClient, id: u64, body: &WritableSite) -> Result<Site, NetBoxError> {
    if body.status.is_empty() {
        return Err(NetBoxError::InvalidRequest("status: This field is required.".to_string()));
    }

    let helpers = client.helpers();
    let site = Site {
        id,
        url: helpers.url("dcim/sites", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        status: ChoiceValue::new(&body.status),
        region: body.region.map(|id| helpers.nested_region(id)),
        tenant: body.tenant.map(|id| helpers.nested_tenant(id)),
        facility: body.facility.clone(),
        asns: body.asns.iter().map(|id| helpers.nested_asn(*id)).collect(),
        time_zone: body.time_zone.clone(),
        description: body.description.clone(),
        latitude: body.latitude,
        longitude: body.longitude,
        tags: helpers.nested_tags(&body.tags),
        custom_fields: body
            .custom_fields
            .clone()
            .map(serde_json::Value::Object)
            .unwrap_or_else(|| serde_json::json!({})),
    };
    Ok(store(&client.sites, id, site))
}

pub fn save_manufacturer(client: &MockNetBoxClient, id: u64, body: &WritableNamed) -> Result<Manufacturer, NetBoxError> {
    let manufacturer = Manufacturer {
        id,
        url: client.helpers().url("dcim/manufacturers", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        description: body.description.clone().unwrap_or_default(),
    };
    Ok(store(&client.manufacturers, id, manufacturer))
}

pub fn save_platform(client: &MockNetBoxClient, id: u64, body: &WritableNamed) -> Result<Platform, NetBoxError> {
    let platform = Platform {
        id,
        url: client.helpers().url("dcim/platforms", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        description: body.description.clone().unwrap_or_default(),
    };
    Ok(store(&client.platforms, id, platform))
}

/// Devices matching the `name` filter (all devices when absent)
pub fn list_devices(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> PaginatedResponse<Device> {
    let name = filter_value(filters, "name");
    let mut devices: Vec<Device> = lock(&client.devices)
        .values()
        .filter(|d| name.is_none_or(|n| d.name.as_deref() == Some(n)))
        .cloned()
        .collect();
    devices.sort_by_key(|d| d.id);
    paginate(devices, filters)
}
