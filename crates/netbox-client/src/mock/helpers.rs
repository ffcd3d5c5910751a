//! Helper functions for creating nested NetBox model types

use super::{lock, MockNetBoxClient};
use crate::models::*;

/// Builds nested references the way NetBox renders them in responses.
///
/// When the referenced object exists in the mock store its real name is used,
/// otherwise a placeholder name is derived from the ID.
pub struct Helpers<'a> {
    client: &'a MockNetBoxClient,
}

fn slug_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

impl<'a> Helpers<'a> {
    pub fn new(client: &'a MockNetBoxClient) -> Self {
        Self { client }
    }

    /// URL of an object under the mock base URL
    pub fn url(&self, endpoint: &str, id: u64) -> String {
        format!("{}/api/{}/{}/", self.client.base_url, endpoint, id)
    }

    pub fn nested_tenant(&self, id: u64) -> NestedTenant {
        let name = format!("Tenant {}", id);
        NestedTenant {
            id,
            url: self.url("tenancy/tenants", id),
            display: name.clone(),
            slug: slug_of(&name),
            name,
        }
    }

    pub fn nested_tenant_group(&self, id: u64) -> NestedTenantGroup {
        let name = lock(&self.client.tenant_groups)
            .get(&id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| format!("Tenant Group {}", id));
        NestedTenantGroup {
            id,
            url: self.url("tenancy/tenant-groups", id),
            display: name.clone(),
            slug: slug_of(&name),
            name,
        }
    }

    pub fn nested_rir(&self, id: u64) -> NestedRir {
        let name = lock(&self.client.rirs)
            .get(&id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| format!("RIR {}", id));
        NestedRir {
            id,
            url: self.url("ipam/rirs", id),
            display: name.clone(),
            slug: slug_of(&name),
            name,
        }
    }

    pub fn nested_region(&self, id: u64) -> NestedRegion {
        let name = format!("Region {}", id);
        NestedRegion {
            id,
            url: self.url("dcim/regions", id),
            display: name.clone(),
            slug: slug_of(&name),
            name,
        }
    }

    /// ASN objects are addressed by ID; the mock numbers them from the private range
    pub fn nested_asn(&self, id: u64) -> NestedAsn {
        let asn = 64512 + id;
        NestedAsn {
            id,
            url: self.url("ipam/asns", id),
            display: format!("AS{}", asn),
            asn,
        }
    }

    pub fn nested_user(&self, id: u64) -> NestedUser {
        let username = format!("user{}", id);
        NestedUser {
            id,
            url: self.url("users/users", id),
            display: username.clone(),
            username,
        }
    }

    /// Expand tag references from a write body into nested tags.
    ///
    /// References are matched by name against stored tags; unknown names get ID 0.
    pub fn nested_tags(&self, refs: &[NestedTagRef]) -> Vec<NestedTag> {
        let tags = lock(&self.client.tags);
        refs.iter()
            .map(|r| match tags.values().find(|t| t.name == r.name) {
                Some(tag) => NestedTag {
                    id: tag.id,
                    url: tag.url.clone(),
                    display: tag.name.clone(),
                    name: tag.name.clone(),
                    slug: tag.slug.clone(),
                    color: tag.color.clone(),
                },
                None => NestedTag {
                    id: 0,
                    url: self.url("extras/tags", 0),
                    display: r.name.clone(),
                    name: r.name.clone(),
                    slug: r.slug.clone(),
                    color: String::new(),
                },
            })
            .collect()
    }
}
