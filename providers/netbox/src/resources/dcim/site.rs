//! `netbox_site` resource

use crate::error::ProviderError;
use crate::helpers::{custom_fields_from_response, non_empty, resolve_tags, slug_or_name, tag_names};
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::{NetBoxClientTrait, Site, WritableSite};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Site lifecycle states accepted by NetBox
pub const SITE_STATUSES: &[&str] = &["planned", "staging", "active", "decommissioning", "retired"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub slug: Option<String>,
    pub status: String,
    pub description: Option<String>,
    pub facility: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub region_id: Option<u64>,
    pub tenant_id: Option<u64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub timezone: Option<String>,
    /// ID of the ASN object assigned to the site
    pub asn: Option<u64>,
    pub custom_fields: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub description: Option<String>,
    pub facility: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub region_id: Option<u64>,
    pub tenant_id: Option<u64>,
    pub tags: BTreeSet<String>,
    pub timezone: Option<String>,
    pub asn: Option<u64>,
    pub custom_fields: Option<Map<String, Value>>,
}

impl From<Site> for SiteState {
    fn from(site: Site) -> Self {
        Self {
            id: ResourceId::new(site.id),
            slug: site.slug,
            status: site.status.value,
            description: non_empty(site.description),
            facility: non_empty(site.facility),
            longitude: site.longitude,
            latitude: site.latitude,
            region_id: site.region.map(|r| r.id),
            tenant_id: site.tenant.map(|t| t.id),
            tags: tag_names(&site.tags).into_iter().collect(),
            timezone: site.time_zone.and_then(non_empty),
            asn: site.asns.first().map(|a| a.id),
            custom_fields: custom_fields_from_response(&site.custom_fields),
            name: site.name,
        }
    }
}

impl SiteConfig {
    async fn to_writable(
        &self,
        client: &dyn NetBoxClientTrait,
    ) -> Result<WritableSite, ProviderError> {
        Ok(WritableSite {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            status: self.status.clone(),
            region: self.region_id,
            tenant: self.tenant_id,
            facility: self.facility.clone().unwrap_or_default(),
            asns: self.asn.into_iter().collect(),
            time_zone: self.timezone.clone(),
            description: self.description.clone().unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
            tags: resolve_tags(client, &self.tags).await?,
            custom_fields: self.custom_fields.clone(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SiteResource;

#[async_trait::async_trait]
impl Resource for SiteResource {
    const TYPE_NAME: &'static str = "netbox_site";

    type Config = SiteConfig;
    type State = SiteState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(0, 30))
            .with_attribute(
                "status",
                Attribute::required_string().with_constraint(Constraint::OneOf { values: SITE_STATUSES }),
            )
            .with_attribute(
                "description",
                Attribute::optional_string().with_constraint(Constraint::StringLength { min: 0, max: 200 }),
            )
            .with_attribute(
                "facility",
                Attribute::optional_string().with_constraint(Constraint::StringLength { min: 0, max: 50 }),
            )
            .with_attribute("longitude", Attribute::optional_float())
            .with_attribute("latitude", Attribute::optional_float())
            .with_attribute("region_id", Attribute::optional_id())
            .with_attribute("tenant_id", Attribute::optional_id())
            .with_attribute("tags", Attribute::optional_string_set())
            .with_attribute("timezone", Attribute::optional_string())
            .with_attribute("asn", Attribute::optional_id().with_description("ID of the ASN object"))
            .with_attribute("custom_fields", Attribute::optional_map())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &SiteConfig,
    ) -> Result<SiteState, ProviderError> {
        let body = config.to_writable(client).await?;
        debug!("Creating site {} with {} tags", body.name, body.tags.len());
        let created = client.create_site(&body).await?;
        info!("Created site {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<SiteState, ProviderError> {
        Ok(client.get_site(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &SiteConfig,
    ) -> Result<SiteState, ProviderError> {
        let body = config.to_writable(client).await?;
        client.update_site(id.get(), &body).await?;
        info!("Updated site {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_site(id.get()).await?;
        info!("Deleted site {} from NetBox", id);
        Ok(())
    }
}
