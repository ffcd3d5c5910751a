//! `netbox_manufacturer` resource

use crate::error::ProviderError;
use crate::helpers::slug_or_name;
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Schema};
use netbox_client::{Manufacturer, NetBoxClientTrait, WritableNamed};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ManufacturerConfig {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturerState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
}

impl From<Manufacturer> for ManufacturerState {
    fn from(m: Manufacturer) -> Self {
        Self {
            id: ResourceId::new(m.id),
            name: m.name,
            slug: m.slug,
        }
    }
}

impl ManufacturerConfig {
    fn to_writable(&self) -> WritableNamed {
        WritableNamed {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManufacturerResource;

#[async_trait::async_trait]
impl Resource for ManufacturerResource {
    const TYPE_NAME: &'static str = "netbox_manufacturer";

    type Config = ManufacturerConfig;
    type State = ManufacturerState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(0, 30))
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &ManufacturerConfig,
    ) -> Result<ManufacturerState, ProviderError> {
        let created = client.create_manufacturer(&config.to_writable()).await?;
        info!("Created manufacturer {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<ManufacturerState, ProviderError> {
        Ok(client.get_manufacturer(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &ManufacturerConfig,
    ) -> Result<ManufacturerState, ProviderError> {
        client.update_manufacturer(id.get(), &config.to_writable()).await?;
        info!("Updated manufacturer {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_manufacturer(id.get()).await?;
        info!("Deleted manufacturer {} from NetBox", id);
        Ok(())
    }
}
