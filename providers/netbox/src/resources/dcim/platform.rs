//! `netbox_platform` resource

use crate::error::ProviderError;
use crate::helpers::slug_or_name;
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Schema};
use netbox_client::{Platform, NetBoxClientTrait, WritableNamed};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlatformConfig {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
}

impl From<Platform> for PlatformState {
    fn from(m: Platform) -> Self {
        Self {
            id: ResourceId::new(m.id),
            name: m.name,
            slug: m.slug,
        }
    }
}

impl PlatformConfig {
    fn to_writable(&self) -> WritableNamed {
        WritableNamed {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformResource;

#[async_trait::async_trait]
impl Resource for PlatformResource {
    const TYPE_NAME: &'static str = "netbox_platform";

    type Config = PlatformConfig;
    type State = PlatformState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(0, 30))
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &PlatformConfig,
    ) -> Result<PlatformState, ProviderError> {
        let created = client.create_platform(&config.to_writable()).await?;
        info!("Created platform {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<PlatformState, ProviderError> {
        Ok(client.get_platform(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &PlatformConfig,
    ) -> Result<PlatformState, ProviderError> {
        client.update_platform(id.get(), &config.to_writable()).await?;
        info!("Updated platform {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_platform(id.get()).await?;
        info!("Deleted platform {} from NetBox", id);
        Ok(())
    }
}
