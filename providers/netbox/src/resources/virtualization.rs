//! Virtualization resources
//!
//! Handles: cluster groups (`netbox_cluster_group`), cluster types (`netbox_cluster_type`)

use crate::error::ProviderError;
use crate::helpers::{non_empty, slug_or_name};
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Schema};
use netbox_client::{ClusterGroup, ClusterType, NetBoxClientTrait, WritableNamed};
use serde::{Deserialize, Serialize};
use tracing::info;

// ====================
// Cluster groups
// ====================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterGroupConfig {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterGroupState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<ClusterGroup> for ClusterGroupState {
    fn from(group: ClusterGroup) -> Self {
        Self {
            id: ResourceId::new(group.id),
            name: group.name,
            slug: group.slug,
            description: non_empty(group.description),
        }
    }
}

impl ClusterGroupConfig {
    fn to_writable(&self) -> WritableNamed {
        WritableNamed {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            // Always sent so that removing it from the configuration clears it
            description: Some(self.description.clone().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterGroupResource;

#[async_trait::async_trait]
impl Resource for ClusterGroupResource {
    const TYPE_NAME: &'static str = "netbox_cluster_group";

    type Config = ClusterGroupConfig;
    type State = ClusterGroupState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(0, 30))
            .with_attribute("description", Attribute::optional_string())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &ClusterGroupConfig,
    ) -> Result<ClusterGroupState, ProviderError> {
        let created = client.create_cluster_group(&config.to_writable()).await?;
        info!("Created cluster group {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<ClusterGroupState, ProviderError> {
        Ok(client.get_cluster_group(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &ClusterGroupConfig,
    ) -> Result<ClusterGroupState, ProviderError> {
        client.update_cluster_group(id.get(), &config.to_writable()).await?;
        info!("Updated cluster group {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_cluster_group(id.get()).await?;
        info!("Deleted cluster group {} from NetBox", id);
        Ok(())
    }
}

// ====================
// Cluster types
// ====================

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClusterTypeConfig {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterTypeState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
}

impl From<ClusterType> for ClusterTypeState {
    fn from(cluster_type: ClusterType) -> Self {
        Self {
            id: ResourceId::new(cluster_type.id),
            name: cluster_type.name,
            slug: cluster_type.slug,
        }
    }
}

impl ClusterTypeConfig {
    fn to_writable(&self) -> WritableNamed {
        WritableNamed {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClusterTypeResource;

#[async_trait::async_trait]
impl Resource for ClusterTypeResource {
    const TYPE_NAME: &'static str = "netbox_cluster_type";

    type Config = ClusterTypeConfig;
    type State = ClusterTypeState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", Attribute::optional_computed_string())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &ClusterTypeConfig,
    ) -> Result<ClusterTypeState, ProviderError> {
        let created = client.create_cluster_type(&config.to_writable()).await?;
        info!("Created cluster type {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<ClusterTypeState, ProviderError> {
        Ok(client.get_cluster_type(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &ClusterTypeConfig,
    ) -> Result<ClusterTypeState, ProviderError> {
        client.update_cluster_type(id.get(), &config.to_writable()).await?;
        info!("Updated cluster type {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_cluster_type(id.get()).await?;
        info!("Deleted cluster type {} from NetBox", id);
        Ok(())
    }
}
