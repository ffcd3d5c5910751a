//! Tenancy resources
//!
//! Handles: tenant groups (`netbox_tenant_group`)

use crate::error::ProviderError;
use crate::helpers::{non_empty, slug_or_name};
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Schema};
use netbox_client::{NetBoxClientTrait, TenantGroup, WritableTenantGroup};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TenantGroupConfig {
    pub name: String,
    pub slug: Option<String>,
    pub parent_id: Option<u64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TenantGroupState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<u64>,
    pub description: Option<String>,
}

impl From<TenantGroup> for TenantGroupState {
    fn from(group: TenantGroup) -> Self {
        Self {
            id: ResourceId::new(group.id),
            name: group.name,
            slug: group.slug,
            parent_id: group.parent.map(|p| p.id),
            description: non_empty(group.description),
        }
    }
}

impl TenantGroupConfig {
    fn to_writable(&self) -> WritableTenantGroup {
        WritableTenantGroup {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            parent: self.parent_id,
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TenantGroupResource;

#[async_trait::async_trait]
impl Resource for TenantGroupResource {
    const TYPE_NAME: &'static str = "netbox_tenant_group";

    type Config = TenantGroupConfig;
    type State = TenantGroupState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(0, 30))
            .with_attribute("parent_id", Attribute::optional_id())
            .with_attribute("description", Attribute::optional_string())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &TenantGroupConfig,
    ) -> Result<TenantGroupState, ProviderError> {
        let created = client.create_tenant_group(&config.to_writable()).await?;
        info!("Created tenant group {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<TenantGroupState, ProviderError> {
        Ok(client.get_tenant_group(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &TenantGroupConfig,
    ) -> Result<TenantGroupState, ProviderError> {
        client.update_tenant_group(id.get(), &config.to_writable()).await?;
        info!("Updated tenant group {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_tenant_group(id.get()).await?;
        info!("Deleted tenant group {} from NetBox", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_client;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_parent_reads_back_as_parent_id() {
        let client = mock_client();
        let parent = TenantGroupResource
            .create(&client, &TenantGroupConfig { name: "Customers".to_string(), ..Default::default() })
            .await
            .unwrap();

        let child = TenantGroupResource
            .create(
                &client,
                &TenantGroupConfig {
                    name: "Enterprise".to_string(),
                    slug: Some("enterprise".to_string()),
                    parent_id: Some(parent.id.get()),
                    description: Some("Enterprise customers".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(
            child,
            TenantGroupState {
                id: child.id.clone(),
                name: "Enterprise".to_string(),
                slug: "enterprise".to_string(),
                parent_id: Some(parent.id.get()),
                description: Some("Enterprise customers".to_string()),
            }
        );
    }

    #[tokio::test]
    async fn test_self_parent_error_propagates() {
        let client = mock_client();
        let group = TenantGroupResource
            .create(&client, &TenantGroupConfig { name: "Loop".to_string(), ..Default::default() })
            .await
            .unwrap();

        let err = TenantGroupResource
            .update(
                &client,
                &group.id,
                &TenantGroupConfig {
                    name: "Loop".to_string(),
                    parent_id: Some(group.id.get()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NetBox(netbox_client::NetBoxError::InvalidRequest(_))));
    }
}
