//! `netbox_vrf` resource

use crate::error::ProviderError;
use crate::helpers::{resolve_tags, tag_names};
use crate::resource::{Resource, ResourceId};
use crate::schema::{Attribute, Schema};
use netbox_client::{NetBoxClientTrait, Vrf, WritableVrf};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VrfConfig {
    pub name: String,
    pub tenant_id: Option<u64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VrfState {
    pub id: ResourceId,
    pub name: String,
    pub tenant_id: Option<u64>,
    pub tags: BTreeSet<String>,
}

impl From<Vrf> for VrfState {
    fn from(vrf: Vrf) -> Self {
        Self {
            id: ResourceId::new(vrf.id),
            name: vrf.name,
            tenant_id: vrf.tenant.map(|t| t.id),
            tags: tag_names(&vrf.tags).into_iter().collect(),
        }
    }
}

impl VrfConfig {
    async fn to_writable(
        &self,
        client: &dyn NetBoxClientTrait,
    ) -> Result<WritableVrf, ProviderError> {
        Ok(WritableVrf {
            name: self.name.clone(),
            tenant: self.tenant_id,
            tags: resolve_tags(client, &self.tags).await?,
            // Route targets are not managed here
            import_targets: vec![],
            export_targets: vec![],
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VrfResource;

#[async_trait::async_trait]
impl Resource for VrfResource {
    const TYPE_NAME: &'static str = "netbox_vrf";

    type Config = VrfConfig;
    type State = VrfState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("tenant_id", Attribute::optional_id())
            .with_attribute("tags", Attribute::optional_string_set())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &VrfConfig,
    ) -> Result<VrfState, ProviderError> {
        let body = config.to_writable(client).await?;
        let created = client.create_vrf(&body).await?;
        info!("Created VRF {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<VrfState, ProviderError> {
        Ok(client.get_vrf(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &VrfConfig,
    ) -> Result<VrfState, ProviderError> {
        let body = config.to_writable(client).await?;
        client.update_vrf(id.get(), &body).await?;
        info!("Updated VRF {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_vrf(id.get()).await?;
        info!("Deleted VRF {} from NetBox", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_client;

    #[tokio::test]
    async fn test_tags_read_back_set_equal() {
        let client = mock_client();
        let config = VrfConfig {
            name: "customer-a".to_string(),
            tenant_id: Some(4),
            tags: ["l3vpn", "gold"].iter().map(|s| s.to_string()).collect(),
        };

        let state = VrfResource.create(&client, &config).await.unwrap();
        assert_eq!(state.tags, config.tags);
        assert_eq!(state.tenant_id, Some(4));
    }

    #[tokio::test]
    async fn test_same_update_twice_is_stable() {
        let client = mock_client();
        let config = VrfConfig {
            name: "mgmt".to_string(),
            ..Default::default()
        };
        let state = VrfResource.create(&client, &config).await.unwrap();

        let renamed = VrfConfig {
            name: "oob-mgmt".to_string(),
            ..config
        };
        let first = VrfResource.update(&client, &state.id, &renamed).await.unwrap();
        let second = VrfResource.update(&client, &state.id, &renamed).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.name, "oob-mgmt");
    }
}
