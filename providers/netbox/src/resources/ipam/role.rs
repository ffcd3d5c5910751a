//! `netbox_ipam_role` resource

use crate::error::ProviderError;
use crate::helpers::{non_empty, slug_or_name};
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::{NetBoxClientTrait, Role, WritableRole};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IpamRoleConfig {
    pub name: String,
    pub slug: Option<String>,
    pub weight: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpamRoleState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub weight: Option<i64>,
    pub description: Option<String>,
}

impl From<Role> for IpamRoleState {
    fn from(role: Role) -> Self {
        Self {
            id: ResourceId::new(role.id),
            name: role.name,
            slug: role.slug,
            weight: role.weight,
            description: non_empty(role.description),
        }
    }
}

impl IpamRoleConfig {
    fn to_writable(&self) -> WritableRole {
        WritableRole {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            weight: self.weight,
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IpamRoleResource;

#[async_trait::async_trait]
impl Resource for IpamRoleResource {
    const TYPE_NAME: &'static str = "netbox_ipam_role";

    type Config = IpamRoleConfig;
    type State = IpamRoleState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(1, 100))
            .with_attribute(
                "weight",
                Attribute::optional_int().with_constraint(Constraint::IntRange { min: 0, max: 32767 }),
            )
            .with_attribute("description", Attribute::optional_string())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &IpamRoleConfig,
    ) -> Result<IpamRoleState, ProviderError> {
        let created = client.create_role(&config.to_writable()).await?;
        info!("Created IPAM role {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<IpamRoleState, ProviderError> {
        Ok(client.get_role(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &IpamRoleConfig,
    ) -> Result<IpamRoleState, ProviderError> {
        client.update_role(id.get(), &config.to_writable()).await?;
        info!("Updated IPAM role {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_role(id.get()).await?;
        info!("Deleted IPAM role {} from NetBox", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_client;

    #[tokio::test]
    async fn test_weight_and_description_round_trip() {
        let client = mock_client();
        let config = IpamRoleConfig {
            name: "Loopbacks".to_string(),
            slug: None,
            weight: Some(50),
            description: Some("Router loopbacks".to_string()),
        };

        let state = IpamRoleResource.create(&client, &config).await.unwrap();
        assert_eq!(state.slug, "Loopbacks");
        assert_eq!(state.weight, Some(50));
        assert_eq!(state.description.as_deref(), Some("Router loopbacks"));
    }

    #[tokio::test]
    async fn test_unset_weight_reads_server_default() {
        let client = mock_client();
        let config = IpamRoleConfig {
            name: "Transit".to_string(),
            ..Default::default()
        };

        let state = IpamRoleResource.create(&client, &config).await.unwrap();
        assert_eq!(state.weight, Some(1000));
    }
}
