//! `netbox_rir` resource

use crate::error::ProviderError;
use crate::helpers::slug_or_name;
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Schema};
use netbox_client::{NetBoxClientTrait, Rir, WritableNamed};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RirConfig {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RirState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
}

impl From<Rir> for RirState {
    fn from(rir: Rir) -> Self {
        Self {
            id: ResourceId::new(rir.id),
            name: rir.name,
            slug: rir.slug,
        }
    }
}

impl RirConfig {
    fn to_writable(&self) -> WritableNamed {
        WritableNamed {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RirResource;

#[async_trait::async_trait]
impl Resource for RirResource {
    const TYPE_NAME: &'static str = "netbox_rir";

    type Config = RirConfig;
    type State = RirState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(1, 100))
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &RirConfig,
    ) -> Result<RirState, ProviderError> {
        let created = client.create_rir(&config.to_writable()).await?;
        info!("Created RIR {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<RirState, ProviderError> {
        Ok(client.get_rir(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &RirConfig,
    ) -> Result<RirState, ProviderError> {
        client.update_rir(id.get(), &config.to_writable()).await?;
        info!("Updated RIR {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_rir(id.get()).await?;
        info!("Deleted RIR {} from NetBox", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{DynamicResource, Erased};
    use crate::test_utils::mock_client;

    #[tokio::test]
    async fn test_create_reads_back_state() {
        let client = mock_client();
        let state = RirResource
            .create(&client, &RirConfig { name: "RIPE".to_string(), slug: Some("ripe".to_string()) })
            .await
            .unwrap();
        assert_eq!(state.name, "RIPE");
        assert_eq!(state.slug, "ripe");
        assert_eq!(RirResource.read(&client, &state.id).await.unwrap(), state);
    }

    #[tokio::test]
    async fn test_empty_slug_rejected_by_schema() {
        let client = mock_client();
        let err = Erased(RirResource)
            .create(&client, serde_json::json!({"name": "ARIN", "slug": ""}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation { .. }));
    }
}
