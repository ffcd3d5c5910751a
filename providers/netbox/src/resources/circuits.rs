//! Circuits resources
//!
//! Handles: circuit types (`netbox_circuit_type`)

use crate::error::ProviderError;
use crate::helpers::slug_or_name;
use crate::resource::{Resource, ResourceId};
use crate::resources::slug_attribute;
use crate::schema::{Attribute, Schema};
use netbox_client::{CircuitType, NetBoxClientTrait, WritableNamed};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CircuitTypeConfig {
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircuitTypeState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
}

impl From<CircuitType> for CircuitTypeState {
    fn from(circuit_type: CircuitType) -> Self {
        Self {
            id: ResourceId::new(circuit_type.id),
            name: circuit_type.name,
            slug: circuit_type.slug,
        }
    }
}

impl CircuitTypeConfig {
    fn to_writable(&self) -> WritableNamed {
        WritableNamed {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CircuitTypeResource;

#[async_trait::async_trait]
impl Resource for CircuitTypeResource {
    const TYPE_NAME: &'static str = "netbox_circuit_type";

    type Config = CircuitTypeConfig;
    type State = CircuitTypeState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", slug_attribute(0, 30))
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &CircuitTypeConfig,
    ) -> Result<CircuitTypeState, ProviderError> {
        let created = client.create_circuit_type(&config.to_writable()).await?;
        info!("Created circuit type {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<CircuitTypeState, ProviderError> {
        Ok(client.get_circuit_type(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &CircuitTypeConfig,
    ) -> Result<CircuitTypeState, ProviderError> {
        client.update_circuit_type(id.get(), &config.to_writable()).await?;
        info!("Updated circuit type {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_circuit_type(id.get()).await?;
        info!("Deleted circuit type {} from NetBox", id);
        Ok(())
    }
}
