//! `netbox_aggregate` resource

use crate::error::ProviderError;
use crate::helpers::{non_empty, resolve_tags, tag_names};
use crate::resource::{Resource, ResourceId};
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::{Aggregate, NetBoxClientTrait, WritableAggregate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AggregateConfig {
    /// Network in CIDR notation
    pub prefix: String,
    pub description: Option<String>,
    pub tenant_id: Option<u64>,
    pub rir_id: Option<u64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateState {
    pub id: ResourceId,
    pub prefix: String,
    pub description: Option<String>,
    pub tenant_id: Option<u64>,
    pub rir_id: Option<u64>,
    pub tags: BTreeSet<String>,
}

impl From<Aggregate> for AggregateState {
    fn from(aggregate: Aggregate) -> Self {
        Self {
            id: ResourceId::new(aggregate.id),
            prefix: aggregate.prefix,
            description: non_empty(aggregate.description),
            tenant_id: aggregate.tenant.map(|t| t.id),
            rir_id: aggregate.rir.map(|r| r.id),
            tags: tag_names(&aggregate.tags).into_iter().collect(),
        }
    }
}

impl AggregateConfig {
    async fn to_writable(
        &self,
        client: &dyn NetBoxClientTrait,
    ) -> Result<WritableAggregate, ProviderError> {
        Ok(WritableAggregate {
            prefix: self.prefix.clone(),
            rir: self.rir_id,
            tenant: self.tenant_id,
            description: self.description.clone().unwrap_or_default(),
            tags: resolve_tags(client, &self.tags).await?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AggregateResource;

#[async_trait::async_trait]
impl Resource for AggregateResource {
    const TYPE_NAME: &'static str = "netbox_aggregate";

    type Config = AggregateConfig;
    type State = AggregateState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("prefix", Attribute::required_string().with_constraint(Constraint::Cidr))
            .with_attribute("description", Attribute::optional_string())
            .with_attribute("tenant_id", Attribute::optional_id())
            .with_attribute("rir_id", Attribute::optional_id())
            .with_attribute("tags", Attribute::optional_string_set())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &AggregateConfig,
    ) -> Result<AggregateState, ProviderError> {
        let body = config.to_writable(client).await?;
        debug!("Creating aggregate {} (RIR: {:?})", body.prefix, body.rir);
        let created = client.create_aggregate(&body).await?;
        info!("Created aggregate {} in NetBox (ID: {})", created.prefix, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<AggregateState, ProviderError> {
        Ok(client.get_aggregate(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &AggregateConfig,
    ) -> Result<AggregateState, ProviderError> {
        let body = config.to_writable(client).await?;
        client.update_aggregate(id.get(), &body).await?;
        info!("Updated aggregate {} in NetBox (ID: {})", config.prefix, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_aggregate(id.get()).await?;
        info!("Deleted aggregate {} from NetBox", id);
        Ok(())
    }
}
