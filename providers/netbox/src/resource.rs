//! Resource and data source traits
//!
//! A resource pairs a [`Schema`] with the Create / Read / Update / Delete /
//! Import lifecycle against NetBox. Configuration and state are typed per
//! resource; [`DynamicResource`] erases those types so the provider can
//! dispatch on type names with plain JSON attribute maps.

use crate::error::ProviderError;
use crate::schema::Schema;
use netbox_client::NetBoxClientTrait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Identity of a managed object: its NetBox primary key.
///
/// Rendered as a decimal string. Not `Copy`, so that `delete` can consume it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProviderError::InvalidId(s.to_string()));
        }
        s.parse::<u64>()
            .map(ResourceId)
            .map_err(|_| ProviderError::InvalidId(s.to_string()))
    }
}

impl Serialize for ResourceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A NetBox object type managed with the CRUD lifecycle
#[async_trait::async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Type name, e.g. `netbox_site`
    const TYPE_NAME: &'static str;

    type Config: DeserializeOwned + Send + Sync;
    type State: Serialize + Send;

    fn schema(&self) -> Schema;

    /// Create the object, then read it back
    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &Self::Config,
    ) -> Result<Self::State, ProviderError>;

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<Self::State, ProviderError>;

    /// Send the full write model as a partial update, then read it back
    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &Self::Config,
    ) -> Result<Self::State, ProviderError>;

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError>;

    /// Adopt an existing object by its ID string
    async fn import(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &str,
    ) -> Result<Self::State, ProviderError> {
        let id: ResourceId = id.parse()?;
        self.read(client, &id).await
    }
}

/// A read-only lookup
#[async_trait::async_trait]
pub trait DataSource: Send + Sync + 'static {
    /// Type name, e.g. `netbox_device`
    const TYPE_NAME: &'static str;

    type Query: DeserializeOwned + Send + Sync;
    type State: Serialize + Send;

    fn schema(&self) -> Schema;

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        query: &Self::Query,
    ) -> Result<Self::State, ProviderError>;
}

/// Type-erased resource operating on JSON attribute maps
#[async_trait::async_trait]
pub trait DynamicResource: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn schema(&self) -> Schema;
    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        attrs: Value,
    ) -> Result<Value, ProviderError>;
    async fn read(&self, client: &dyn NetBoxClientTrait, id: &str) -> Result<Value, ProviderError>;
    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &str,
        attrs: Value,
    ) -> Result<Value, ProviderError>;
    async fn delete(&self, client: &dyn NetBoxClientTrait, id: &str) -> Result<(), ProviderError>;
    async fn import(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &str,
    ) -> Result<Value, ProviderError>;
}

/// Type-erased data source operating on JSON attribute maps
#[async_trait::async_trait]
pub trait DynamicDataSource: Send + Sync {
    fn type_name(&self) -> &'static str;
    fn schema(&self) -> Schema;
    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        attrs: Value,
    ) -> Result<Value, ProviderError>;
}

/// Wraps a typed resource or data source as its dynamic counterpart
#[derive(Debug)]
pub struct Erased<T>(pub T);

/// Validate an attribute map and convert it into a typed configuration
pub fn decode_config<C: DeserializeOwned>(schema: &Schema, attrs: Value) -> Result<C, ProviderError> {
    let normalized = schema.validate(attrs)?;
    debug!("Validated attributes: {}", normalized);
    Ok(serde_json::from_value(normalized)?)
}

#[async_trait::async_trait]
impl<R: Resource> DynamicResource for Erased<R> {
    fn type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        self.0.schema()
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        attrs: Value,
    ) -> Result<Value, ProviderError> {
        let config: R::Config = decode_config(&self.0.schema(), attrs)?;
        let state = self.0.create(client, &config).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn read(&self, client: &dyn NetBoxClientTrait, id: &str) -> Result<Value, ProviderError> {
        let id: ResourceId = id.parse()?;
        let state = self.0.read(client, &id).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &str,
        attrs: Value,
    ) -> Result<Value, ProviderError> {
        let id: ResourceId = id.parse()?;
        let config: R::Config = decode_config(&self.0.schema(), attrs)?;
        let state = self.0.update(client, &id, &config).await?;
        Ok(serde_json::to_value(state)?)
    }

    async fn delete(&self, client: &dyn NetBoxClientTrait, id: &str) -> Result<(), ProviderError> {
        let id: ResourceId = id.parse()?;
        self.0.delete(client, id).await
    }

    async fn import(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &str,
    ) -> Result<Value, ProviderError> {
        let state = self.0.import(client, id).await?;
        Ok(serde_json::to_value(state)?)
    }
}

#[async_trait::async_trait]
impl<D: DataSource> DynamicDataSource for Erased<D> {
    fn type_name(&self) -> &'static str {
        D::TYPE_NAME
    }

    fn schema(&self) -> Schema {
        self.0.schema()
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        attrs: Value,
    ) -> Result<Value, ProviderError> {
        let query: D::Query = decode_config(&self.0.schema(), attrs)?;
        let state = self.0.read(client, &query).await?;
        Ok(serde_json::to_value(state)?)
    }
}
