//! Provider registry
//!
//! Maps resource and data source type names to their type-erased adapters
//! and dispatches lifecycle calls with the configured client.

use crate::config::ProviderConfig;
use crate::data_sources::{DeviceDataSource, IpRangeDataSource};
use crate::error::ProviderError;
use crate::resource::{DataSource, DynamicDataSource, DynamicResource, Erased, Resource};
use crate::resources::*;
use crate::schema::Schema;
use netbox_client::NetBoxClientTrait;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{error, info};

/// Every schema the provider publishes, keyed by type name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSchema {
    pub resources: BTreeMap<&'static str, Schema>,
    pub data_sources: BTreeMap<&'static str, Schema>,
}

/// Type-erased adapters keyed by type name
pub struct Registry {
    resources: BTreeMap<&'static str, Box<dyn DynamicResource>>,
    data_sources: BTreeMap<&'static str, Box<dyn DynamicDataSource>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .field("data_sources", &self.data_sources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self {
            resources: BTreeMap::new(),
            data_sources: BTreeMap::new(),
        };

        registry.register_resource(AggregateResource);
        registry.register_resource(CircuitTypeResource);
        registry.register_resource(ClusterGroupResource);
        registry.register_resource(ClusterTypeResource);
        registry.register_resource(CustomFieldResource);
        registry.register_resource(IpamRoleResource);
        registry.register_resource(ManufacturerResource);
        registry.register_resource(PlatformResource);
        registry.register_resource(RirResource);
        registry.register_resource(SiteResource);
        registry.register_resource(TagResource);
        registry.register_resource(TenantGroupResource);
        registry.register_resource(TokenResource);
        registry.register_resource(VrfResource);

        registry.register_data_source(DeviceDataSource);
        registry.register_data_source(IpRangeDataSource);

        registry
    }
}

impl Registry {
    fn register_resource<R: Resource>(&mut self, resource: R) {
        self.resources.insert(R::TYPE_NAME, Box::new(Erased(resource)));
    }

    fn register_data_source<D: DataSource>(&mut self, data_source: D) {
        self.data_sources.insert(D::TYPE_NAME, Box::new(Erased(data_source)));
    }

    pub fn resource_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resources.keys().copied()
    }

    pub fn data_source_types(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.data_sources.keys().copied()
    }

    /// Every published schema; needs no connection
    pub fn schemas(&self) -> ProviderSchema {
        ProviderSchema {
            resources: self.resources.iter().map(|(name, r)| (*name, r.schema())).collect(),
            data_sources: self.data_sources.iter().map(|(name, d)| (*name, d.schema())).collect(),
        }
    }

    pub fn resource(&self, type_name: &str) -> Result<&dyn DynamicResource, ProviderError> {
        self.resources
            .get(type_name)
            .map(|r| r.as_ref())
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_string()))
    }

    pub fn data_source(&self, type_name: &str) -> Result<&dyn DynamicDataSource, ProviderError> {
        self.data_sources
            .get(type_name)
            .map(|d| d.as_ref())
            .ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))
    }
}

/// Configured provider: a client plus the registry
pub struct Provider {
    client: Box<dyn NetBoxClientTrait>,
    registry: Registry,
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provider")
            .field("base_url", &self.client.base_url())
            .field("registry", &self.registry)
            .finish()
    }
}

impl Provider {
    /// Connect to NetBox and check that the token is accepted
    pub async fn configure(config: &ProviderConfig) -> Result<Self, ProviderError> {
        info!("Configuring NetBox provider for {}", config.server_url);
        let client = config.build_client()?;
        client.validate_token().await.map_err(|e| {
            error!("Failed to validate NetBox token against {}: {}", config.server_url, e);
            ProviderError::NetBox(e)
        })?;
        info!("NetBox token validated");
        Ok(Self::with_client(Box::new(client)))
    }

    /// Build a provider around an existing client
    pub fn with_client(client: Box<dyn NetBoxClientTrait>) -> Self {
        Self {
            client,
            registry: Registry::default(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn schemas(&self) -> ProviderSchema {
        self.registry.schemas()
    }

    pub async fn create(&self, type_name: &str, attrs: Value) -> Result<Value, ProviderError> {
        self.registry.resource(type_name)?.create(self.client.as_ref(), attrs).await
    }

    pub async fn read(&self, type_name: &str, id: &str) -> Result<Value, ProviderError> {
        self.registry.resource(type_name)?.read(self.client.as_ref(), id).await
    }

    pub async fn update(
        &self,
        type_name: &str,
        id: &str,
        attrs: Value,
    ) -> Result<Value, ProviderError> {
        self.registry.resource(type_name)?.update(self.client.as_ref(), id, attrs).await
    }

    pub async fn delete(&self, type_name: &str, id: &str) -> Result<(), ProviderError> {
        self.registry.resource(type_name)?.delete(self.client.as_ref(), id).await
    }

    pub async fn import(&self, type_name: &str, id: &str) -> Result<Value, ProviderError> {
        self.registry.resource(type_name)?.import(self.client.as_ref(), id).await
    }

    /// Run a data source lookup
    pub async fn lookup(&self, type_name: &str, attrs: Value) -> Result<Value, ProviderError> {
        self.registry.data_source(type_name)?.read(self.client.as_ref(), attrs).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_device, mock_client};
    use netbox_client::MockNetBoxClient;
    use serde_json::json;

    fn provider() -> (Provider, MockNetBoxClient) {
        let client = mock_client();
        (Provider::with_client(Box::new(client.clone())), client)
    }

    #[test]
    fn test_registry_lists_every_type() {
        let (provider, _) = provider();
        let resources: Vec<_> = provider.registry().resource_types().collect();
        assert_eq!(
            resources,
            vec![
                "netbox_aggregate",
                "netbox_circuit_type",
                "netbox_cluster_group",
                "netbox_cluster_type",
                "netbox_custom_field",
                "netbox_ipam_role",
                "netbox_manufacturer",
                "netbox_platform",
                "netbox_rir",
                "netbox_site",
                "netbox_tag",
                "netbox_tenant_group",
                "netbox_token",
                "netbox_vrf",
            ]
        );
        let data_sources: Vec<_> = provider.registry().data_source_types().collect();
        assert_eq!(data_sources, vec!["netbox_device", "netbox_ip_range"]);
    }

    #[test]
    fn test_schemas_export() {
        let exported = serde_json::to_value(Registry::default().schemas()).unwrap();
        assert_eq!(exported["resources"]["netbox_token"]["attributes"]["key"]["sensitive"], true);
        assert_eq!(exported["resources"]["netbox_site"]["attributes"]["id"]["mode"], "computed");
        assert_eq!(exported["data_sources"]["netbox_device"]["attributes"]["name"]["mode"], "required");
        assert_eq!(exported["data_sources"]["netbox_device"]["attributes"]["id"]["kind"], "int");
        assert_eq!(exported["data_sources"]["netbox_ip_range"]["attributes"]["id"]["kind"], "int");
        assert_eq!(exported["resources"]["netbox_tag"]["attributes"]["tags"]["kind"], "string_set");
    }

    #[tokio::test]
    async fn test_dispatch_lifecycle() {
        let (provider, _) = provider();
        let state = provider
            .create("netbox_manufacturer", json!({"name": "Juniper"}))
            .await
            .unwrap();
        let id = state["id"].as_str().unwrap().to_string();
        assert_eq!(state["slug"], "Juniper");

        let updated = provider
            .update("netbox_manufacturer", &id, json!({"name": "Juniper", "slug": "juniper"}))
            .await
            .unwrap();
        assert_eq!(updated["slug"], "juniper");

        assert_eq!(provider.import("netbox_manufacturer", &id).await.unwrap(), updated);

        provider.delete("netbox_manufacturer", &id).await.unwrap();
        let err = provider.read("netbox_manufacturer", &id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unknown_types() {
        let (provider, _) = provider();
        assert!(matches!(
            provider.create("netbox_prefix", json!({})).await,
            Err(ProviderError::UnknownResourceType(ref t)) if t == "netbox_prefix"
        ));
        assert!(matches!(
            provider.lookup("netbox_prefix", json!({})).await,
            Err(ProviderError::UnknownDataSource(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_id_rejected_before_client_call() {
        let (provider, _) = provider();
        assert!(matches!(
            provider.read("netbox_site", "fra1").await,
            Err(ProviderError::InvalidId(_))
        ));
        assert!(matches!(
            provider.delete("netbox_site", "").await,
            Err(ProviderError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_validation_happens_before_client_call() {
        let (provider, client) = provider();
        let err = provider
            .create("netbox_site", json!({"name": "fra1", "status": "active", "tags": ["edge"], "slug": "x".repeat(31)}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation { ref attribute, .. } if attribute == "slug"));
        assert_eq!(client.tag_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_device() {
        let (provider, client) = provider();
        client.add_device(create_test_device(8, "core-1"));
        let state = provider.lookup("netbox_device", json!({"name": "core-1"})).await.unwrap();
        assert_eq!(state["id"], 8);
        assert_eq!(state["primary_ip"], "192.0.2.10/24");
    }

    #[tokio::test]
    async fn test_configure_rejects_unreachable_netbox() {
        let config = ProviderConfig::new("http://127.0.0.1:9", "abc").unwrap();
        assert!(matches!(Provider::configure(&config).await, Err(ProviderError::NetBox(_))));
    }
}
