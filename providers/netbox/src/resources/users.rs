//! Users resources
//!
//! Handles: API tokens (`netbox_token`)

use crate::error::ProviderError;
use crate::helpers::non_empty;
use crate::resource::{Resource, ResourceId};
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::{NetBoxClientTrait, Token, WritableToken};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Clone, Default, PartialEq, Deserialize)]
pub struct TokenConfig {
    pub user_id: u64,
    /// Token secret; NetBox generates one when unset
    pub key: Option<String>,
}

#[derive(Clone, PartialEq, Serialize)]
pub struct TokenState {
    pub id: ResourceId,
    pub user_id: Option<u64>,
    pub key: Option<String>,
}

// Keys never end up in logs
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("user_id", &self.user_id)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl std::fmt::Debug for TokenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenState")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl From<Token> for TokenState {
    fn from(token: Token) -> Self {
        Self {
            id: ResourceId::new(token.id),
            user_id: token.user.map(|u| u.id),
            key: non_empty(token.key),
        }
    }
}

impl TokenConfig {
    fn to_writable(&self) -> WritableToken {
        WritableToken {
            user: self.user_id,
            key: self.key.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenResource;

#[async_trait::async_trait]
impl Resource for TokenResource {
    const TYPE_NAME: &'static str = "netbox_token";

    type Config = TokenConfig;
    type State = TokenState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("user_id", Attribute::required_int().with_constraint(Constraint::IntAtLeast { min: 1 }))
            .with_attribute(
                "key",
                Attribute::optional_string()
                    .with_constraint(Constraint::StringLength { min: 40, max: 256 })
                    .sensitive(),
            )
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &TokenConfig,
    ) -> Result<TokenState, ProviderError> {
        let created = client.create_token(&config.to_writable()).await?;
        info!("Created token for user {} in NetBox (ID: {})", config.user_id, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<TokenState, ProviderError> {
        Ok(client.get_token(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &TokenConfig,
    ) -> Result<TokenState, ProviderError> {
        client.update_token(id.get(), &config.to_writable()).await?;
        info!("Updated token {} in NetBox", id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_token(id.get()).await?;
        info!("Deleted token {} from NetBox", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_client;

    const KEY: &str = "0123456789abcdef0123456789abcdef01234567";

    #[tokio::test]
    async fn test_configured_key_is_kept() {
        let client = mock_client();
        let state = TokenResource
            .create(&client, &TokenConfig { user_id: 3, key: Some(KEY.to_string()) })
            .await
            .unwrap();
        assert_eq!(state.user_id, Some(3));
        assert_eq!(state.key.as_deref(), Some(KEY));
    }

    #[tokio::test]
    async fn test_generated_key_survives_update_without_key() {
        let client = mock_client();
        let state = TokenResource
            .create(&client, &TokenConfig { user_id: 3, key: None })
            .await
            .unwrap();
        let generated = state.key.clone().unwrap();
        assert_eq!(generated.len(), 40);

        let updated = TokenResource
            .update(&client, &state.id, &TokenConfig { user_id: 4, key: None })
            .await
            .unwrap();
        assert_eq!(updated.key, Some(generated));
        assert_eq!(updated.user_id, Some(4));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = TokenConfig { user_id: 1, key: Some(KEY.to_string()) };
        assert!(!format!("{:?}", config).contains(KEY));
    }

    #[test]
    fn test_key_marked_sensitive() {
        let schema = TokenResource.schema();
        assert!(schema.attributes["key"].sensitive);
    }
}
