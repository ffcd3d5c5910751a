//! `netbox_tag` resource

use crate::error::ProviderError;
use crate::helpers::{non_empty, slug_or_name, DEFAULT_TAG_COLOR};
use crate::resource::{Resource, ResourceId};
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::{NetBoxClientTrait, Tag, WritableTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TagConfig {
    pub name: String,
    pub slug: Option<String>,
    /// Six lowercase hex digits, without `#`
    pub color_hex: Option<String>,
    pub description: Option<String>,
    /// Accepted for compatibility; NetBox tags carry no tags of their own,
    /// so this is never sent
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagState {
    pub id: ResourceId,
    pub name: String,
    pub slug: String,
    pub color_hex: String,
    pub description: Option<String>,
    /// Configured `tags`, echoed back after create and update
    pub tags: BTreeSet<String>,
}

impl From<Tag> for TagState {
    fn from(tag: Tag) -> Self {
        Self {
            id: ResourceId::new(tag.id),
            name: tag.name,
            slug: tag.slug,
            color_hex: tag.color,
            description: non_empty(tag.description),
            tags: BTreeSet::new(),
        }
    }
}

impl TagConfig {
    fn to_writable(&self) -> WritableTag {
        WritableTag {
            name: self.name.clone(),
            slug: slug_or_name(self.slug.as_deref(), &self.name),
            color: self.color_hex.clone().unwrap_or_else(|| DEFAULT_TAG_COLOR.to_string()),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TagResource;

#[async_trait::async_trait]
impl Resource for TagResource {
    const TYPE_NAME: &'static str = "netbox_tag";

    type Config = TagConfig;
    type State = TagState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("slug", Attribute::optional_computed_string())
            .with_attribute(
                "color_hex",
                Attribute::optional_string()
                    .with_default(DEFAULT_TAG_COLOR)
                    .with_constraint(Constraint::Pattern {
                        pattern: "^[0-9a-f]{6}$",
                        message: "Must be hex color string",
                    }),
            )
            .with_attribute("description", Attribute::optional_string())
            .with_attribute("tags", Attribute::optional_string_set())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &TagConfig,
    ) -> Result<TagState, ProviderError> {
        let created = client.create_tag(&config.to_writable()).await?;
        info!("Created tag {} in NetBox (ID: {})", created.name, created.id);
        let mut state = self.read(client, &ResourceId::new(created.id)).await?;
        state.tags = config.tags.clone();
        Ok(state)
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<TagState, ProviderError> {
        Ok(client.get_tag(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &TagConfig,
    ) -> Result<TagState, ProviderError> {
        client.update_tag(id.get(), &config.to_writable()).await?;
        info!("Updated tag {} in NetBox (ID: {})", config.name, id);
        let mut state = self.read(client, id).await?;
        state.tags = config.tags.clone();
        Ok(state)
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_tag(id.get()).await?;
        info!("Deleted tag {} from NetBox", id);
        Ok(())
    }
}
