//! `netbox_custom_field` resource

use crate::error::ProviderError;
use crate::helpers::non_empty;
use crate::resource::{Resource, ResourceId};
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::{CustomField, NetBoxClientTrait, WritableCustomField};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Custom field data types accepted by NetBox
pub const CUSTOM_FIELD_TYPES: &[&str] = &["text", "integer", "boolean", "date", "url", "select", "multiselect"];

const SELECTION_TYPES: &[&str] = &["select", "multiselect"];

const DEFAULT_WEIGHT: i64 = 100;

fn default_weight() -> i64 {
    DEFAULT_WEIGHT
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomFieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub content_types: BTreeSet<String>,
    #[serde(default = "default_weight")]
    pub weight: i64,
    #[serde(default)]
    pub choices: BTreeSet<String>,
    pub default: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub validation_maximum: Option<i64>,
    pub validation_minimum: Option<i64>,
    pub validation_regex: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomFieldState {
    pub id: ResourceId,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub content_types: BTreeSet<String>,
    pub weight: i64,
    pub choices: BTreeSet<String>,
    pub default: Option<String>,
    pub description: Option<String>,
    pub label: Option<String>,
    pub required: bool,
    pub validation_maximum: Option<i64>,
    pub validation_minimum: Option<i64>,
    pub validation_regex: Option<String>,
}

/// Render a stored default the way it is configured: strings verbatim,
/// anything else as its JSON text
fn default_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => non_empty(s),
        other => Some(other.to_string()),
    }
}

impl From<CustomField> for CustomFieldState {
    fn from(field: CustomField) -> Self {
        Self {
            id: ResourceId::new(field.id),
            name: field.name,
            field_type: field.field_type.value,
            content_types: field.content_types.into_iter().collect(),
            weight: field.weight,
            choices: field.choices.into_iter().collect(),
            default: field.default.and_then(default_to_string),
            description: non_empty(field.description),
            label: non_empty(field.label),
            required: field.required,
            validation_maximum: field.validation_maximum,
            validation_minimum: field.validation_minimum,
            validation_regex: non_empty(field.validation_regex),
        }
    }
}

impl CustomFieldConfig {
    fn check(&self) -> Result<(), ProviderError> {
        if !self.choices.is_empty() && !SELECTION_TYPES.iter().any(|t| *t == self.field_type) {
            return Err(ProviderError::validation(
                "choices",
                "choices may be set only for custom selection fields",
            ));
        }
        Ok(())
    }

    fn to_writable(&self) -> WritableCustomField {
        WritableCustomField {
            name: self.name.clone(),
            field_type: self.field_type.clone(),
            content_types: self.content_types.iter().cloned().collect(),
            label: self.label.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            required: self.required,
            default: self.default.clone().map(Value::String),
            weight: self.weight,
            validation_minimum: self.validation_minimum,
            validation_maximum: self.validation_maximum,
            validation_regex: self.validation_regex.clone().unwrap_or_default(),
            choices: self.choices.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomFieldResource;

#[async_trait::async_trait]
impl Resource for CustomFieldResource {
    const TYPE_NAME: &'static str = "netbox_custom_field";

    type Config = CustomFieldConfig;
    type State = CustomFieldState;

    fn schema(&self) -> Schema {
        Schema::resource()
            .with_attribute("name", Attribute::required_string())
            .with_attribute(
                "type",
                Attribute::required_string().with_constraint(Constraint::OneOf { values: CUSTOM_FIELD_TYPES }),
            )
            .with_attribute(
                "content_types",
                Attribute::required_string_set().with_description("Object types the field applies to, e.g. dcim.site"),
            )
            .with_attribute("weight", Attribute::required_int().with_default(DEFAULT_WEIGHT))
            .with_attribute("choices", Attribute::optional_string_set())
            .with_attribute("default", Attribute::optional_string())
            .with_attribute("description", Attribute::optional_string())
            .with_attribute("label", Attribute::optional_string())
            .with_attribute("required", Attribute::optional_bool())
            .with_attribute("validation_maximum", Attribute::optional_int())
            .with_attribute("validation_minimum", Attribute::optional_int())
            .with_attribute("validation_regex", Attribute::optional_string())
    }

    async fn create(
        &self,
        client: &dyn NetBoxClientTrait,
        config: &CustomFieldConfig,
    ) -> Result<CustomFieldState, ProviderError> {
        config.check()?;
        let body = config.to_writable();
        debug!("Creating {} custom field {} for {:?}", body.field_type, body.name, body.content_types);
        let created = client.create_custom_field(&body).await?;
        info!("Created custom field {} in NetBox (ID: {})", created.name, created.id);
        self.read(client, &ResourceId::new(created.id)).await
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
    ) -> Result<CustomFieldState, ProviderError> {
        Ok(client.get_custom_field(id.get()).await?.into())
    }

    async fn update(
        &self,
        client: &dyn NetBoxClientTrait,
        id: &ResourceId,
        config: &CustomFieldConfig,
    ) -> Result<CustomFieldState, ProviderError> {
        config.check()?;
        client.update_custom_field(id.get(), &config.to_writable()).await?;
        info!("Updated custom field {} in NetBox (ID: {})", config.name, id);
        self.read(client, id).await
    }

    async fn delete(
        &self,
        client: &dyn NetBoxClientTrait,
        id: ResourceId,
    ) -> Result<(), ProviderError> {
        client.delete_custom_field(id.get()).await?;
        info!("Deleted custom field {} from NetBox", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{DynamicResource, Erased};
    use crate::test_utils::mock_client;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn select_field() -> CustomFieldConfig {
        CustomFieldConfig {
            name: "support_tier".to_string(),
            field_type: "select".to_string(),
            content_types: ["dcim.site".to_string()].into_iter().collect(),
            weight: 50,
            choices: ["gold".to_string(), "silver".to_string()].into_iter().collect(),
            default: Some("silver".to_string()),
            description: Some("Contracted support tier".to_string()),
            label: Some("Support tier".to_string()),
            required: true,
            validation_maximum: None,
            validation_minimum: None,
            validation_regex: None,
        }
    }

    #[tokio::test]
    async fn test_select_field_round_trip() {
        let client = mock_client();
        let config = select_field();
        let state = CustomFieldResource.create(&client, &config).await.unwrap();

        assert_eq!(
            state,
            CustomFieldState {
                id: state.id.clone(),
                name: config.name.clone(),
                field_type: "select".to_string(),
                content_types: config.content_types.clone(),
                weight: 50,
                choices: config.choices.clone(),
                default: Some("silver".to_string()),
                description: Some("Contracted support tier".to_string()),
                label: Some("Support tier".to_string()),
                required: true,
                validation_maximum: None,
                validation_minimum: None,
                validation_regex: None,
            }
        );
    }

    #[tokio::test]
    async fn test_choices_rejected_for_text_field() {
        let client = mock_client();
        let mut config = select_field();
        config.field_type = "text".to_string();

        let err = CustomFieldResource.create(&client, &config).await.unwrap_err();
        match err {
            ProviderError::Validation { attribute, message } => {
                assert_eq!(attribute, "choices");
                assert_eq!(message, "choices may be set only for custom selection fields");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_weight_defaults_to_100() {
        let client = mock_client();
        let state = Erased(CustomFieldResource)
            .create(
                &client,
                json!({"name": "asset_tag", "type": "integer", "content_types": ["dcim.device"], "validation_minimum": 1}),
            )
            .await
            .unwrap();
        assert_eq!(state["weight"], 100);
        assert_eq!(state["type"], "integer");
        assert_eq!(state["validation_minimum"], 1);
        assert_eq!(state["required"], false);
    }

    #[tokio::test]
    async fn test_unknown_type_rejected() {
        let client = mock_client();
        let err = Erased(CustomFieldResource)
            .create(&client, json!({"name": "x", "type": "json", "content_types": ["dcim.site"]}))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Validation { ref attribute, .. } if attribute == "type"));
    }

    #[test]
    fn test_non_string_default_rendered_as_json() {
        assert_eq!(default_to_string(json!(5)), Some("5".to_string()));
        assert_eq!(default_to_string(json!("five")), Some("five".to_string()));
        assert_eq!(default_to_string(Value::Null), None);
    }
}
