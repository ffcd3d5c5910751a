//! Extras operations for MockNetBoxClient
//!
//! Handles tags and custom fields

use super::{filter_value, lock, store, MockNetBoxClient};
use crate::error::NetBoxError;
use crate::models::*;

/// Tags matching the `name` and `slug` filters (all tags when absent)
pub fn query_tags(client: &MockNetBoxClient, filters: &[(&str, &str)]) -> Vec<Tag> {
    let name = filter_value(filters, "name");
    let slug = filter_value(filters, "slug");
    let mut tags: Vec<Tag> = lock(&client.tags)
        .values()
        .filter(|t| name.is_none_or(|n| t.name == n))
        .filter(|t| slug.is_none_or(|s| t.slug == s))
        .cloned()
        .collect();
    tags.sort_by_key(|t| t.id);
    tags
}

pub fn save_tag(client: &MockNetBoxClient, id: u64, body: &WritableTag) -> Result<Tag, NetBoxError> {
    let duplicate = lock(&client.tags)
        .values()
        .any(|t| t.id != id && (t.name == body.name || t.slug == body.slug));
    if duplicate {
        return Err(NetBoxError::InvalidRequest(format!(
            "name: tag with this name or slug already exists: {}",
            body.name
        )));
    }

    let tag = Tag {
        id,
        url: client.helpers().url("extras/tags", id),
        display: body.name.clone(),
        name: body.name.clone(),
        slug: body.slug.clone(),
        color: body.color.clone(),
        description: body.description.clone(),
    };
    Ok(store(&client.tags, id, tag))
}

pub fn save_custom_field(client: &MockNetBoxClient, id: u64, body: &WritableCustomField) -> Result<CustomField, NetBoxError> {
    let custom_field = CustomField {
        id,
        url: client.helpers().url("extras/custom-fields", id),
        display: body.name.clone(),
        name: body.name.clone(),
        field_type: ChoiceValue::new(&body.field_type),
        content_types: body.content_types.clone(),
        label: body.label.clone(),
        description: body.description.clone(),
        required: body.required,
        default: body.default.clone(),
        weight: body.weight,
        validation_minimum: body.validation_minimum,
        validation_maximum: body.validation_maximum,
        validation_regex: body.validation_regex.clone(),
        choices: body.choices.clone(),
    };
    Ok(store(&client.custom_fields, id, custom_field))
}
