//! Unit tests for attribute schema validation

use super::*;
use serde_json::json;

fn site_like_schema() -> Schema {
    Schema::resource()
        .with_attribute("name", Attribute::required_string())
        .with_attribute(
            "slug",
            Attribute::optional_computed_string().with_constraint(Constraint::StringLength { min: 0, max: 30 }),
        )
        .with_attribute(
            "status",
            Attribute::required_string().with_constraint(Constraint::OneOf {
                values: &["planned", "active"],
            }),
        )
        .with_attribute(
            "weight",
            Attribute::optional_int().with_constraint(Constraint::IntRange { min: 0, max: 32767 }),
        )
        .with_attribute("prefix", Attribute::optional_string().with_constraint(Constraint::Cidr))
        .with_attribute(
            "color_hex",
            Attribute::optional_string()
                .with_default("9e9e9e")
                .with_constraint(Constraint::Pattern {
                    pattern: "^[0-9a-f]{6}$",
                    message: "Must be hex color string",
                }),
        )
        .with_attribute("tags", Attribute::optional_string_set())
        .with_attribute("custom_fields", Attribute::optional_map())
        .with_attribute("tenant_id", Attribute::optional_id())
}

fn attribute_of(err: ProviderError) -> String {
    match err {
        ProviderError::Validation { attribute, .. } => attribute,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_defaults_applied_and_nulls_dropped() {
    let normalized = site_like_schema()
        .validate(json!({"name": "fra1", "status": "active", "slug": null}))
        .unwrap();
    assert_eq!(
        normalized,
        json!({"name": "fra1", "status": "active", "color_hex": "9e9e9e"})
    );
}

#[test]
fn test_missing_required_rejected() {
    let err = site_like_schema().validate(json!({"name": "fra1"})).unwrap_err();
    assert_eq!(attribute_of(err), "status");
}

#[test]
fn test_unknown_attribute_rejected() {
    let err = site_like_schema()
        .validate(json!({"name": "fra1", "status": "active", "colour": "red"}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "colour");
}

#[test]
fn test_computed_attribute_rejected() {
    let err = site_like_schema()
        .validate(json!({"id": "4", "name": "fra1", "status": "active"}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "id");
}

#[test]
fn test_wrong_type_rejected() {
    let err = site_like_schema()
        .validate(json!({"name": 12, "status": "active"}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "name");

    let err = site_like_schema()
        .validate(json!({"name": "fra1", "status": "active", "weight": 1.5}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "weight");
}

#[test]
fn test_string_length_message() {
    let err = site_like_schema()
        .validate(json!({"name": "fra1", "status": "active", "slug": "x".repeat(31)}))
        .unwrap_err();
    match err {
        ProviderError::Validation { message, .. } => {
            assert!(message.starts_with("expected length of slug to be in the range (0 - 30)"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_one_of_rejects_unknown_status() {
    let err = site_like_schema()
        .validate(json!({"name": "fra1", "status": "gone"}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "status");
}

#[test]
fn test_int_range() {
    let schema = site_like_schema();
    assert!(schema.validate(json!({"name": "a", "status": "active", "weight": 32767})).is_ok());
    let err = schema
        .validate(json!({"name": "a", "status": "active", "weight": 32768}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "weight");
}

#[test]
fn test_cidr_requires_prefix_length() {
    let schema = site_like_schema();
    assert!(schema.validate(json!({"name": "a", "status": "active", "prefix": "10.0.0.0/8"})).is_ok());
    assert!(schema.validate(json!({"name": "a", "status": "active", "prefix": "2001:db8::/32"})).is_ok());
    assert!(schema.validate(json!({"name": "a", "status": "active", "prefix": "10.0.0.1"})).is_err());
    assert!(schema.validate(json!({"name": "a", "status": "active", "prefix": "10.0.0.0/33"})).is_err());
}

#[test]
fn test_pattern() {
    let schema = site_like_schema();
    assert!(schema.validate(json!({"name": "a", "status": "active", "color_hex": "00ff00"})).is_ok());
    let err = schema
        .validate(json!({"name": "a", "status": "active", "color_hex": "00FF00"}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "color_hex");
}

#[test]
fn test_pattern_compiled_once() {
    let schema = site_like_schema();
    for color in ["00ff00", "0000ff"] {
        assert!(schema.validate(json!({"name": "a", "status": "active", "color_hex": color})).is_ok());
    }
    let first = compiled_pattern("^[0-9a-f]{6}$").unwrap();
    let cache = PATTERN_CACHE.lock().unwrap();
    assert_eq!(cache.get("^[0-9a-f]{6}$").map(Regex::as_str), Some(first.as_str()));
}

#[test]
fn test_invalid_pattern_reported_as_validation_error() {
    let schema = Schema::new().with_attribute(
        "code",
        Attribute::optional_string().with_constraint(Constraint::Pattern {
            pattern: "([",
            message: "never matches",
        }),
    );
    let err = schema.validate(json!({"code": "x"})).unwrap_err();
    assert_eq!(attribute_of(err), "code");
}

#[test]
fn test_string_set_deduplicated_and_sorted() {
    let normalized = site_like_schema()
        .validate(json!({"name": "a", "status": "active", "tags": ["b", "a", "b"]}))
        .unwrap();
    assert_eq!(normalized["tags"], json!(["a", "b"]));
}

#[test]
fn test_map_must_be_object() {
    let schema = site_like_schema();
    assert!(schema.validate(json!({"name": "a", "status": "active", "custom_fields": {"asset": "1"}})).is_ok());
    let err = schema
        .validate(json!({"name": "a", "status": "active", "custom_fields": ["asset"]}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "custom_fields");
}

#[test]
fn test_id_reference_must_be_positive() {
    let err = site_like_schema()
        .validate(json!({"name": "a", "status": "active", "tenant_id": 0}))
        .unwrap_err();
    assert_eq!(attribute_of(err), "tenant_id");
}

#[test]
fn test_non_object_rejected() {
    assert!(site_like_schema().validate(json!(["name"])).is_err());
}

#[test]
fn test_schema_serializes_for_export() {
    let exported = serde_json::to_value(site_like_schema()).unwrap();
    assert_eq!(exported["attributes"]["id"]["mode"], "computed");
    assert_eq!(exported["attributes"]["color_hex"]["default"], "9e9e9e");
    assert_eq!(exported["attributes"]["status"]["constraint"]["type"], "one_of");
}
