//! Custom field passthrough
//!
//! Custom field values are an opaque JSON object: copied from the
//! configuration into the write model, and from the response into state.

use serde_json::{Map, Value};

/// Custom fields as read back from NetBox; empty or non-object payloads are `None`
pub fn custom_fields_from_response(value: &Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) if !map.is_empty() => Some(map.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_passed_through() {
        let fields = custom_fields_from_response(&json!({"asset_tag": "A-1", "rack_units": 4}));
        let fields = fields.unwrap();
        assert_eq!(fields["asset_tag"], "A-1");
        assert_eq!(fields["rack_units"], 4);
    }

    #[test]
    fn test_empty_and_non_object_are_none() {
        assert_eq!(custom_fields_from_response(&json!({})), None);
        assert_eq!(custom_fields_from_response(&Value::Null), None);
        assert_eq!(custom_fields_from_response(&json!("asset_tag")), None);
    }
}
