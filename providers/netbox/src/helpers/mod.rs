//! Helpers shared by the resource adapters
//!
//! - `tags`: flattening nested tags into names and resolving names into tag references
//! - `custom_fields`: passing the opaque custom field object through

pub mod custom_fields;
pub mod tags;

pub use custom_fields::custom_fields_from_response;
pub use tags::{resolve_tags, tag_names, DEFAULT_TAG_COLOR};

/// Slug to send for a resource: the configured slug, or the name when unset or empty
pub fn slug_or_name(slug: Option<&str>, name: &str) -> String {
    match slug {
        Some(slug) if !slug.is_empty() => slug.to_string(),
        _ => name.to_string(),
    }
}

/// NetBox renders unset strings as `""`; state carries them as `None`
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_defaults_to_name() {
        assert_eq!(slug_or_name(None, "Core Switches"), "Core Switches");
        assert_eq!(slug_or_name(Some(""), "core"), "core");
        assert_eq!(slug_or_name(Some("core-sw"), "Core Switches"), "core-sw");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("x".to_string()), Some("x".to_string()));
    }
}
