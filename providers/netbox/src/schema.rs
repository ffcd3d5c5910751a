//! Attribute schemas
//!
//! Each resource and data source publishes a [`Schema`]. Incoming attribute
//! maps are validated against it once, at the boundary, before they are
//! deserialized into typed configuration structs.

use crate::error::ProviderError;
use ipnetwork::IpNetwork;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{LazyLock, Mutex, PoisonError};

/// Compiled `Pattern` constraints, keyed by pattern text
static PATTERN_CACHE: LazyLock<Mutex<HashMap<&'static str, Regex>>> = LazyLock::new(Default::default);

/// Compile a pattern once and reuse it for every later validation
fn compiled_pattern(pattern: &'static str) -> Result<Regex, regex::Error> {
    let mut cache = PATTERN_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(re) = cache.get(pattern) {
        return Ok(re.clone());
    }
    let re = Regex::new(pattern)?;
    cache.insert(pattern, re.clone());
    Ok(re)
}

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    String,
    Int,
    Float,
    Bool,
    StringSet,
    Map,
}

/// Whether an attribute is configured, computed, or both
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeMode {
    Required,
    Optional,
    Computed,
    OptionalComputed,
}

/// Value constraint checked during validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// String length in `[min, max]` characters
    StringLength { min: usize, max: usize },
    /// Integer in `[min, max]`
    IntRange { min: i64, max: i64 },
    /// Integer of at least `min`
    IntAtLeast { min: i64 },
    /// Network in CIDR notation
    Cidr,
    /// String matching a regular expression
    Pattern { pattern: &'static str, message: &'static str },
    /// String from a fixed list
    OneOf { values: &'static [&'static str] },
}

impl Constraint {
    fn check_str(&self, name: &str, value: &str) -> Result<(), ProviderError> {
        match self {
            Constraint::StringLength { min, max } => {
                let len = value.chars().count();
                if len < *min || len > *max {
                    return Err(ProviderError::validation(
                        name,
                        format!(
                            "expected length of {} to be in the range ({} - {}), got {}",
                            name, min, max, value
                        ),
                    ));
                }
            }
            Constraint::Cidr => {
                // IpNetwork accepts bare addresses as host networks
                let parsed = if value.contains('/') {
                    value.parse::<IpNetwork>().map_err(|e| e.to_string())
                } else {
                    Err("missing prefix length".to_string())
                };
                if let Err(e) = parsed {
                    return Err(ProviderError::validation(
                        name,
                        format!("expected {} to contain a valid CIDR, got: {} with err: {}", name, value, e),
                    ));
                }
            }
            Constraint::Pattern { pattern, message } => {
                let re = compiled_pattern(pattern)
                    .map_err(|e| ProviderError::validation(name, format!("invalid pattern {}: {}", pattern, e)))?;
                if !re.is_match(value) {
                    return Err(ProviderError::validation(name, format!("invalid value for {} ({})", name, message)));
                }
            }
            Constraint::OneOf { values } => {
                if !values.iter().any(|v| *v == value) {
                    return Err(ProviderError::validation(
                        name,
                        format!("expected {} to be one of {:?}, got {}", name, values, value),
                    ));
                }
            }
            Constraint::IntRange { .. } | Constraint::IntAtLeast { .. } => {}
        }
        Ok(())
    }

    fn check_int(&self, name: &str, value: i64) -> Result<(), ProviderError> {
        match self {
            Constraint::IntRange { min, max } if value < *min || value > *max => Err(ProviderError::validation(
                name,
                format!("expected {} to be in the range ({} - {}), got {}", name, min, max, value),
            )),
            Constraint::IntAtLeast { min } if value < *min => Err(ProviderError::validation(
                name,
                format!("expected {} to be at least ({}), got {}", name, min, value),
            )),
            _ => Ok(()),
        }
    }
}

fn is_blank(s: &&str) -> bool {
    s.is_empty()
}

/// A single attribute definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub kind: AttributeKind,
    pub mode: AttributeMode,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub sensitive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
    #[serde(skip_serializing_if = "is_blank")]
    pub description: &'static str,
}

impl Attribute {
    pub fn new(kind: AttributeKind, mode: AttributeMode) -> Self {
        Self {
            kind,
            mode,
            sensitive: false,
            default: None,
            constraint: None,
            description: "",
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::Required)
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::Optional)
    }

    pub fn computed_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::Computed)
    }

    /// Optional string that NetBox fills in when unset (slugs)
    pub fn optional_computed_string() -> Self {
        Self::new(AttributeKind::String, AttributeMode::OptionalComputed)
    }

    pub fn required_int() -> Self {
        Self::new(AttributeKind::Int, AttributeMode::Required)
    }

    pub fn optional_int() -> Self {
        Self::new(AttributeKind::Int, AttributeMode::Optional)
    }

    pub fn computed_int() -> Self {
        Self::new(AttributeKind::Int, AttributeMode::Computed)
    }

    /// Reference to another NetBox object by ID
    pub fn optional_id() -> Self {
        Self::optional_int().with_constraint(Constraint::IntAtLeast { min: 1 })
    }

    pub fn optional_float() -> Self {
        Self::new(AttributeKind::Float, AttributeMode::Optional)
    }

    pub fn optional_bool() -> Self {
        Self::new(AttributeKind::Bool, AttributeMode::Optional)
    }

    pub fn required_string_set() -> Self {
        Self::new(AttributeKind::StringSet, AttributeMode::Required)
    }

    pub fn optional_string_set() -> Self {
        Self::new(AttributeKind::StringSet, AttributeMode::Optional)
    }

    pub fn optional_map() -> Self {
        Self::new(AttributeKind::Map, AttributeMode::Optional)
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Check a non-null value and return its normalized form
    fn check(&self, name: &str, value: Value) -> Result<Value, ProviderError> {
        let type_error = |expected: &str, got: &Value| {
            ProviderError::validation(name, format!("expected {} to be {}, got {}", name, expected, got))
        };

        match self.kind {
            AttributeKind::String => {
                let s = value.as_str().ok_or_else(|| type_error("a string", &value))?;
                if let Some(constraint) = &self.constraint {
                    constraint.check_str(name, s)?;
                }
            }
            AttributeKind::Int => {
                let i = value.as_i64().ok_or_else(|| type_error("an integer", &value))?;
                if let Some(constraint) = &self.constraint {
                    constraint.check_int(name, i)?;
                }
            }
            AttributeKind::Float => {
                if !value.is_number() {
                    return Err(type_error("a number", &value));
                }
            }
            AttributeKind::Bool => {
                if !value.is_boolean() {
                    return Err(type_error("a boolean", &value));
                }
            }
            AttributeKind::StringSet => {
                let items = value.as_array().ok_or_else(|| type_error("a set of strings", &value))?;
                let mut set = BTreeSet::new();
                for item in items {
                    let s = item.as_str().ok_or_else(|| type_error("a set of strings", &value))?;
                    if let Some(constraint) = &self.constraint {
                        constraint.check_str(name, s)?;
                    }
                    set.insert(s.to_string());
                }
                return Ok(Value::Array(set.into_iter().map(Value::String).collect()));
            }
            AttributeKind::Map => {
                if !value.is_object() {
                    return Err(type_error("a map", &value));
                }
            }
        }
        Ok(value)
    }
}

/// Schema of a resource or data source
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub attributes: BTreeMap<&'static str, Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    /// Schema of a resource: the given attributes plus the computed `id`
    pub fn resource() -> Self {
        Self::new().with_attribute("id", Attribute::computed_string())
    }

    /// Validate an attribute map and return it normalized.
    ///
    /// Null values count as absent. Unknown attributes, computed-only
    /// attributes, missing required attributes, type mismatches and
    /// constraint violations are rejected. Defaults are filled in and sets
    /// are deduplicated.
    pub fn validate(&self, attrs: Value) -> Result<Value, ProviderError> {
        let input = match attrs {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(ProviderError::validation(
                    "attributes",
                    format!("expected an object of attributes, got {}", other),
                ));
            }
        };

        let mut normalized = Map::new();
        for (name, value) in input {
            let attribute = self
                .attributes
                .get(name.as_str())
                .ok_or_else(|| ProviderError::validation(&name, "unsupported argument"))?;
            if value.is_null() {
                continue;
            }
            if attribute.mode == AttributeMode::Computed {
                return Err(ProviderError::validation(&name, "value is computed and cannot be configured"));
            }
            let value = attribute.check(&name, value)?;
            normalized.insert(name, value);
        }

        for (name, attribute) in &self.attributes {
            if normalized.contains_key(*name) {
                continue;
            }
            if let Some(default) = &attribute.default {
                normalized.insert((*name).to_string(), default.clone());
            } else if attribute.mode == AttributeMode::Required {
                return Err(ProviderError::validation(
                    *name,
                    format!("the argument \"{}\" is required, but no definition was found", name),
                ));
            }
        }

        Ok(Value::Object(normalized))
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;
