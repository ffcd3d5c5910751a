//! NetBox API models
//!
//! These models match the NetBox REST API serializers. Read models mirror the
//! full serializers returned by GET/POST/PATCH; `Writable*` models are the
//! request bodies for create and update, with related objects given by ID.

use serde::{Deserialize, Serialize};

pub use crate::common::PaginatedResponse;

/// A choice field as rendered by NetBox (`{"value": "active", "label": "Active"}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceValue {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl ChoiceValue {
    /// Build a choice with a label derived from the value
    pub fn new(value: &str) -> Self {
        let mut chars = value.chars();
        let label = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        Self {
            value: value.to_string(),
            label,
        }
    }
}

// Nested serializers (simplified versions for references)

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: String,
}

/// Tag reference used in write payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NestedTagRef {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTenant {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedTenantGroup {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedRir {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedRegion {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedAsn {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub asn: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedUser {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedSite {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedDeviceType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub model: String,
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NestedIPAddress {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub address: String,
}

// ====================
// IPAM
// ====================

/// Aggregate model matching NetBox AggregateSerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Aggregate {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub prefix: String,
    pub rir: Option<NestedRir>,
    pub tenant: Option<NestedTenant>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableAggregate {
    pub prefix: String,
    pub rir: Option<u64>,
    pub tenant: Option<u64>,
    pub description: String,
    pub tags: Vec<NestedTagRef>,
}

/// Regional Internet Registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Rir {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub description: String,
}

/// IPAM role (prefix / VLAN role)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Role {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    pub weight: Option<i64>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableRole {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    pub description: String,
}

/// VRF model matching NetBox VRFSerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Vrf {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub rd: Option<String>,
    pub tenant: Option<NestedTenant>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableVrf {
    pub name: String,
    pub tenant: Option<u64>,
    pub tags: Vec<NestedTagRef>,
    pub import_targets: Vec<u64>,
    pub export_targets: Vec<u64>,
}

/// IP range model (from IPAM API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct IpRange {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub start_address: String,
    pub end_address: String,
    #[serde(default)]
    pub size: u64,
    pub status: Option<ChoiceValue>,
}

// ====================
// DCIM
// ====================

/// Site model matching NetBox SiteSerializer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Site {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    pub status: ChoiceValue,
    pub region: Option<NestedRegion>,
    pub tenant: Option<NestedTenant>,
    #[serde(default)]
    pub facility: String,
    #[serde(default)]
    pub asns: Vec<NestedAsn>,
    pub time_zone: Option<String>,
    #[serde(default)]
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
    #[serde(default)]
    pub custom_fields: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableSite {
    pub name: String,
    pub slug: String,
    pub status: String,
    pub region: Option<u64>,
    pub tenant: Option<u64>,
    pub facility: String,
    pub asns: Vec<u64>,
    pub time_zone: Option<String>,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub tags: Vec<NestedTagRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Manufacturer (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Manufacturer {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Platform (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Platform {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Device model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Device {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: Option<String>,
    pub device_type: NestedDeviceType,
    pub site: Option<NestedSite>,
    pub status: ChoiceValue,
    pub primary_ip: Option<NestedIPAddress>,
    #[serde(default)]
    pub tags: Vec<NestedTag>,
}

// ====================
// Circuits / Virtualization
// ====================

/// Circuit type (from circuits API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CircuitType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Cluster group (from virtualization API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ClusterGroup {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Cluster type (from virtualization API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct ClusterType {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Write body shared by the organizational models that only carry a name,
/// a slug and optionally a description (circuit types, cluster groups and
/// types, manufacturers, platforms, RIRs).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableNamed {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ====================
// Tenancy
// ====================

/// Tenant group (from tenancy API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TenantGroup {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    pub parent: Option<NestedTenantGroup>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableTenantGroup {
    pub name: String,
    pub slug: String,
    pub parent: Option<u64>,
    pub description: String,
}

// ====================
// Extras
// ====================

/// Tag (from extras API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Tag {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableTag {
    pub name: String,
    pub slug: String,
    pub color: String,
    pub description: String,
}

/// Custom field definition (from extras API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct CustomField {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: ChoiceValue,
    #[serde(default)]
    pub content_types: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub weight: i64,
    pub validation_minimum: Option<i64>,
    pub validation_maximum: Option<i64>,
    #[serde(default)]
    pub validation_regex: String,
    #[serde(default)]
    pub choices: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableCustomField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub content_types: Vec<String>,
    pub label: String,
    pub description: String,
    pub required: bool,
    pub default: Option<serde_json::Value>,
    pub weight: i64,
    pub validation_minimum: Option<i64>,
    pub validation_maximum: Option<i64>,
    pub validation_regex: String,
    pub choices: Vec<String>,
}

// ====================
// Users
// ====================

/// API token (from users API)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Token {
    pub id: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub display: String,
    pub user: Option<NestedUser>,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub write_enabled: bool,
    #[serde(default)]
    pub description: String,
    pub created: Option<String>,
    pub expires: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WritableToken {
    pub user: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
