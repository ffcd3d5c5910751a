//! Query utilities for NetBox API
//!
//! Provides helpers for building collection and object paths and list queries.

use crate::common::{HttpClient, PaginatedResponse};
use crate::error::NetBoxError;
use serde::de::DeserializeOwned;

/// Path of a NetBox collection endpoint, e.g. `ipam/aggregates` -> `/api/ipam/aggregates/`
pub fn collection_path(endpoint: &str) -> String {
    format!("/api/{}/", endpoint)
}

/// Path of a single NetBox object
pub fn object_path(endpoint: &str, id: u64) -> String {
    format!("/api/{}/{}/", endpoint, id)
}

/// Fetch a single page of a collection, keeping the total `count`
pub async fn query_page<T: DeserializeOwned>(
    http: &HttpClient,
    endpoint: &str,
    filters: &[(&str, &str)],
) -> Result<PaginatedResponse<T>, NetBoxError> {
    let mut url = collection_path(endpoint);

    if !filters.is_empty() {
        let query_string = http.build_query_string(filters);
        url = format!("{}?{}", url, query_string);
    }

    http.get(&url).await
}
