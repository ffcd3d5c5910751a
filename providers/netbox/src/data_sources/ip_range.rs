//! `netbox_ip_range` data source

use super::LOOKUP_LIMIT;
use crate::error::ProviderError;
use crate::resource::DataSource;
use crate::schema::{Attribute, Constraint, Schema};
use netbox_client::NetBoxClientTrait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IpRangeQuery {
    /// Network the range must contain, in CIDR notation
    pub contains: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpRangeState {
    pub id: u64,
    pub contains: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IpRangeDataSource;

#[async_trait::async_trait]
impl DataSource for IpRangeDataSource {
    const TYPE_NAME: &'static str = "netbox_ip_range";

    type Query = IpRangeQuery;
    type State = IpRangeState;

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("contains", Attribute::required_string().with_constraint(Constraint::Cidr))
            .with_attribute("id", Attribute::computed_int())
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        query: &IpRangeQuery,
    ) -> Result<IpRangeState, ProviderError> {
        debug!("Looking up IP range containing {}", query.contains);
        let response = client
            .list_ip_ranges(&[("contains", query.contains.as_str()), ("limit", LOOKUP_LIMIT)])
            .await?;

        if response.count > 1 {
            return Err(ProviderError::MultipleResults {
                summary: "More than one result. Specify a more narrow filter".to_string(),
                detail: String::new(),
            });
        }
        let range = response.results.into_iter().next().ok_or_else(|| ProviderError::NoResults {
            summary: "No result".to_string(),
            detail: String::new(),
        })?;

        Ok(IpRangeState {
            id: range.id,
            contains: query.contains.clone(),
        })
    }
}
