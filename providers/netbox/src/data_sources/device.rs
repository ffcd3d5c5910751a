//! `netbox_device` data source

use super::LOOKUP_LIMIT;
use crate::error::ProviderError;
use crate::resource::DataSource;
use crate::schema::{Attribute, Schema};
use netbox_client::{Device, NetBoxClientTrait};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeviceQuery {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceState {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub device_type: String,
    pub site: Option<String>,
    pub primary_ip: Option<String>,
}

impl DeviceState {
    fn from_device(device: Device, queried_name: &str) -> Self {
        Self {
            id: device.id,
            name: device.name.unwrap_or_else(|| queried_name.to_string()),
            status: device.status.value,
            device_type: device.device_type.display,
            site: device.site.map(|s| s.name),
            primary_ip: device.primary_ip.map(|ip| ip.address),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceDataSource;

#[async_trait::async_trait]
impl DataSource for DeviceDataSource {
    const TYPE_NAME: &'static str = "netbox_device";

    type Query = DeviceQuery;
    type State = DeviceState;

    fn schema(&self) -> Schema {
        Schema::new()
            .with_attribute("name", Attribute::required_string())
            .with_attribute("id", Attribute::computed_int())
            .with_attribute("status", Attribute::computed_string())
            .with_attribute("device_type", Attribute::computed_string())
            .with_attribute("site", Attribute::computed_string())
            .with_attribute("primary_ip", Attribute::computed_string())
    }

    async fn read(
        &self,
        client: &dyn NetBoxClientTrait,
        query: &DeviceQuery,
    ) -> Result<DeviceState, ProviderError> {
        debug!("Looking up device {}", query.name);
        let response = client
            .list_devices(&[("name", query.name.as_str()), ("limit", LOOKUP_LIMIT)])
            .await?;

        if response.count == 0 {
            warn!("No device named {} in NetBox", query.name);
            return Err(ProviderError::NoResults {
                summary: "No results".to_string(),
                detail: "Specify a more narrow filter".to_string(),
            });
        }
        if response.count > 1 {
            warn!("{} devices named {} in NetBox", response.count, query.name);
            return Err(ProviderError::MultipleResults {
                summary: "More than one result".to_string(),
                detail: "Specify a more narrow filter".to_string(),
            });
        }

        let device = response.results.into_iter().next().ok_or_else(|| ProviderError::NoResults {
            summary: "No results".to_string(),
            detail: "Specify a more narrow filter".to_string(),
        })?;
        Ok(DeviceState::from_device(device, &query.name))
    }
}
