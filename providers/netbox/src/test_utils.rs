//! Test utilities and fixtures for provider unit tests

use netbox_client::{
    ChoiceValue, Device, IpRange, MockNetBoxClient, NestedDeviceType, NestedIPAddress, NestedSite,
};

pub const TEST_NETBOX_URL: &str = "http://test-netbox";

/// Create an empty mock NetBox
pub fn mock_client() -> MockNetBoxClient {
    MockNetBoxClient::new(TEST_NETBOX_URL)
}

/// Create a test device with a site and primary IP
pub fn create_test_device(id: u64, name: &str) -> Device {
    Device {
        id,
        url: format!("{}/api/dcim/devices/{}/", TEST_NETBOX_URL, id),
        display: name.to_string(),
        name: Some(name.to_string()),
        device_type: NestedDeviceType {
            id: 3,
            url: format!("{}/api/dcim/device-types/3/", TEST_NETBOX_URL),
            display: "Juniper MX204".to_string(),
            model: "MX204".to_string(),
            slug: "mx204".to_string(),
        },
        site: Some(NestedSite {
            id: 7,
            url: format!("{}/api/dcim/sites/7/", TEST_NETBOX_URL),
            display: "Frankfurt 1".to_string(),
            name: "Frankfurt 1".to_string(),
            slug: "fra1".to_string(),
        }),
        status: ChoiceValue::new("active"),
        primary_ip: Some(NestedIPAddress {
            id: 11,
            url: format!("{}/api/ipam/ip-addresses/11/", TEST_NETBOX_URL),
            display: "192.0.2.10/24".to_string(),
            address: "192.0.2.10/24".to_string(),
        }),
        tags: vec![],
    }
}

/// Create a test IP range
pub fn create_test_ip_range(id: u64, start: &str, end: &str) -> IpRange {
    IpRange {
        id,
        url: format!("{}/api/ipam/ip-ranges/{}/", TEST_NETBOX_URL, id),
        display: format!("{}-{}", start, end),
        start_address: start.to_string(),
        end_address: end.to_string(),
        size: 0,
        status: Some(ChoiceValue::new("active")),
    }
}
