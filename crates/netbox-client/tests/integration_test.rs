//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.

use netbox_client::{NetBoxClient, WritableNamed, WritableTag};

fn live_client() -> NetBoxClient {
    let url = std::env::var("NETBOX_URL")
        .unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token = std::env::var("NETBOX_TOKEN")
        .expect("NETBOX_TOKEN environment variable must be set");

    NetBoxClient::new(url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_validate_token() {
    let client = live_client();
    client.validate_token().await.expect("Token should be accepted");
}

#[tokio::test]
#[ignore]
async fn test_manufacturer_lifecycle() {
    use netbox_client::NetBoxClientTrait;

    let client = live_client();
    let body = WritableNamed {
        name: "Integration Test Vendor".to_string(),
        slug: "integration-test-vendor".to_string(),
        description: Some("created by netbox-client tests".to_string()),
    };

    let created = client.create_manufacturer(&body).await
        .expect("Failed to create manufacturer");
    println!("Created manufacturer: {} (ID: {})", created.name, created.id);

    let renamed = WritableNamed {
        name: "Integration Test Vendor 2".to_string(),
        ..body
    };
    let updated = client.update_manufacturer(created.id, &renamed).await
        .expect("Failed to update manufacturer");
    assert_eq!(updated.name, "Integration Test Vendor 2");

    client.delete_manufacturer(created.id).await
        .expect("Failed to delete manufacturer");
    let gone = client.get_manufacturer(created.id).await;
    assert!(gone.map_err(|e| e.is_not_found()).unwrap_err());
}

#[tokio::test]
#[ignore]
async fn test_tag_lookup_by_name() {
    use netbox_client::NetBoxClientTrait;

    let client = live_client();
    let tag = client.create_tag(&WritableTag {
        name: "integration-lookup".to_string(),
        slug: "integration-lookup".to_string(),
        color: "9e9e9e".to_string(),
        description: String::new(),
    }).await.expect("Failed to create tag");

    let found = client.query_tags(&[("name", "integration-lookup")]).await
        .expect("Failed to query tags");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, tag.id);

    client.delete_tag(tag.id).await.expect("Failed to delete tag");
}

#[tokio::test]
#[ignore]
async fn test_list_devices() {
    use netbox_client::NetBoxClientTrait;

    let client = live_client();
    let page = client.list_devices(&[("limit", "2")]).await
        .expect("Failed to list devices");

    println!("Found {} devices", page.count);
    assert!(page.results.len() <= 2);
}
