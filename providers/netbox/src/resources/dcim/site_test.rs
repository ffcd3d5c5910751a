//! Unit tests for the netbox_site resource

#[cfg(test)]
mod tests {
    use crate::resource::{DynamicResource, Erased, Resource};
    use crate::resources::{SiteConfig, SiteResource, SiteState};
    use crate::test_utils::*;
    use netbox_client::NetBoxClientTrait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn full_config() -> SiteConfig {
        let mut custom_fields = serde_json::Map::new();
        custom_fields.insert("asset_owner".to_string(), json!("neteng"));

        SiteConfig {
            name: "Frankfurt 1".to_string(),
            slug: Some("fra1".to_string()),
            status: "active".to_string(),
            description: Some("Primary EU site".to_string()),
            facility: Some("Equinix FR5".to_string()),
            longitude: Some(8.6821),
            latitude: Some(50.1109),
            region_id: Some(3),
            tenant_id: Some(5),
            tags: ["edge", "eu"].iter().map(|s| s.to_string()).collect(),
            timezone: Some("Europe/Berlin".to_string()),
            asn: Some(9),
            custom_fields: Some(custom_fields),
        }
    }

    #[tokio::test]
    async fn test_create_read_round_trip() {
        let client = mock_client();
        let config = full_config();

        let state = SiteResource.create(&client, &config).await.unwrap();

        assert_eq!(
            state,
            SiteState {
                id: state.id.clone(),
                name: "Frankfurt 1".to_string(),
                slug: "fra1".to_string(),
                status: "active".to_string(),
                description: Some("Primary EU site".to_string()),
                facility: Some("Equinix FR5".to_string()),
                longitude: Some(8.6821),
                latitude: Some(50.1109),
                region_id: Some(3),
                tenant_id: Some(5),
                tags: config.tags.clone(),
                timezone: Some("Europe/Berlin".to_string()),
                asn: Some(9),
                custom_fields: config.custom_fields.clone(),
            }
        );

        let reread = SiteResource.read(&client, &state.id).await.unwrap();
        assert_eq!(reread, state);
    }

    #[tokio::test]
    async fn test_asn_written_as_single_element_list() {
        let client = mock_client();
        let state = SiteResource.create(&client, &full_config()).await.unwrap();

        let site = client.get_site(state.id.get()).await.unwrap();
        assert_eq!(site.asns.len(), 1);
        assert_eq!(site.asns[0].id, 9);
    }

    #[tokio::test]
    async fn test_minimal_site_reads_absent_fields_as_none() {
        let client = mock_client();
        let config = SiteConfig {
            name: "lab".to_string(),
            status: "planned".to_string(),
            ..Default::default()
        };

        let state = SiteResource.create(&client, &config).await.unwrap();
        assert_eq!(state.slug, "lab");
        assert_eq!(state.region_id, None);
        assert_eq!(state.tenant_id, None);
        assert_eq!(state.asn, None);
        assert_eq!(state.description, None);
        assert_eq!(state.custom_fields, None);
        assert!(state.tags.is_empty());
    }

    #[tokio::test]
    async fn test_update_clears_omitted_fields_and_is_idempotent() {
        let client = mock_client();
        let state = SiteResource.create(&client, &full_config()).await.unwrap();

        let trimmed = SiteConfig {
            name: "Frankfurt 1".to_string(),
            status: "retired".to_string(),
            ..Default::default()
        };
        let first = SiteResource.update(&client, &state.id, &trimmed).await.unwrap();
        let second = SiteResource.update(&client, &state.id, &trimmed).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.status, "retired");
        assert_eq!(first.slug, "Frankfurt 1");
        assert_eq!(first.tenant_id, None);
        assert_eq!(first.facility, None);
        assert_eq!(first.tags, BTreeSet::new());
    }

    #[tokio::test]
    async fn test_delete_then_read_fails() {
        let client = mock_client();
        let state = SiteResource.create(&client, &full_config()).await.unwrap();
        let id = state.id.clone();

        SiteResource.delete(&client, state.id).await.unwrap();

        let err = SiteResource.read(&client, &id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_dynamic_create_validates_before_any_call() {
        let client = mock_client();
        let site = Erased(SiteResource);

        let err = site
            .create(&client, json!({"name": "x", "status": "closed"}))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::ProviderError::Validation { .. }));

        let err = site
            .create(&client, json!({"name": "x", "status": "active", "description": "d".repeat(201)}))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::ProviderError::Validation { .. }));

        // Nothing reached NetBox
        assert!(client.get_site(1).await.is_err());
        assert_eq!(client.tag_count(), 0);
    }

    #[tokio::test]
    async fn test_dynamic_create_renders_state_json() {
        let client = mock_client();
        let state = Erased(SiteResource)
            .create(&client, json!({"name": "ams1", "status": "staging", "tags": ["b", "a"]}))
            .await
            .unwrap();

        assert_eq!(state["id"], json!("3"));
        assert_eq!(state["slug"], json!("ams1"));
        assert_eq!(state["tags"], json!(["a", "b"]));
        assert_eq!(state["tenant_id"], serde_json::Value::Null);
    }
}
