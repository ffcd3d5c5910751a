//! Unit tests for the netbox_aggregate resource

#[cfg(test)]
mod tests {
    use crate::resource::{DynamicResource, Erased, Resource};
    use crate::resources::{AggregateConfig, AggregateResource};
    use crate::test_utils::*;
    use netbox_client::Tag;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn config() -> AggregateConfig {
        AggregateConfig {
            prefix: "10.0.0.0/8".to_string(),
            description: Some("RFC1918".to_string()),
            tenant_id: Some(2),
            rir_id: Some(1),
            tags: ["private".to_string(), "Core Network".to_string()].into_iter().collect(),
        }
    }

    #[tokio::test]
    async fn test_create_read_round_trip() {
        let client = mock_client();
        let state = AggregateResource.create(&client, &config()).await.unwrap();

        assert_eq!(state.prefix, "10.0.0.0/8");
        assert_eq!(state.description.as_deref(), Some("RFC1918"));
        assert_eq!(state.tenant_id, Some(2));
        assert_eq!(state.rir_id, Some(1));
        assert_eq!(state.tags, config().tags);
    }

    #[tokio::test]
    async fn test_existing_tags_are_reused() {
        let client = mock_client();
        client.add_tag(Tag {
            id: 500,
            url: format!("{}/api/extras/tags/500/", TEST_NETBOX_URL),
            display: "private".to_string(),
            name: "private".to_string(),
            slug: "private".to_string(),
            color: "00ff00".to_string(),
            description: String::new(),
        });

        AggregateResource.create(&client, &config()).await.unwrap();
        // Only "Core Network" was created
        assert_eq!(client.tag_count(), 2);
    }

    #[tokio::test]
    async fn test_update_removes_rir_and_tags() {
        let client = mock_client();
        let state = AggregateResource.create(&client, &config()).await.unwrap();

        let bare = AggregateConfig {
            prefix: "10.0.0.0/8".to_string(),
            ..Default::default()
        };
        let updated = AggregateResource.update(&client, &state.id, &bare).await.unwrap();

        assert_eq!(updated.id, state.id);
        assert_eq!(updated.rir_id, None);
        assert_eq!(updated.tenant_id, None);
        assert_eq!(updated.description, None);
        assert!(updated.tags.is_empty());
    }

    #[tokio::test]
    async fn test_prefix_must_be_cidr() {
        let client = mock_client();
        let err = Erased(AggregateResource)
            .create(&client, json!({"prefix": "10.0.0.1"}))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::ProviderError::Validation { ref attribute, .. } if attribute == "prefix"));
    }
}
