//! Tag flattening and resolution
//!
//! Resources carry tags as a set of names. NetBox returns nested tag objects
//! and accepts tag references on write; names that do not exist yet are
//! created on the fly.

use crate::error::ProviderError;
use netbox_client::{NestedTag, NestedTagRef, NetBoxClientTrait, WritableTag};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Color given to tags created during resolution
pub const DEFAULT_TAG_COLOR: &str = "9e9e9e";

/// Flatten nested tags into their names, keeping NetBox's order
pub fn tag_names(tags: &[NestedTag]) -> Vec<String> {
    tags.iter().map(|t| t.name.clone()).collect()
}

/// Slug used when nothing of the name survives slugification
const FALLBACK_TAG_SLUG: &str = "tag";

/// Candidates tried before giving up on finding a free slug
const MAX_SLUG_ATTEMPTS: usize = 32;

/// Slug for a tag created from a bare name; never empty
pub fn slugify(name: &str) -> String {
    let slug: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            c if c.is_whitespace() => Some('-'),
            'a'..='z' | '0'..='9' | '-' | '_' => Some(c),
            _ => None,
        })
        .collect();
    if slug.trim_matches(|c| c == '-' || c == '_').is_empty() {
        FALLBACK_TAG_SLUG.to_string()
    } else {
        slug
    }
}

/// First slug derived from `name` that no existing tag uses: the plain
/// slug, then `-2`, `-3` and so on
async fn free_tag_slug(
    client: &dyn NetBoxClientTrait,
    name: &str,
) -> Result<String, ProviderError> {
    let base = slugify(name);
    for attempt in 1..=MAX_SLUG_ATTEMPTS {
        let candidate = if attempt == 1 { base.clone() } else { format!("{}-{}", base, attempt) };
        if client.query_tags(&[("slug", candidate.as_str())]).await?.is_empty() {
            return Ok(candidate);
        }
        debug!("Tag slug {} is taken", candidate);
    }
    Err(ProviderError::validation(
        "tags",
        format!("no free slug for tag {:?} after {} attempts", name, MAX_SLUG_ATTEMPTS),
    ))
}

/// Resolve tag names into references, creating tags that do not exist.
///
/// Each name is looked up with a `name` filter. Missing tags get a slug
/// derived from the name that does not clash with an existing tag. Any
/// lookup or create error is returned as is.
pub async fn resolve_tags(
    client: &dyn NetBoxClientTrait,
    names: &BTreeSet<String>,
) -> Result<Vec<NestedTagRef>, ProviderError> {
    let mut refs = Vec::with_capacity(names.len());

    for name in names {
        let existing = client.query_tags(&[("name", name.as_str())]).await?;
        let tag = match existing.into_iter().next() {
            Some(tag) => {
                debug!("Resolved tag {} to ID {}", name, tag.id);
                tag
            }
            None => {
                let body = WritableTag {
                    name: name.clone(),
                    slug: free_tag_slug(client, name).await?,
                    color: DEFAULT_TAG_COLOR.to_string(),
                    description: String::new(),
                };
                let created = client.create_tag(&body).await?;
                info!("Created tag {} in NetBox (ID: {}, slug: {})", created.name, created.id, created.slug);
                created
            }
        };
        refs.push(NestedTagRef {
            name: tag.name,
            slug: tag.slug,
        });
    }

    Ok(refs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netbox_client::{MockNetBoxClient, Tag};

    fn nested(name: &str) -> NestedTag {
        NestedTag {
            id: 1,
            url: String::new(),
            display: name.to_string(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            color: String::new(),
        }
    }

    #[test]
    fn test_tag_names_keeps_order() {
        let flat = tag_names(&[nested("Foo"), nested("Bar")]);
        assert_eq!(flat, vec!["Foo".to_string(), "Bar".to_string()]);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Edge Routers"), "edge-routers");
        assert_eq!(slugify("dc:fra1/core"), "dcfra1core");
        assert_eq!(slugify("already-a_slug"), "already-a_slug");
    }

    #[test]
    fn test_slugify_never_empty() {
        assert_eq!(slugify("生产"), "tag");
        assert_eq!(slugify("!!!"), "tag");
        assert_eq!(slugify(" - "), "tag");
    }

    #[tokio::test]
    async fn test_resolve_existing_and_missing_tags() {
        let client = MockNetBoxClient::new("http://netbox.test");
        client.add_tag(Tag {
            id: 100,
            url: "http://netbox.test/api/extras/tags/100/".to_string(),
            display: "production".to_string(),
            name: "production".to_string(),
            slug: "prod".to_string(),
            color: "ff0000".to_string(),
            description: String::new(),
        });

        let names: BTreeSet<String> = ["production", "New Tag"].iter().map(|s| s.to_string()).collect();
        let refs = resolve_tags(&client, &names).await.unwrap();

        assert_eq!(
            refs,
            vec![
                NestedTagRef { name: "New Tag".to_string(), slug: "new-tag".to_string() },
                NestedTagRef { name: "production".to_string(), slug: "prod".to_string() },
            ]
        );
        assert_eq!(client.tag_count(), 2);

        let created = client.query_tags(&[("name", "New Tag")]).await.unwrap();
        assert_eq!(created[0].color, DEFAULT_TAG_COLOR);
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let client = MockNetBoxClient::new("http://netbox.test");
        let names: BTreeSet<String> = ["edge".to_string()].into_iter().collect();

        resolve_tags(&client, &names).await.unwrap();
        resolve_tags(&client, &names).await.unwrap();

        assert_eq!(client.tag_count(), 1);
    }

    #[tokio::test]
    async fn test_names_with_same_slug_get_distinct_slugs() {
        let client = MockNetBoxClient::new("http://netbox.test");
        let names: BTreeSet<String> = ["a.b", "ab"].iter().map(|s| s.to_string()).collect();

        let refs = resolve_tags(&client, &names).await.unwrap();

        assert_eq!(
            refs,
            vec![
                NestedTagRef { name: "a.b".to_string(), slug: "ab".to_string() },
                NestedTagRef { name: "ab".to_string(), slug: "ab-2".to_string() },
            ]
        );
        assert_eq!(client.tag_count(), 2);
    }

    #[tokio::test]
    async fn test_names_without_ascii_get_fallback_slugs() {
        let client = MockNetBoxClient::new("http://netbox.test");
        let names: BTreeSet<String> = ["生产", "!!!"].iter().map(|s| s.to_string()).collect();

        let refs = resolve_tags(&client, &names).await.unwrap();
        let slugs: Vec<&str> = refs.iter().map(|r| r.slug.as_str()).collect();

        // "!!!" sorts before "生产"
        assert_eq!(slugs, vec!["tag", "tag-2"]);
    }
}
