//! Users operations for MockNetBoxClient
//!
//! Handles API tokens

use super::{store, MockNetBoxClient};
use crate::error::NetBoxError;
use crate::models::*;

/// Store a token. A key is generated on create when none is given and kept
/// across updates that omit it.
pub fn save_token(
    client: &MockNetBoxClient,
    id: u64,
    body: &WritableToken,
    existing: Option<Token>,
) -> Result<Token, NetBoxError> {
    let key = match (&body.key, &existing) {
        (Some(key), _) => key.clone(),
        (None, Some(token)) => token.key.clone(),
        (None, None) => format!("{:040x}", id),
    };
    if key.len() < 40 || key.len() > 256 {
        return Err(NetBoxError::InvalidRequest(
            "key: Ensure this field has between 40 and 256 characters.".to_string(),
        ));
    }

    let token = Token {
        id,
        url: client.helpers().url("users/tokens", id),
        display: key.chars().skip(key.chars().count().saturating_sub(4)).collect(),
        user: Some(client.helpers().nested_user(body.user)),
        key,
        write_enabled: existing.as_ref().is_none_or(|t| t.write_enabled),
        description: existing.as_ref().map(|t| t.description.clone()).unwrap_or_default(),
        created: existing
            .and_then(|t| t.created)
            .or_else(|| Some(chrono::Utc::now().to_rfc3339())),
        expires: None,
    };
    Ok(store(&client.tokens, id, token))
}
