//! Provider error types.
//!
//! Every failure surfaces to the user as a [`Diagnostic`]. Validation errors are
//! raised before any network call; NetBox errors are passed through unchanged.

use netbox_client::NetBoxError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur in the NetBox provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// NetBox API or transport error
    #[error("NetBox error: {0}")]
    NetBox(#[from] NetBoxError),

    /// An attribute failed schema or resource-level validation
    #[error("Invalid value for {attribute}: {message}")]
    Validation { attribute: String, message: String },

    /// Provider configuration is missing or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Resource identity is not a decimal NetBox object ID
    #[error("Invalid resource ID {0:?}: expected a decimal NetBox object ID")]
    InvalidId(String),

    /// No resource is registered under the type name
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// No data source is registered under the type name
    #[error("Unknown data source: {0}")]
    UnknownDataSource(String),

    /// A data source lookup matched nothing
    #[error("{summary}")]
    NoResults { summary: String, detail: String },

    /// A data source lookup matched more than one object
    #[error("{summary}")]
    MultipleResults { summary: String, detail: String },

    /// Attribute map could not be converted to or from typed values
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ProviderError {
    /// Build a validation error for an attribute
    pub fn validation(attribute: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError::Validation {
            attribute: attribute.into(),
            message: message.into(),
        }
    }

    /// Whether the remote object does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NetBox(e) if e.is_not_found())
    }
}

/// User-visible failure, the provider's equivalent of a Terraform diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub summary: String,
    pub detail: String,
}

impl From<&ProviderError> for Diagnostic {
    fn from(err: &ProviderError) -> Self {
        match err {
            ProviderError::NoResults { summary, detail }
            | ProviderError::MultipleResults { summary, detail } => Diagnostic {
                summary: summary.clone(),
                detail: detail.clone(),
            },
            ProviderError::Validation { attribute, message } => Diagnostic {
                summary: format!("Invalid attribute value: {}", attribute),
                detail: message.clone(),
            },
            ProviderError::NetBox(e) => Diagnostic {
                summary: "NetBox API request failed".to_string(),
                detail: e.to_string(),
            },
            other => Diagnostic {
                summary: other.to_string(),
                detail: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_diagnostic_keeps_summary_and_detail() {
        let err = ProviderError::MultipleResults {
            summary: "More than one result".to_string(),
            detail: "Specify a more narrow filter".to_string(),
        };
        let diag = Diagnostic::from(&err);
        assert_eq!(diag.summary, "More than one result");
        assert_eq!(diag.detail, "Specify a more narrow filter");
    }

    #[test]
    fn test_not_found_passthrough() {
        let err = ProviderError::from(NetBoxError::NotFound("Site 4 not found".to_string()));
        assert!(err.is_not_found());
        assert!(!ProviderError::InvalidId("x".to_string()).is_not_found());
    }
}
