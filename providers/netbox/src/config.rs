//! Provider connection settings
//!
//! Settings come from command-line flags or the environment. They are
//! validated before a client is built, so a missing token or malformed URL
//! fails without touching the network.

use crate::error::ProviderError;
use clap::Args;
use netbox_client::{ClientOptions, NetBoxClient};
use reqwest::Url;
use std::fmt;
use std::time::Duration;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection flags, each overridable through the environment
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// NetBox base URL, e.g. https://netbox.example.com
    #[arg(long, env = "NETBOX_SERVER_URL")]
    pub server_url: Option<String>,

    /// NetBox API token
    #[arg(long, env = "NETBOX_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, env = "NETBOX_ALLOW_INSECURE_HTTPS")]
    pub allow_insecure_https: bool,

    /// Per-request timeout in seconds
    #[arg(long, env = "NETBOX_REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,
}

/// Validated provider configuration
#[derive(Clone)]
pub struct ProviderConfig {
    pub server_url: String,
    pub api_token: String,
    pub allow_insecure_https: bool,
    pub request_timeout: Duration,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("server_url", &self.server_url)
            .field("api_token", &"<redacted>")
            .field("allow_insecure_https", &self.allow_insecure_https)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ProviderConfig {
    pub fn new(server_url: impl Into<String>, api_token: impl Into<String>) -> Result<Self, ProviderError> {
        Self::try_from(ConnectionArgs {
            server_url: Some(server_url.into()),
            api_token: Some(api_token.into()),
            allow_insecure_https: false,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        })
    }

    /// Build the HTTP client for these settings
    pub fn build_client(&self) -> Result<NetBoxClient, ProviderError> {
        let options = ClientOptions {
            timeout: self.request_timeout,
            accept_invalid_certs: self.allow_insecure_https,
        };
        Ok(NetBoxClient::with_options(
            self.server_url.clone(),
            self.api_token.clone(),
            options,
        )?)
    }
}

impl TryFrom<ConnectionArgs> for ProviderConfig {
    type Error = ProviderError;

    fn try_from(args: ConnectionArgs) -> Result<Self, Self::Error> {
        let server_url = args
            .server_url
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidConfig("server_url (NETBOX_SERVER_URL) is required".to_string()))?;
        let api_token = args
            .api_token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ProviderError::InvalidConfig("api_token (NETBOX_API_TOKEN) is required".to_string()))?;

        let url = Url::parse(&server_url)
            .map_err(|e| ProviderError::InvalidConfig(format!("server_url {:?} is not a valid URL: {}", server_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ProviderError::InvalidConfig(format!(
                "server_url must use http or https, got {}",
                url.scheme()
            )));
        }
        if args.request_timeout == 0 {
            return Err(ProviderError::InvalidConfig("request_timeout must be at least 1 second".to_string()));
        }

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            api_token,
            allow_insecure_https: args.allow_insecure_https,
            request_timeout: Duration::from_secs(args.request_timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        connection: ConnectionArgs,
    }

    fn args(url: Option<&str>, token: Option<&str>) -> ConnectionArgs {
        ConnectionArgs {
            server_url: url.map(str::to_string),
            api_token: token.map(str::to_string),
            request_timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let config = ProviderConfig::try_from(args(Some("https://netbox.example.com/"), Some("abc"))).unwrap();
        assert_eq!(config.server_url, "https://netbox.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.allow_insecure_https);
    }

    #[test]
    fn test_missing_token_rejected() {
        for token in [None, Some(""), Some("  ")] {
            let err = ProviderConfig::try_from(args(Some("https://netbox.example.com"), token)).unwrap_err();
            assert!(matches!(err, ProviderError::InvalidConfig(ref m) if m.contains("api_token")));
        }
    }

    #[test]
    fn test_missing_url_rejected() {
        let err = ProviderConfig::try_from(args(None, Some("abc"))).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig(ref m) if m.contains("server_url")));
    }

    #[test]
    fn test_malformed_url_rejected() {
        assert!(ProviderConfig::try_from(args(Some("netbox.example.com"), Some("abc"))).is_err());
        assert!(ProviderConfig::try_from(args(Some("ftp://netbox.example.com"), Some("abc"))).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut a = args(Some("http://netbox"), Some("abc"));
        a.request_timeout = 0;
        assert!(ProviderConfig::try_from(a).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ProviderConfig::new("http://netbox", "supersecret").unwrap();
        assert!(!format!("{:?}", config).contains("supersecret"));
    }

    #[test]
    fn test_flags_parse() {
        let cli = TestCli::try_parse_from([
            "test",
            "--server-url",
            "http://netbox:8000",
            "--api-token",
            "abc",
            "--allow-insecure-https",
            "--request-timeout",
            "5",
        ])
        .unwrap();
        let config = ProviderConfig::try_from(cli.connection).unwrap();
        assert_eq!(config.server_url, "http://netbox:8000");
        assert!(config.allow_insecure_https);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_build_client_uses_server_url() {
        let config = ProviderConfig::new("http://netbox:8000", "abc").unwrap();
        let client = config.build_client().unwrap();
        assert_eq!(client.base_url(), "http://netbox:8000");
    }
}
