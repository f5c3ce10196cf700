//! Client configuration read from the environment.

use std::fmt;

use crate::error::ConfigError;
use crate::network::DEFAULT_API_URL;

/// API token (`X-Api-Key`).
pub const ENV_API_TOKEN: &str = "API_TOKEN";
/// Trading account id used as `clientId` in order and portfolio calls.
pub const ENV_CLIENT_ID: &str = "TRANSAQ_TOKEN";
/// Base URL override.
pub const ENV_API_URL: &str = "API_URL";

/// Everything needed to build a [`TradeApiClient`](crate::client::TradeApiClient).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_token: String,
    pub client_id: Option<String>,
    pub api_url: String,
}

impl ClientConfig {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            client_id: None,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Read `API_TOKEN` (required), `TRANSAQ_TOKEN` and `API_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load `.env` from the working directory (if present), then [`from_env`](Self::from_env).
    pub fn from_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {
                tracing::debug!("No .env file found, using process environment");
            }
            Err(e) => return Err(ConfigError::DotEnv(e.to_string())),
        }
        Self::from_env()
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_token = non_empty(ENV_API_TOKEN).ok_or(ConfigError::MissingVar(ENV_API_TOKEN))?;
        let api_url = non_empty(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl(api_url));
        }

        Ok(Self {
            api_token,
            client_id: non_empty(ENV_CLIENT_ID),
            api_url,
        })
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"<redacted>")
            .field("client_id", &self.client_id.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_full_config() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_TOKEN", "tok"),
            ("TRANSAQ_TOKEN", "C1"),
            ("API_URL", "https://example.test/api"),
        ]))
        .unwrap();
        assert_eq!(config.api_token, "tok");
        assert_eq!(config.client_id.as_deref(), Some("C1"));
        assert_eq!(config.api_url, "https://example.test/api");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[("API_TOKEN", "tok")])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.client_id.is_none());
    }

    #[test]
    fn test_missing_token() {
        let err = ClientConfig::from_lookup(lookup(&[("API_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("API_TOKEN")));
    }

    #[test]
    fn test_invalid_url() {
        let err = ClientConfig::from_lookup(lookup(&[("API_TOKEN", "tok"), ("API_URL", "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig::new("super-secret").with_client_id("C1");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("C1"));
        assert!(debug.contains(DEFAULT_API_URL));
    }
}
