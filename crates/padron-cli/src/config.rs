//! Configuration loaded from environment variables.

use std::env;

use padron_client::ClientConfig;
use padron_core::ResponsePolicy;

/// Terminal front end configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL.
    pub backend_url: String,
    /// What to do with responses to superseded searches.
    pub policy: ResponsePolicy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PADRON_URL` | Backend base URL | `http://localhost:8080` |
    /// | `PADRON_RESPONSE_POLICY` | `latest` (newest search wins) or `last` (last response wins) | `latest` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_url = env::var(padron_client::config::BASE_URL_ENV)
            .unwrap_or_else(|_| padron_client::config::DEFAULT_BASE_URL.to_string());

        let policy = match env::var("PADRON_RESPONSE_POLICY") {
            Ok(value) => parse_policy(&value)?,
            Err(_) => ResponsePolicy::default(),
        };

        Ok(Self {
            backend_url,
            policy,
        })
    }

    /// Check that the backend URL is one the client can use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ClientConfig::new(&self.backend_url)
            .validate()
            .map_err(|e| ConfigError::InvalidUrl(e.to_string()))
    }

    /// Builder method to override the backend URL.
    pub fn with_backend_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.backend_url = url;
        }
        self
    }
}

fn parse_policy(value: &str) -> Result<ResponsePolicy, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "latest" | "latest-request" => Ok(ResponsePolicy::LatestRequest),
        "last" | "last-response" => Ok(ResponsePolicy::LastResponse),
        other => Err(ConfigError::InvalidPolicy(other.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PADRON_RESPONSE_POLICY: {0} (expected latest or last)")]
    InvalidPolicy(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_policy() {
        assert_eq!(parse_policy("latest").unwrap(), ResponsePolicy::LatestRequest);
        assert_eq!(parse_policy(" LAST ").unwrap(), ResponsePolicy::LastResponse);
        assert_eq!(
            parse_policy("last-response").unwrap(),
            ResponsePolicy::LastResponse
        );
        assert!(matches!(
            parse_policy("first"),
            Err(ConfigError::InvalidPolicy(ref v)) if v == "first"
        ));
    }

    #[test]
    fn test_validate_backend_url() {
        let mut config = Config {
            backend_url: "https://padron.example".to_string(),
            policy: ResponsePolicy::default(),
        };
        assert!(config.validate().is_ok());

        config.backend_url = "localhost:8080".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));

        config.backend_url = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_backend_url_override() {
        let config = Config {
            backend_url: "http://localhost:8080".to_string(),
            policy: ResponsePolicy::default(),
        };
        let config = config.with_backend_url(Some("http://padron.example".to_string()));
        assert_eq!(config.backend_url, "http://padron.example");
        let config = config.with_backend_url(None);
        assert_eq!(config.backend_url, "http://padron.example");
    }
}
