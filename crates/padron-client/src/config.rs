//! Configuration types for padron-client.

use std::env;

use crate::error::ClientError;

/// Default backend base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "PADRON_URL";

/// Configuration for connecting to the padron backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8080").
    pub base_url: String,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Optional (with defaults):
    /// - `PADRON_URL` - Default: http://localhost:8080
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self::new(base_url);
        config.validate()?;
        Ok(config)
    }

    /// Check that the base URL is usable.
    pub fn validate(&self) -> Result<(), ClientError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://: {}",
                url
            )));
        }
        Ok(())
    }

    /// Get the persona endpoint URL for an identity.
    ///
    /// The identity is percent-encoded as a single path segment, so input the
    /// normalizer passed through (spaces, slashes, `?`) cannot alter the path.
    pub fn persona_url(&self, cedula: &str) -> String {
        format!(
            "{}/persona/{}",
            self.base_url.trim().trim_end_matches('/'),
            urlencoding::encode(cedula)
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
