//! Padron backend HTTP client.

use async_trait::async_trait;
use padron_core::{LookupError, Persona, PersonaLookup};
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Client for the padron persona lookup endpoint.
#[derive(Clone)]
pub struct PadronClient {
    http: Client,
    config: ClientConfig,
}

impl PadronClient {
    /// Create a client for the configured backend.
    ///
    /// No request is made until the first lookup.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let http = Client::builder()
            .user_agent(concat!("padron-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { http, config })
    }

    /// Create a client from `PADRON_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Fetch the persona registered under `cedula`.
    pub async fn get_persona(&self, cedula: &str) -> Result<Persona, ClientError> {
        let url = self.config.persona_url(cedula);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ClientError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        response.json().await.map_err(ClientError::Http)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying HTTP client.
    pub fn http_client(&self) -> &Client {
        &self.http
    }
}

#[async_trait]
impl PersonaLookup for PadronClient {
    async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError> {
        self.get_persona(cedula).await.map_err(LookupError::from)
    }

    fn name(&self) -> &str {
        "PadronClient"
    }
}

impl std::fmt::Debug for PadronClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PadronClient")
            .field("config", &self.config)
            .finish()
    }
}
