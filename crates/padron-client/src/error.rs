//! Error types for padron-client.

use padron_core::LookupError;
use thiserror::Error;

/// Errors that can occur when talking to the padron backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed or the body could not be decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<ClientError> for LookupError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) if e.is_decode() => LookupError::Decode(e.to_string()),
            ClientError::Http(e) => LookupError::Transport(e.to_string()),
            ClientError::Status { status: 404, body } => LookupError::NotFound(body),
            ClientError::Status { status, body } => LookupError::Status {
                status,
                message: body,
            },
            ClientError::Config(msg) => LookupError::Transport(msg),
        }
    }
}
