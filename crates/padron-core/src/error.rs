//! Error types for persona lookups.

use thiserror::Error;

/// Errors that can occur while looking up a persona.
///
/// The search controller treats every variant the same way (the view ends up
/// "not found"); the variants only exist so failures can be logged usefully.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The backend has no record for the identity.
    #[error("persona not found: {0}")]
    NotFound(String),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not a persona record.
    #[error("invalid response: {0}")]
    Decode(String),
}
