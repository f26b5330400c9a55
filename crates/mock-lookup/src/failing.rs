//! Failing lookup - every search fails.

use padron_core::{async_trait, LookupError, Persona, PersonaLookup};

/// A lookup that always fails with a transport error.
///
/// Stands in for an unreachable backend.
#[derive(Debug, Clone)]
pub struct FailingLookup {
    message: String,
}

impl FailingLookup {
    /// Create a failing lookup with a default message.
    pub fn new() -> Self {
        Self::with_message("connection refused")
    }

    /// Create a failing lookup with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonaLookup for FailingLookup {
    async fn find_persona(&self, _cedula: &str) -> Result<Persona, LookupError> {
        Err(LookupError::Transport(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingLookup"
    }
}
