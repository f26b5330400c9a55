//! The lookup capability the search controller depends on.

use async_trait::async_trait;

use crate::error::LookupError;
use crate::persona::Persona;

/// Something that can resolve a canonical identity to a persona record.
///
/// Implementations range from the HTTP client in `padron-client` to the
/// in-memory lookups in `mock-lookup`. This trait is object-safe and can be
/// used with `Box<dyn PersonaLookup>`.
#[async_trait]
pub trait PersonaLookup: Send + Sync {
    /// Look up a single persona by canonical identity.
    ///
    /// The identity is passed as produced by the normalizer, which may be
    /// arbitrary user text for input it did not recognize.
    async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError>;

    /// Get a human-readable name for this lookup implementation.
    fn name(&self) -> &str;
}

#[async_trait]
impl<L: PersonaLookup + ?Sized> PersonaLookup for std::sync::Arc<L> {
    async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError> {
        (**self).find_persona(cedula).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<L: PersonaLookup + ?Sized> PersonaLookup for Box<L> {
    async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError> {
        (**self).find_persona(cedula).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
