//! Delayed lookup - wraps another lookup with artificial latency.

use std::collections::HashMap;
use std::time::Duration;

use padron_core::{async_trait, LookupError, Persona, PersonaLookup};
use tokio::time::sleep;

/// A lookup that waits before delegating to another lookup.
///
/// Per-identity delays make responses arrive out of order, which is how
/// overlapping searches are exercised.
pub struct DelayedLookup<L: PersonaLookup> {
    inner: L,
    delay: Duration,
    overrides: HashMap<String, Duration>,
}

impl<L: PersonaLookup> DelayedLookup<L> {
    /// Create a new DelayedLookup wrapping the given lookup with the specified delay.
    pub fn new(inner: L, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            overrides: HashMap::new(),
        }
    }

    /// Create a lookup with a delay in milliseconds.
    pub fn with_millis(inner: L, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Builder method to use a different delay for one identity.
    pub fn with_delay_for(mut self, cedula: impl Into<String>, delay: Duration) -> Self {
        self.overrides.insert(cedula.into(), delay);
        self
    }

    /// Delay applied to `cedula`.
    pub fn delay_for(&self, cedula: &str) -> Duration {
        self.overrides.get(cedula).copied().unwrap_or(self.delay)
    }

    /// Get a reference to the wrapped lookup.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: PersonaLookup> PersonaLookup for DelayedLookup<L> {
    async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError> {
        sleep(self.delay_for(cedula)).await;
        self.inner.find_persona(cedula).await
    }

    fn name(&self) -> &str {
        "DelayedLookup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticLookup;
    use std::time::Instant;

    #[tokio::test]
    async fn test_delayed_lookup() {
        let lookup = DelayedLookup::with_millis(StaticLookup::sample(), 50);

        let start = Instant::now();
        let persona = lookup.find_persona("203450678").await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(persona.nombre, "CARLOS");
        assert!(elapsed >= Duration::from_millis(50));
    }

    #[test]
    fn test_per_identity_delay() {
        let lookup = DelayedLookup::with_millis(StaticLookup::new(), 10)
            .with_delay_for("1", Duration::from_secs(1));
        assert_eq!(lookup.delay_for("1"), Duration::from_secs(1));
        assert_eq!(lookup.delay_for("2"), Duration::from_millis(10));
    }

    #[tokio::test]
    async fn test_lookup_name() {
        let lookup = DelayedLookup::with_millis(StaticLookup::new(), 0);
        assert_eq!(lookup.name(), "DelayedLookup");
        assert!(lookup.inner().is_empty());
    }
}
