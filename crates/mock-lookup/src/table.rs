//! Static lookup - answers from a fixed table of personas.

use std::collections::HashMap;
use std::sync::Mutex;

use padron_core::{async_trait, LookupError, Persona, PersonaLookup};

/// A lookup that answers from an in-memory table keyed by cédula.
///
/// Unknown identities fail with [`LookupError::NotFound`]. Every identity the
/// lookup was asked for is recorded, in order, so tests can check what the
/// controller dispatched.
#[derive(Debug, Default)]
pub struct StaticLookup {
    personas: HashMap<String, Persona>,
    requests: Mutex<Vec<String>>,
}

impl StaticLookup {
    /// Create an empty lookup; every search fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a persona, keyed by its `cedula` field.
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.insert(persona);
        self
    }

    /// Add or replace a persona, keyed by its `cedula` field.
    pub fn insert(&mut self, persona: Persona) {
        self.personas.insert(persona.cedula.clone(), persona);
    }

    /// A small table for offline demos.
    pub fn sample() -> Self {
        Self::new()
            .with_persona(Persona {
                cedula: "102340567".to_string(),
                nombre: "MARIA JOSE".to_string(),
                apellido1: "ROJAS".to_string(),
                apellido2: "CHAVES".to_string(),
                centro: "ESCUELA REPUBLICA DE CHILE".to_string(),
                direccion: "COSTADO NORTE DEL PARQUE".to_string(),
                url: String::new(),
                provincia: "SAN JOSE".to_string(),
                canton: "CENTRAL".to_string(),
                distrito: "HOSPITAL".to_string(),
                mesa: Some("0124".to_string()),
            })
            .with_persona(Persona {
                cedula: "203450678".to_string(),
                nombre: "CARLOS".to_string(),
                apellido1: "SOLANO".to_string(),
                apellido2: "ARIAS".to_string(),
                centro: "LICEO DE ALAJUELA".to_string(),
                direccion: "200 M SUR DE LA CATEDRAL".to_string(),
                url: String::new(),
                provincia: "ALAJUELA".to_string(),
                canton: "CENTRAL".to_string(),
                distrito: "ALAJUELA".to_string(),
                mesa: None,
            })
    }

    /// Number of personas in the table.
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Identities requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl PersonaLookup for StaticLookup {
    async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(cedula.to_string());

        self.personas
            .get(cedula)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(cedula.to_string()))
    }

    fn name(&self) -> &str {
        "StaticLookup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_persona_is_found() {
        let lookup = StaticLookup::sample();
        let persona = lookup.find_persona("102340567").await.unwrap();
        assert_eq!(persona.nombre, "MARIA JOSE");
    }

    #[tokio::test]
    async fn test_unknown_persona_is_not_found() {
        let lookup = StaticLookup::new();
        let err = lookup.find_persona("123456789").await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(ref id) if id == "123456789"));
    }

    #[tokio::test]
    async fn test_requests_are_recorded() {
        let lookup = StaticLookup::sample();
        let _ = lookup.find_persona("1").await;
        let _ = lookup.find_persona("203450678").await;
        assert_eq!(lookup.requests(), vec!["1", "203450678"]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut lookup = StaticLookup::sample();
        assert_eq!(lookup.len(), 2);
        lookup.insert(Persona {
            cedula: "102340567".to_string(),
            ..Default::default()
        });
        assert_eq!(lookup.len(), 2);
        assert!(!lookup.is_empty());
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(StaticLookup::new().name(), "StaticLookup");
    }
}
