//! The record returned by the padron backend.

use serde::{Deserialize, Serialize};

/// A registered voter and the voting centre assigned to them.
///
/// The backend serializes its struct with exported Go field names, so keys
/// are PascalCase. Every field defaults when missing; older servers do not
/// send `Mesa`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Persona {
    /// Canonical identity number.
    pub cedula: String,
    /// Given name(s).
    pub nombre: String,
    /// First surname.
    pub apellido1: String,
    /// Second surname.
    pub apellido2: String,
    /// Voting centre name.
    pub centro: String,
    /// Voting centre address.
    pub direccion: String,
    /// Map link for the voting centre.
    pub url: String,
    pub provincia: String,
    pub canton: String,
    pub distrito: String,
    /// Voting table number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesa: Option<String>,
}

impl Persona {
    /// Given names followed by both surnames, skipping empty parts.
    pub fn full_name(&self) -> String {
        [
            self.nombre.as_str(),
            self.apellido1.as_str(),
            self.apellido2.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// `Provincia / Canton / Distrito`, skipping empty parts.
    pub fn location(&self) -> String {
        [
            self.provincia.as_str(),
            self.canton.as_str(),
            self.distrito.as_str(),
        ]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
    }
}
