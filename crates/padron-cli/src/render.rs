//! Text rendering of view states.

use padron_core::{Persona, ViewState};

/// Message shown when a search finds nobody.
pub const NOT_FOUND: &str = "Persona no encontrada";

/// Render a view state for the terminal. Idle states render as nothing.
pub fn render(state: &ViewState) -> String {
    if state.is_idle() {
        return String::new();
    }

    match state.personas().first() {
        Some(persona) if state.is_found() => render_persona(persona),
        _ => NOT_FOUND.to_string(),
    }
}

/// Render a view state as JSON (`{"personas": [...], "found": 0|1}`).
pub fn render_json(state: &ViewState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}

fn render_persona(persona: &Persona) -> String {
    let mut lines = vec![
        format!("{} ({})", persona.full_name(), persona.cedula),
        format!("  Centro:    {}", persona.centro),
    ];

    if !persona.direccion.is_empty() {
        lines.push(format!("  Dirección: {}", persona.direccion));
    }

    let location = persona.location();
    if !location.is_empty() {
        lines.push(format!("  Ubicación: {}", location));
    }

    if let Some(mesa) = persona.mesa.as_deref().filter(|m| !m.is_empty()) {
        lines.push(format!("  Mesa:      {}", mesa));
    }

    if !persona.url.is_empty() {
        lines.push(format!("  Mapa:      {}", persona.url));
    }

    lines.join("\n")
}
