//! View state produced by a search and the sink it is published to.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::persona::Persona;

/// Outcome flag driving conditional rendering.
///
/// Serializes as the integer (`1` / `0`) that templates branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Found {
    NotFound = 0,
    Found = 1,
}

impl Found {
    /// Integer value of the flag.
    pub fn as_flag(self) -> u8 {
        self as u8
    }
}

impl From<Found> for u8 {
    fn from(found: Found) -> Self {
        found.as_flag()
    }
}

impl TryFrom<u8> for Found {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Found::NotFound),
            1 => Ok(Found::Found),
            other => Err(format!("invalid found flag: {}", other)),
        }
    }
}

/// Everything a renderer needs after a search.
///
/// The record list and the flag are only ever replaced together: use
/// [`ViewState::found`] or [`ViewState::not_found`] to build one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    personas: Vec<Persona>,
    found: Option<Found>,
}

impl ViewState {
    /// State before any search has completed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A successful lookup: exactly one record, flag set to found.
    pub fn found(persona: Persona) -> Self {
        Self {
            personas: vec![persona],
            found: Some(Found::Found),
        }
    }

    /// A failed lookup: no records, flag set to not found.
    pub fn not_found() -> Self {
        Self {
            personas: Vec::new(),
            found: Some(Found::NotFound),
        }
    }

    /// Records to display (zero or one).
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    /// The flag, or `None` if no search has completed yet.
    pub fn found_flag(&self) -> Option<Found> {
        self.found
    }

    /// Whether the last applied search found a record.
    pub fn is_found(&self) -> bool {
        self.found == Some(Found::Found)
    }

    /// Whether no search has completed yet.
    pub fn is_idle(&self) -> bool {
        self.found.is_none()
    }
}

/// Receives every view state the search controller applies.
pub trait ViewSink: Send + Sync {
    /// Replace whatever is currently displayed with `state`.
    fn publish(&self, state: ViewState);
}

impl ViewSink for watch::Sender<ViewState> {
    fn publish(&self, state: ViewState) {
        // Keeps the latest value even while nobody is subscribed.
        self.send_replace(state);
    }
}

impl<S: ViewSink + ?Sized> ViewSink for Arc<S> {
    fn publish(&self, state: ViewState) {
        (**self).publish(state)
    }
}

impl<S: ViewSink + ?Sized> ViewSink for &S {
    fn publish(&self, state: ViewState) {
        (**self).publish(state)
    }
}
