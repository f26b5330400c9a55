//! Recording view - keeps every published state.

use std::sync::Mutex;

use padron_core::{ViewSink, ViewState};

/// A view sink that records every state it receives, oldest first.
#[derive(Debug, Default)]
pub struct RecordingView {
    states: Mutex<Vec<ViewState>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every published state, oldest first.
    pub fn states(&self) -> Vec<ViewState> {
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// The most recently published state, if any.
    pub fn last(&self) -> Option<ViewState> {
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl ViewSink for RecordingView {
    fn publish(&self, state: ViewState) {
        self.states
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(state);
    }
}
