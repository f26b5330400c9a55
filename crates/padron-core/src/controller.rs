//! Search controller: normalizes input, dispatches the lookup and publishes
//! the resulting view state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::cedula::normalize_with_form;
use crate::lookup::PersonaLookup;
use crate::view::{ViewSink, ViewState};

/// What to do with a response that arrives after a newer search was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponsePolicy {
    /// Only the most recently issued search may update the view.
    #[default]
    LatestRequest,
    /// Every completed search updates the view, so the last response to
    /// arrive wins even if it belongs to an older search.
    LastResponse,
}

/// Result of a single [`SearchController::search`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The view was replaced with `state`.
    Applied {
        ticket: u64,
        cedula: String,
        state: ViewState,
    },
    /// A newer search was issued while this one was in flight; the view was
    /// left alone.
    Stale { ticket: u64, latest: u64 },
}

impl SearchOutcome {
    /// The applied state, if this search updated the view.
    pub fn state(&self) -> Option<&ViewState> {
        match self {
            SearchOutcome::Applied { state, .. } => Some(state),
            SearchOutcome::Stale { .. } => None,
        }
    }

    /// Whether the view was left untouched.
    pub fn is_stale(&self) -> bool {
        matches!(self, SearchOutcome::Stale { .. })
    }
}

/// Drives one search form.
///
/// Both collaborators are injected: `L` performs the lookup and `V` receives
/// every applied [`ViewState`]. Searches may overlap; each one takes a
/// ticket from a monotonically increasing counter, and under
/// [`ResponsePolicy::LatestRequest`] only the holder of the newest ticket
/// may publish.
pub struct SearchController<L, V> {
    lookup: L,
    view: V,
    policy: ResponsePolicy,
    last_ticket: AtomicU64,
    current: Mutex<ViewState>,
}

impl<L: PersonaLookup, V: ViewSink> SearchController<L, V> {
    /// Create a controller with the default response policy.
    pub fn new(lookup: L, view: V) -> Self {
        Self {
            lookup,
            view,
            policy: ResponsePolicy::default(),
            last_ticket: AtomicU64::new(0),
            current: Mutex::new(ViewState::idle()),
        }
    }

    /// Builder method to set the response policy.
    pub fn with_policy(mut self, policy: ResponsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Normalize `raw`, look it up and publish the outcome.
    ///
    /// Never fails: every lookup error becomes a "not found" view.
    pub async fn search(&self, raw: &str) -> SearchOutcome {
        let (cedula, form) = normalize_with_form(raw);
        let ticket = self.last_ticket.fetch_add(1, Ordering::SeqCst) + 1;

        debug!(
            ticket,
            form = %form,
            cedula = %cedula,
            lookup = self.lookup.name(),
            "Dispatching persona lookup"
        );

        let state = match self.lookup.find_persona(&cedula).await {
            Ok(persona) => {
                info!(ticket, cedula = %cedula, "Persona found");
                ViewState::found(persona)
            }
            Err(e) => {
                warn!(ticket, cedula = %cedula, error = %e, "Persona lookup failed");
                ViewState::not_found()
            }
        };

        self.apply(ticket, cedula, state)
    }

    fn apply(&self, ticket: u64, cedula: String, state: ViewState) -> SearchOutcome {
        // Held across the staleness check and the publish so the sink sees
        // states in the same order as `current`.
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.policy == ResponsePolicy::LatestRequest {
            let latest = self.last_ticket.load(Ordering::SeqCst);
            if ticket != latest {
                debug!(ticket, latest, "Discarding stale lookup response");
                return SearchOutcome::Stale { ticket, latest };
            }
        }

        *current = state.clone();
        self.view.publish(state.clone());

        SearchOutcome::Applied {
            ticket,
            cedula,
            state,
        }
    }

    /// The most recently applied view state.
    pub fn current(&self) -> ViewState {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Ticket of the most recently issued search (0 before the first).
    pub fn latest_ticket(&self) -> u64 {
        self.last_ticket.load(Ordering::SeqCst)
    }

    /// Get the response policy.
    pub fn policy(&self) -> ResponsePolicy {
        self.policy
    }

    /// Get a reference to the lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Get a reference to the view sink.
    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<L, V> std::fmt::Debug for SearchController<L, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("policy", &self.policy)
            .field("last_ticket", &self.last_ticket.load(Ordering::SeqCst))
            .finish()
    }
}
