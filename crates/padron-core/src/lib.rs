//! Core types for the padron cédula lookup client.
//!
//! This crate holds the logic shared by every front end:
//!
//! - [`cedula`] - Normalization of user-typed identity numbers
//! - [`Persona`] - The record returned by the backend
//! - [`PersonaLookup`] - The trait lookup backends implement
//! - [`SearchController`] - Normalizes, dispatches and publishes a [`ViewState`]
//!
//! # Example
//!
//! ```rust
//! use padron_core::{async_trait, LookupError, Persona, PersonaLookup, SearchController, ViewState};
//! use tokio::sync::watch;
//!
//! struct Nobody;
//!
//! #[async_trait]
//! impl PersonaLookup for Nobody {
//!     async fn find_persona(&self, cedula: &str) -> Result<Persona, LookupError> {
//!         Err(LookupError::NotFound(cedula.to_string()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Nobody"
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (tx, rx) = watch::channel(ViewState::idle());
//! let controller = SearchController::new(Nobody, tx);
//!
//! controller.search("1-2345-6789").await;
//! assert_eq!(*rx.borrow(), ViewState::not_found());
//! # }
//! ```

pub mod cedula;
mod controller;
mod error;
mod lookup;
mod persona;
mod view;

pub use cedula::{classify, normalize, normalize_with_form, CedulaForm};
pub use controller::{ResponsePolicy, SearchController, SearchOutcome};
pub use error::LookupError;
pub use lookup::PersonaLookup;
pub use persona::Persona;
pub use view::{Found, ViewSink, ViewState};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
