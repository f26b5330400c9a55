//! In-memory persona lookups for the padron search controller.
//!
//! This crate provides implementations of the `PersonaLookup` trait for
//! testing and offline use:
//! - `StaticLookup` - Answers from a fixed table of personas
//! - `FailingLookup` - Fails every lookup
//! - `DelayedLookup` - Wraps another lookup with artificial latency
//! - `RecordingView` - A view sink that keeps every published state
//!
//! For the real backend, use the `padron-client` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_lookup::{Persona, PersonaLookup, StaticLookup};
//!
//! #[tokio::main]
//! async fn main() {
//!     let lookup = StaticLookup::new().with_persona(Persona {
//!         cedula: "123456789".to_string(),
//!         ..Default::default()
//!     });
//!
//!     assert!(lookup.find_persona("123456789").await.is_ok());
//!     assert!(lookup.find_persona("987654321").await.is_err());
//! }
//! ```

mod delayed;
mod failing;
mod recording;
mod table;

// Re-export padron-core types for convenience
pub use padron_core::{async_trait, LookupError, Persona, PersonaLookup, ViewSink, ViewState};

pub use delayed::DelayedLookup;
pub use failing::FailingLookup;
pub use recording::RecordingView;
pub use table::StaticLookup;
