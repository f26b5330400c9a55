//! Padron backend client library.
//!
//! This crate provides a Rust client for the padron lookup service, which
//! answers `GET /persona/{cedula}` with the registered voter and their
//! voting centre. [`PadronClient`] implements
//! [`padron_core::PersonaLookup`], so it plugs straight into a
//! [`padron_core::SearchController`].
//!
//! # Example
//!
//! ```no_run
//! use padron_client::{ClientConfig, PadronClient};
//!
//! # async fn example() -> Result<(), padron_client::ClientError> {
//! let client = PadronClient::new(ClientConfig::default())?;
//!
//! let persona = client.get_persona("123456789").await?;
//! println!("{} votes at {}", persona.full_name(), persona.centro);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::PadronClient;
pub use config::ClientConfig;
pub use error::ClientError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
