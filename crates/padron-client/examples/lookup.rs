//! Look up a single cédula against a running backend.
//!
//! Run with: cargo run --example lookup -- 1-2345-6789
//!
//! Set PADRON_URL to point at a backend other than http://localhost:8080.

use std::env;

use padron_client::PadronClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let raw = env::args().nth(1).ok_or("usage: lookup <cedula>")?;
    let cedula = padron_core::normalize(&raw);

    let client = PadronClient::from_env()?;
    println!("Querying {}", client.config().persona_url(&cedula));

    match client.get_persona(&cedula).await {
        Ok(persona) => {
            println!("{} ({})", persona.full_name(), persona.cedula);
            println!("{}", persona.centro);
            println!("{}", persona.location());
        }
        Err(e) => println!("Lookup failed: {}", e),
    }

    Ok(())
}
