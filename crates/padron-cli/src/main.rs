//! Terminal front end for the padron lookup service.
//!
//! Normalizes cédulas typed in any common format, looks them up and prints
//! the registered voter with their voting centre.

mod config;
mod render;

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use mock_lookup::StaticLookup;
use padron_client::{ClientConfig, PadronClient};
use padron_core::{
    normalize_with_form, PersonaLookup, ResponsePolicy, SearchController, SearchOutcome, ViewState,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "padron")]
#[command(about = "Look up voters in the padron by cédula")]
struct Args {
    /// Backend base URL. Falls back to PADRON_URL env.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Answer from a built-in sample table instead of the backend
    #[arg(long, global = true)]
    offline: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Let the last response win even if it belongs to an older search
    #[arg(long, global = true)]
    last_response_wins: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the canonical form of each input without looking it up
    Normalize {
        /// Raw cédulas, as typed
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Look up a single cédula; exits with 1 when nobody is found
    Search {
        /// Raw cédula, as typed
        cedula: String,
    },
    /// Read cédulas from stdin, one per line, and print each result
    Interactive,
}

type Controller = SearchController<Box<dyn PersonaLookup>, watch::Sender<ViewState>>;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Command::Normalize { inputs } = &args.command {
        for raw in inputs {
            let (canonical, form) = normalize_with_form(raw);
            println!("{} -> {} ({})", raw, canonical, form);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = Config::from_env()?.with_backend_url(args.url.clone());
    if args.last_response_wins {
        config.policy = ResponsePolicy::LastResponse;
    }
    if !args.offline {
        config.validate()?;
    }

    let lookup = build_lookup(&config, args.offline)?;
    info!(lookup = lookup.name(), policy = ?config.policy, "Lookup ready");

    let (tx, rx) = watch::channel(ViewState::idle());
    let controller = SearchController::new(lookup, tx).with_policy(config.policy);

    match args.command {
        Command::Search { cedula } => {
            let outcome = controller.search(&cedula).await;
            let state = outcome.state().cloned().unwrap_or_else(|| controller.current());
            print_state(&state, args.json)?;
            Ok(if state.is_found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Interactive => {
            run_interactive(Arc::new(controller), rx, args.json).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Normalize { .. } => Ok(ExitCode::SUCCESS),
    }
}

fn build_lookup(
    config: &Config,
    offline: bool,
) -> Result<Box<dyn PersonaLookup>, Box<dyn std::error::Error>> {
    if offline {
        return Ok(Box::new(StaticLookup::sample()));
    }

    let client = PadronClient::new(ClientConfig::new(&config.backend_url))?;
    info!(url = %config.backend_url, "Using padron backend");
    Ok(Box::new(client))
}

fn print_state(state: &ViewState, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", render::render_json(state)?);
    } else {
        println!("{}", render::render(state));
    }
    Ok(())
}

/// Every line starts its own search; searches may overlap. A renderer task
/// prints each state the controller publishes.
async fn run_interactive(
    controller: Arc<Controller>,
    mut rx: watch::Receiver<ViewState>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            if let Err(e) = print_state(&state, json) {
                warn!(error = %e, "Failed to render result");
            }
        }
    });

    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Cedula (Ctrl-D to quit):\n").await?;
    stdout.flush().await?;

    let mut searches = spawn_searches(&controller, BufReader::new(tokio::io::stdin())).await?;

    while let Some(result) = searches.join_next().await {
        if let Err(e) = result {
            warn!(error = %e, "Search task failed");
        }
    }

    // Dropping the last controller closes the channel and ends the renderer.
    drop(controller);
    renderer.await?;

    Ok(())
}

/// Start one search per line. Blank lines are searched too and end as
/// "not found".
async fn spawn_searches<R>(
    controller: &Arc<Controller>,
    reader: R,
) -> std::io::Result<JoinSet<SearchOutcome>>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut searches = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let controller = Arc::clone(controller);
        searches.spawn(async move { controller.search(&line).await });
    }

    Ok(searches)
}
