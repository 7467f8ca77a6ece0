// SafeSpace - Supportive chat companion
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use safespace::companion::Companion;
use safespace::config::{load_config, Config};
use safespace::server::CompanionServer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "safespace")]
#[command(about = "Supportive chat companion with crisis-aware responses", version)]
struct Args {
    /// Path to config.toml (default: ~/.safespace/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Run mode (default: serve)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Run one message through the reply pipeline and print the JSON payload
    Ask {
        /// Message text
        message: String,
        /// Display name used in the reply
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Print a quick-comfort message (grounding, comfort, crisis, activity, stress, ...)
    Comfort {
        kind: String,
    },
    /// Print the helpline directory
    Helplines,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing();

    let config = load_config(args.config.as_deref())?;

    match args.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => run_server(config, bind).await,
        Command::Ask { message, name } => run_ask(&config, &message, &name).await,
        Command::Comfort { kind } => run_comfort(&config, &kind),
        Command::Helplines => {
            let companion = Companion::from_config(&config)?;
            println!("{}", companion.helplines().format());
            Ok(())
        }
    }
}

/// Run HTTP server
async fn run_server(mut config: Config, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind_address = bind;
    }

    let companion = Companion::from_config(&config).context("Failed to initialise companion")?;
    let server = CompanionServer::new(&config, companion);

    server.serve().await
}

/// Execute a single message
async fn run_ask(config: &Config, message: &str, name: &str) -> Result<()> {
    let companion = Companion::from_config(config)?;
    let payload = companion.generate(message, name).await;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn run_comfort(config: &Config, kind: &str) -> Result<()> {
    let companion = Companion::from_config(config)?;
    let message = companion.quick_comfort(kind)?;

    println!("{}", message);
    Ok(())
}

/// Initialize tracing
///
/// Logs go to stderr so `ask`/`comfort` output stays clean on stdout.
/// Default: INFO level, can be overridden with RUST_LOG env var
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}
