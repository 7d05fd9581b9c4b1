use clap::{Parser, Subcommand};
use gestor_core::{AuditRecorder, JsonlFileSink, Orchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod db;
mod gateway;

use commands::{ConfigCommand, EntityCommand, SyncCommand};
use config::Config;

#[derive(Parser)]
#[command(name = "gestor")]
#[command(version)]
#[command(about = "Business administration backend: validate, audit and sync entities", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create, update, delete or check entities
    Entity(EntityCommand),

    /// Load modules from the backend
    Sync(SyncCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so JSON written to stdout stays parseable.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("GESTOR_LOG")
                .unwrap_or_else(|_| "gestor=info,gestor_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;

    match cli.command {
        Some(Commands::Entity(cmd)) => {
            let orchestrator = orchestrator(&config).await?;
            cmd.run(&orchestrator).await?;
        }
        Some(Commands::Sync(cmd)) => {
            let orchestrator = orchestrator(&config).await?;
            cmd.run(&orchestrator).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

async fn orchestrator(config: &Config) -> Result<Orchestrator, Box<dyn std::error::Error>> {
    let gateway = gateway::connect(config).await?;
    let audit = match &config.audit_log.value {
        Some(path) => AuditRecorder::new(Arc::new(JsonlFileSink::open(path)?)),
        None => AuditRecorder::tracing(),
    };
    Ok(Orchestrator::new(gateway, audit, config.session()))
}
