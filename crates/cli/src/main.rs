use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quarry_core::discovery_manager::{DiscoveryManager, DiscoveryManagerConfig};

mod commands;

/// Quarry - extension artifact discovery and metadata indexing
#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "Discover extension artifacts and index their structural metadata")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full discovery pass and show resolved extensions
    Discover {
        /// Also print a per-key summary of the metadata table
        #[arg(long)]
        table: bool,
    },
    /// Classify candidates from all sources without exploring them
    Candidates,
    /// Run discovery and show metadata entries for one declaration key
    Metadata {
        /// The declaration key to look up (e.g. "quarry.Extension")
        key: String,
    },
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quarry_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    // Initialize the discovery manager with all business logic
    let manager = DiscoveryManager::new(DiscoveryManagerConfig {
        workspace_root: cli.workspace,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize discovery: {}", e))?;

    // Execute command (CLI layer only handles presentation)
    match cli.command {
        Commands::Discover { table } => commands::discover::execute(&manager, table),
        Commands::Candidates => commands::candidates::execute(&manager),
        Commands::Metadata { key } => commands::metadata::execute(&manager, &key),
    }
}
