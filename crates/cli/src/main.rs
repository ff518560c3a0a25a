//! Grounded CLI
//!
//! Main entry point for the grounded command-line tool.
//! Exposes the two pipeline nodes — retrieval and response — so they can
//! be exercised and composed from a shell.

mod commands;

use clap::{Parser, Subcommand};
use commands::{RespondCommand, RetrieveCommand};
use grounded_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Grounded CLI - retrieval-gated answering nodes
#[derive(Parser, Debug)]
#[command(name = "grounded")]
#[command(about = "Retrieval-gated answering nodes", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (default: grounded.yaml)
    #[arg(short, long, global = true, env = "GROUNDED_CONFIG")]
    config: Option<PathBuf>,

    /// Search provider (azure, memory)
    #[arg(short, long, global = true, env = "GROUNDED_PROVIDER")]
    provider: Option<String>,

    /// Search service URL
    #[arg(long, global = true, env = "GROUNDED_SEARCH_ENDPOINT")]
    endpoint: Option<String>,

    /// Search index name
    #[arg(long, global = true, env = "GROUNDED_SEARCH_INDEX")]
    index: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Retrieve context for a question
    Retrieve(RetrieveCommand),

    /// Produce the final user-facing message
    Respond(RespondCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.config,
        cli.provider,
        cli.endpoint,
        cli.index,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    // Log startup
    tracing::info!("Grounded CLI starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Index: {:?}", config.index);

    // Emit command span
    let command_name = match &cli.command {
        Commands::Retrieve(_) => "retrieve",
        Commands::Respond(_) => "respond",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Retrieve(cmd) => cmd.execute(&config).await,
        Commands::Respond(cmd) => cmd.execute(&config).await,
    };

    // Log completion
    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
