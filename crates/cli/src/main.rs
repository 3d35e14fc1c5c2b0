//! Askline CLI
//!
//! Main entry point for the askline command-line tool: a client for a
//! question-answering service that returns answers with their sources.

mod commands;
mod view;

use clap::{Parser, Subcommand};
use commands::AskCommand;
use askline_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// Askline CLI - ask a question-answering service, get answers with sources
#[derive(Parser, Debug)]
#[command(name = "askline")]
#[command(about = "Ask a question-answering service, get answers with sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "ASKLINE_CONFIG")]
    config: Option<PathBuf>,

    /// Question-answering service base URL
    #[arg(short, long, global = true, env = "ASKLINE_ENDPOINT")]
    endpoint: Option<String>,

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
    /// Ask a question
    Ask(AskCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from file and environment; the --config
    // path participates in the file merge itself, not as an override
    let config = AppConfig::load(cli.config.as_deref())?;

    // Apply CLI overrides
    let config = config.with_overrides(cli.endpoint, cli.log_level, cli.verbose, cli.no_color);

    config.validate()?;

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("Askline CLI starting");
    tracing::debug!("Endpoint: {}", config.endpoint);

    let command_name = match &cli.command {
        Commands::Ask(_) => "ask",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Ask(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
