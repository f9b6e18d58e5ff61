//! CLI adapter for the course API
//!
//! Provides a command-line interface over the server and client halves.
//! Both commands share the same configuration loading; flags override
//! the loaded values.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Courseable - development-mode course API
///
/// Runs a local HTTP server over a fixed set of course summaries, and a
/// client that verifies the server's identity before fetching from it.
#[derive(Parser, Debug)]
#[command(name = "courseable")]
#[command(version)]
#[command(about = "Development-mode course API server and client", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the course API server in the foreground
    Serve(commands::ServeArgs),

    /// Connect to a server and fetch the course summary list
    Summaries(commands::SummariesArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    // Load configuration
    let config = Config::load()?;

    // Execute command
    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Summaries(args) => commands::summaries::execute(args, config, cli.format).await,
    }
}
