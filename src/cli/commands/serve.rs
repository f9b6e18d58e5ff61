//! Serve command - run the course API server

use crate::cli::output;
use crate::core::config::Config;
use crate::server::{self, Server};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (overrides configuration)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,

    /// Path to the course source records (overrides configuration)
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}

/// Execute the serve command
///
/// Probes the configured port first: if a course API server is already
/// answering there, this is a no-op; if something else holds the port,
/// startup is refused.
pub async fn execute(args: ServeArgs, mut config: Config) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(data_file) = args.data_file {
        config.server.data_file = data_file;
    }
    config.log_config();

    if server::already_running(&config).await? {
        output::print_success(&format!(
            "Course API server already running on port {}",
            config.server.port
        ));
        return Ok(());
    }

    let running = Server::new(config).bind().await?;
    output::print_success(&format!("Course API server listening on {}", running.addr()));
    running.serve().await?;

    Ok(())
}
