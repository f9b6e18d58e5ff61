//! Summaries command - fetch the course summary list from a server

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::client::Client;
use crate::core::config::Config;
use clap::Args;
use tokio::sync::oneshot;

/// Arguments for the summaries command
#[derive(Args, Debug)]
pub struct SummariesArgs {
    /// Server port to connect to (overrides configuration)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

/// Execute the summaries command
pub async fn execute(
    args: SummariesArgs,
    mut config: Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let client = Client::new(&config)?;
    client.connected().await?;

    let (tx, rx) = oneshot::channel();
    client.get_summary(move |outcome| {
        let _ = tx.send(outcome);
    });
    let summaries = rx.await?.into_value()?;

    match format {
        OutputFormat::Human => {
            println!(
                "Fetched {} course(s) from {}:\n",
                colors::number(&summaries.len().to_string()),
                colors::dim(&config.base_url())
            );
            for summary in &summaries {
                println!(
                    "{} {}",
                    colors::label(&format!("{} {}", summary.subject, summary.number)),
                    summary.label
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }

    Ok(())
}
