//! Courseable entry point
//!
//! Command-line interface for the development-mode course API.
//!
//! # Examples
//!
//! ```bash
//! # Run the server in the foreground
//! courseable serve
//!
//! # Fetch the summary list from a running server
//! courseable summaries
//!
//! # Same, as JSON for scripting
//! courseable summaries --format json
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use courseable::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courseable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
