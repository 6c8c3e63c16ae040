//! OKR Board CLI - terminal client for the OKR backend
//!
//! Fetches objectives and key results, normalizes the API's historical
//! response shapes into one canonical board, and renders it.

mod cli;
mod client;
mod commands;
mod display;
mod feed;
mod json_types;
mod watch;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use okr_common::DashboardConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so --json output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = DashboardConfig::load();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    match cli.command {
        Commands::List { filter, json } => commands::list(&config, &filter.to_filter(), json).await,
        Commands::Watch { filter, interval } => {
            commands::watch(&config, &filter.to_filter(), interval).await
        }
    }
}
