//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Interactive prompts (API key, city)
//! - Issuing the weather request through `weather-core`
//! - Human-friendly terminal output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod prompt;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never corrupt the interactive UI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
