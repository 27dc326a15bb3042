//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Running the proxy server
//! - Printing the view controller's output to the terminal

use clap::Parser;

mod cli;
mod terminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    weather_server::init_tracing("warn");

    let cmd = cli::Cli::parse();
    cmd.run().await
}
