//! Algoscrape CLI - Algorand transaction history to CSV

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod logging;
mod output;

use algoscrape_core::Provider;
use commands::{fetch, providers};
use logging::LogFormat;

/// Algoscrape - fetch Algorand transaction history and export it as CSV
#[derive(Parser)]
#[command(name = "algoscrape", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Human, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch transactions for an address and export them
    Fetch {
        /// Indexer to query (algoexplorer, algoscan)
        provider: Provider,
        /// Account address
        address: String,
        /// Maximum number of pages to request (fetches everything if omitted)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        pages: Option<u32>,
        /// CSV file to write
        #[arg(short, long, default_value = "transactions.csv")]
        output: PathBuf,
        /// Fail with an error instead of exporting an empty result
        #[arg(long)]
        strict: bool,
        /// Print records as a table instead of writing the file
        #[arg(long)]
        preview: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported providers and the URLs in use
    Providers {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_format);

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch { provider, address, pages, output, strict, preview, json } => {
            fetch::run(fetch::FetchArgs { provider, address, pages, output, strict, preview, json })
        }
        Commands::Providers { json } => providers::run(json),
    }
}
