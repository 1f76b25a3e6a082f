//! bookmarks CLI
//!
//! Converts Netscape-style bookmark exports into JSON records.

use anyhow::Result;
use bookmarks_extract::convert::{run_convert, ConvertArgs};
use bookmarks_extract::extract::{run_extract, ExtractArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookmarks")]
#[command(author = "RoyalBit Inc.")]
#[command(version)]
#[command(about = "Convert browser bookmark exports into structured JSON")]
#[command(long_about = "Repairs the loose markup of bookmark exports and emits one record per link.\n\nCommands:\n  extract   Extract bookmark records (reports when there is nothing to extract)\n  convert   Convert an export to a record list (always writes output)")]
struct Cli {
    /// Debug logging on stderr (overridden by BOOKMARKS_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract bookmark records from an HTML export
    Extract(ExtractArgs),
    /// Convert an HTML export to a record list, empty or not
    Convert(ConvertArgs),
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("BOOKMARKS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Extract(args) => run_extract(args).await,
        Commands::Convert(args) => run_convert(args).await,
    }
}
