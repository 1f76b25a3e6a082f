//! Output rendering and delivery shared by the commands

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Input/output arguments common to every command
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Bookmarks export (HTML) to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write (default: stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Json, env = "BOOKMARKS_FORMAT")]
    pub format: OutputFormat,

    /// Single-line JSON instead of 2-space indented
    #[arg(long)]
    pub compact: bool,
}

/// Serialize `value` in the requested format. `pretty` only affects JSON.
pub fn render<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, OutputError> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}

/// Read the input document
pub async fn read_input(args: &OutputArgs) -> Result<String> {
    tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read file: {}", args.input.display()))
}

/// Write rendered output to the output file, or stdout when none was given
pub async fn write_output(args: &OutputArgs, rendered: &str) -> Result<()> {
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = rendered.len(), "output written");
            println!("Finish writing to {}", path.display());
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(rendered.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}
