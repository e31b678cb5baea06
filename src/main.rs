//! codebrief binary — thin CLI shell over the [`codebrief`] library crate.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use codebrief::report::{summarize_records, write_report};
use codebrief::scan::scan_dir;
use codebrief::summarize::{OpenAiSummarizer, StaticSummarizer, Summarizer};

// ---------------------------------------------------------------------------
// CLI definition (clap derive)
// ---------------------------------------------------------------------------

/// Heuristic codebase summarizer — splits source files into function/class
/// blocks and summarizes each with an LLM.
#[derive(Parser)]
#[command(name = "codebrief", version, about, long_about = None)]
struct Cli {
    /// Directory containing the source files to summarize
    input: PathBuf,

    /// Output path for the JSON report
    #[arg(long, default_value = "output/summary.json")]
    out: PathBuf,

    /// Chat model name (overrides .codebrief.toml)
    #[arg(long)]
    model: Option<String>,

    /// OpenAI-compatible API base URL (overrides .codebrief.toml)
    #[arg(long)]
    base_url: Option<String>,

    /// Extract blocks and write the report with sentinel summaries, no network
    #[arg(long)]
    dry_run: bool,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("codebrief=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = codebrief::load_config(&cli.input);
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    // Fail fast on missing credentials before any file is read.
    let summarizer: Box<dyn Summarizer> = if cli.dry_run {
        Box::new(StaticSummarizer::new())
    } else {
        Box::new(OpenAiSummarizer::new(&config)?)
    };

    info!(dir = %cli.input.display(), "Starting codebase summarization");
    let records = scan_dir(&cli.input)?;
    if records.is_empty() {
        info!(dir = %cli.input.display(), "No recognized source files found");
    }

    let reports = summarize_records(records, summarizer.as_ref()).await;
    write_report(&cli.out, &reports)?;

    Ok(())
}
