//! # evcheck entry point
//!
//! Parses command-line arguments, checks the input directories, and runs
//! the pipeline: load schemas → validate every event document → prune the
//! result → render and write the report.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use evcheck_cli::paths::check_directories;
use evcheck_core::write_report;
use evcheck_schema::{run_batch, SchemaRegistry};

/// Batch-validates a directory of JSON event documents against a
/// directory of Draft 7 JSON schemas, selecting the schema per document
/// by its `event` key, and writes a human-readable text report.
#[derive(Parser, Debug)]
#[command(name = "evcheck", version, about, long_about = None)]
struct Cli {
    /// Directory containing JSON Schema files (filename stem = schema name).
    #[arg(long, default_value = "schema")]
    schemas: PathBuf,

    /// Directory containing event documents to validate.
    #[arg(long, default_value = "event")]
    events: PathBuf,

    /// Output path for the report; overwritten on each run.
    #[arg(long, default_value = "report.txt")]
    report: PathBuf,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over the verbosity flag when set.
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The run always completes and writes a report when the inputs are
/// readable, even if every schema and every document fails validation;
/// only operational errors surface here.
fn run(cli: &Cli) -> anyhow::Result<()> {
    check_directories(&cli.schemas, &cli.events)
        .context("input directories must exist before validation starts")?;

    let registry = SchemaRegistry::load(&cli.schemas)
        .with_context(|| format!("failed to read schema directory {}", cli.schemas.display()))?;

    let report = run_batch(&cli.events, &registry)
        .with_context(|| format!("failed to read event directory {}", cli.events.display()))?
        .pruned();

    let lines = report.render(Utc::now());
    write_report(&cli.report, &lines)
        .with_context(|| format!("failed to write report to {}", cli.report.display()))?;

    tracing::info!(report = %cli.report.display(), "report written");
    Ok(())
}
