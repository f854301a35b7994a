//! Command-line interface for colligo.
//!
//! Walks a repository and writes every non-hidden file into one artifact,
//! each wrapped in BEGIN/END markers.

use clap::Parser;
use colligo::{
    ColligoBuilder, ColligoError, RunSummary, colligo, create_output, default_output_name,
    logging, resolve_root,
};
use std::path::PathBuf;
use std::process::exit;

/// colligo: flatten a repository into a single file
#[derive(Parser)]
#[command(name = "colligo", version, about, long_about = None)]
struct Cli {
    /// Path to the repository to walk
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Output file (default: combined_repo_<os>_<timestamp>.txt)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Logging level: debug, info, warn, error (unknown values mean info)
    #[arg(long)]
    log_level: Option<String>,

    /// Include hidden files and directories
    #[arg(long)]
    hidden: bool,

    /// Visit directory entries sorted by name
    #[arg(long)]
    sort: bool,

    /// Print a JSON run summary to stdout when done
    #[arg(long)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref());

    match run(&cli) {
        Ok(summary) => {
            if cli.summary {
                print_summary(&summary);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<RunSummary, ColligoError> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_output_name()));
    tracing::info!(
        repo = %cli.repo.display(),
        output = %output.display(),
        "starting colligo"
    );

    let root = resolve_root(&cli.repo)?;
    let sink = create_output(&output)?;
    let options = ColligoBuilder::new(root)
        .output(&output)
        .include_hidden(cli.hidden)
        .sort_by_name(cli.sort)
        .build();

    let summary = colligo(&options, sink)?;
    tracing::info!(
        output = %output.display(),
        files = summary.files_written,
        bytes = summary.bytes_copied,
        errors = summary.entry_errors,
        "successfully combined files"
    );
    Ok(summary)
}

fn print_summary(summary: &RunSummary) {
    match serde_json::to_string_pretty(summary) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize summary");
            exit(1);
        }
    }
}
