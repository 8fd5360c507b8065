//! Gaze Insight CLI
//!
//! One-shot command-line interface for the analysis pipeline: reads a gaze
//! recording from a file or stdin and prints the analysis JSON. Analysis
//! failures are part of the output contract and exit 0; only I/O problems
//! (unreadable file, broken stdin) exit non-zero.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gaze_insight_application::AnalysisService;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gaze-insight")]
#[command(author, version, about = "Gaze-tracking attention analyzer")]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a gaze recording and print the attention report as JSON
    #[command(alias = "a")]
    Analyze {
        /// CSV file with gaze samples; reads stdin when omitted
        file: Option<PathBuf>,

        /// Emit compact single-line JSON instead of pretty output
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze { file, compact } => analyze(file.as_deref(), compact),
    }
}

fn analyze(file: Option<&Path>, compact: bool) -> Result<()> {
    let input = read_recording(file)?;

    let outcome = AnalysisService::new().analyze(&input);
    let rendered = if compact {
        serde_json::to_string(&outcome)?
    } else {
        serde_json::to_string_pretty(&outcome)?
    };
    println!("{rendered}");

    Ok(())
}

fn read_recording(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "warn" })
        });

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
