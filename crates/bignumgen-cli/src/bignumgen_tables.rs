//! Digit table and test vector generation CLI
//!
//! Usage: bignumgen_tables [options]
//!
//! Options:
//!   -o, --output <PATH>      Write to a file instead of stdout
//!   -f, --format <FORMAT>    Output format: legacy (default) or jsonl
//!   -s, --section <NAME>     Emit only this section (repeatable)
//!       --harness <NAME>     Class name used in the generated test calls
//!   -v, --verbose / -q, --quiet
//!
//! Example: bignumgen_tables -o generated/tables.txt

use anyhow::{Context, Result};
use bignumgen_tables::{
    DEFAULT_HARNESS, GenerateOptions, OutputFormat, Section, generate,
    generate_to_path,
};
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "bignumgen_tables")]
#[command(author, version, about = "Generate digit tables and test vectors for a decimal bignum engine")]
struct Cli {
    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (legacy, jsonl)
    #[arg(short, long, default_value = "legacy")]
    format: OutputFormat,

    /// Section to emit: add-table, sub-table, mul-table, full-adder, full-subber, mul-test
    #[arg(short, long = "section", value_name = "NAME")]
    sections: Vec<Section>,

    /// Class name prefixed to the generated test calls
    #[arg(long, default_value = DEFAULT_HARNESS)]
    harness: String,

    /// Log section details
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::WARN
    } else if verbose > 0 {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr; stdout carries the generated output.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let options = GenerateOptions::default()
        .with_sections(cli.sections)
        .with_format(cli.format)
        .with_harness(cli.harness);

    let start = Instant::now();

    let summary = match &cli.output {
        Some(path) => generate_to_path(path, &options)
            .with_context(|| format!("failed to write output to {}", path.display()))?,
        None => generate(io::stdout().lock(), &options)
            .context("failed to write output to stdout")?,
    };

    info!(
        sections = summary.sections,
        records = summary.records,
        format = %options.format(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generation finished"
    );
    if let Some(path) = &cli.output {
        info!("output written to {}", path.display());
    }

    Ok(())
}
