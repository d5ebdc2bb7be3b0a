//! Command-line glue for fibgen.
//!
//! Parses the optional count, initializes logging, and prints the
//! sequence. All validation lives in `fibonacci_rs`; its errors are
//! propagated untouched.

pub mod args;
pub mod output;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use args::{resolve_count, Cli, DEFAULT_COUNT};
pub use output::render;

/// Entry point used by the `fibgen` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let count = cli.count();
    debug!(count, "generating sequence");

    let report = execute(count)?;
    print!("{report}");
    Ok(())
}

/// Generates `count` terms and renders the two-line report.
pub fn execute(count: i64) -> Result<String> {
    let sequence = fibonacci_rs::generate(count)
        .inspect_err(|e| debug!(param = e.name(), error = %e, "generator rejected input"))?;
    debug!(len = sequence.len(), "sequence generated");
    Ok(render(count, &sequence))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // Logs go to stderr; stdout carries only the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
