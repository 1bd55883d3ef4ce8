//! Entry point for the Menagerie taxonomy demo.
//!
//! Builds the sample group (Cow, Cat, Lion, Rabbit) from the feeding factory
//! and the leaf constructors, then prints the report selected by the
//! environment.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing, `RUST_LOG`, default `info`)
//! 2. Load configuration from the environment
//! 3. Build the sample group
//! 4. Write the report to stdout

mod config;
mod error;
mod report;
mod sample;

use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;
use crate::report::write_report;
use crate::sample::build_sample;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the sample roster
/// names an unknown feeding category, or stdout cannot be written.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("menagerie starting");

    let config = CliConfig::from_env()?;
    info!(
        report = ?config.report,
        group_name = config.group_name,
        "configuration loaded"
    );

    let group = build_sample(&config.group_name)?;
    info!(
        children = group.len(),
        leaves = group.leaf_count(),
        "sample group built"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(config.report, group, &mut out)?;
    out.flush()?;

    Ok(())
}
