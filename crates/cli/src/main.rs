//! gpdgen binary.
//!
//! Loads one manifest per compilation unit, runs a descriptor generation pass
//! over each and prints the diagnostics as `<manifest>:<line>:<column>: error: <message>`.
//! Exits non-zero if any diagnostic was reported. A fatal error stops the
//! remaining units.

mod cli;
mod manifest;
mod run;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use gpdgen_descriptor::ScanDriver;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	let default_level = if cli.verbose { "debug" } else { "info" };
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
		.with_writer(std::io::stderr)
		.init();

	let config = cli.generator_config();
	debug!(
		output = %config.output_root.display(),
		encoding = %config.source_encoding,
		generator = %config.generator,
		"descriptor generation configured"
	);

	let driver = ScanDriver::new(&config);
	let summary = run::run_units(&driver, &cli.manifests, &mut std::io::stderr())?;

	info!(
		units = summary.units,
		descriptors = summary.descriptors,
		diagnostics = summary.diagnostics,
		aborted = summary.aborted,
		"descriptor generation finished"
	);
	Ok(if summary.is_clean() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
