//! Per-manifest generation loop.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use gpdgen_descriptor::{Diagnostic, Diagnostics, ScanDriver};
use tracing::{debug, warn};

use crate::manifest::Manifest;

/// Totals over the processed manifests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
	/// Manifests whose pass ran, including one that ended fatally.
	pub units: usize,
	pub descriptors: usize,
	pub diagnostics: usize,
	/// A write failure stopped the remaining manifests.
	pub aborted: bool,
}

impl Summary {
	pub fn is_clean(&self) -> bool {
		self.diagnostics == 0
	}
}

/// Runs `driver` over each manifest in order and writes its diagnostics to `out`.
///
/// Manifests that cannot be loaded are errors. A fatal diagnostic stops the
/// loop after it has been printed.
pub fn run_units(driver: &ScanDriver<'_>, manifests: &[PathBuf], out: &mut dyn Write) -> anyhow::Result<Summary> {
	let mut summary = Summary::default();

	for path in manifests {
		let manifest = Manifest::load(path).with_context(|| format!("failed to load {}", path.display()))?;
		let mut diagnostics = Diagnostics::new();
		let outcome = driver.run(&manifest.declarations, &mut diagnostics);
		summary.units += 1;

		for diagnostic in &diagnostics {
			print_diagnostic(out, path, diagnostic)?;
		}
		summary.diagnostics += diagnostics.len();

		match outcome {
			Ok(report) => {
				debug!(
					manifest = %path.display(),
					declarations = report.processed,
					descriptors = report.written.len(),
					"compilation unit done"
				);
				summary.descriptors += report.written.len();
			}
			Err(err) => {
				warn!(manifest = %path.display(), error = %err, "stopping after fatal error");
				summary.aborted = true;
				break;
			}
		}
	}

	Ok(summary)
}

/// `<manifest>:<line>:<column>: error: <message>`, or `<manifest>: <diagnostic>`
/// without a position.
fn print_diagnostic(out: &mut dyn Write, path: &Path, diagnostic: &Diagnostic) -> std::io::Result<()> {
	if diagnostic.position.is_some() && !diagnostic.is_fatal() {
		writeln!(out, "{}:{diagnostic}", path.display())
	} else {
		writeln!(out, "{}: {diagnostic}", path.display())
	}
}
