//! Declaration scan of one compilation unit.

use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::model::Declaration;
use crate::service::DescriptorService;
use crate::writer::{Clock, SystemClock, WrittenDescriptor};

/// Top-level declarations with at least one identity annotation.
pub fn is_candidate(declaration: &Declaration) -> bool {
	!declaration.is_nested() && !declaration.annotations.is_empty()
}

/// Outcome of a completed pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
	/// Candidate declarations handed to the service.
	pub processed: usize,
	/// Descriptors in write order. An id written twice appears twice.
	pub written: Vec<WrittenDescriptor>,
}

/// Feeds the candidate declarations of a unit to [`DescriptorService`].
pub struct ScanDriver<'a> {
	config: &'a GeneratorConfig,
	clock: &'a dyn Clock,
}

impl<'a> ScanDriver<'a> {
	pub fn new(config: &'a GeneratorConfig) -> Self {
		Self {
			config,
			clock: &SystemClock,
		}
	}

	pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
		self.clock = clock;
		self
	}

	/// Processes the candidates among `declarations` in order.
	///
	/// Stops at the first fatal error, which the service has already reported
	/// to `sink`.
	pub fn run(&self, declarations: &[Declaration], sink: &mut dyn DiagnosticSink) -> Result<PassReport> {
		let mut report = PassReport::default();

		for declaration in declarations.iter().filter(|d| is_candidate(d)) {
			debug!(
				declaration = %declaration.name,
				annotations = declaration.annotations.len(),
				"processing plugin declaration"
			);
			let written = DescriptorService::new(declaration, self.config)
				.with_clock(self.clock)
				.process(sink)?;

			for descriptor in written {
				if let Some(previous) = report.written.iter().find(|w| w.plugin_id == descriptor.plugin_id) {
					warn!(
						plugin_id = %descriptor.plugin_id,
						previous = %previous.implementation_class,
						current = %descriptor.implementation_class,
						"plugin descriptor overwritten in the same pass"
					);
				}
				report.written.push(descriptor);
			}
			report.processed += 1;
		}

		Ok(report)
	}
}
