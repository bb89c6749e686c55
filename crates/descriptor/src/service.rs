//! Descriptor generation for one annotated declaration.

use gpdgen_common::{PLUGIN_ANNOTATION, PLUGIN_INTERFACE, PluginId};
use tracing::{debug, error, info};

use crate::charset::Charset;
use crate::config::GeneratorConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::model::{Declaration, IdentityAnnotation};
use crate::writer::{self, Clock, SystemClock, WrittenDescriptor};

/// Checks one declaration and writes a descriptor for each of its valid ids.
///
/// Bound to a single declaration and consumed by [`process`](Self::process).
pub struct DescriptorService<'a> {
	declaration: &'a Declaration,
	config: &'a GeneratorConfig,
	clock: &'a dyn Clock,
}

impl<'a> DescriptorService<'a> {
	pub fn new(declaration: &'a Declaration, config: &'a GeneratorConfig) -> Self {
		Self {
			declaration,
			config,
			clock: &SystemClock,
		}
	}

	pub fn with_clock(mut self, clock: &'a dyn Clock) -> Self {
		self.clock = clock;
		self
	}

	/// Runs the eligibility checks, then handles every identity annotation in
	/// declaration order.
	///
	/// Problems with the declaration or an id are reported to `sink` and skip
	/// only what they concern. A write failure is reported to `sink` as fatal
	/// and returned; no further annotation is handled.
	pub fn process(self, sink: &mut dyn DiagnosticSink) -> Result<Vec<WrittenDescriptor>> {
		let mut written = Vec::new();
		if !self.check_eligibility(sink) {
			debug!(declaration = %self.declaration.name, "skipping ineligible plugin declaration");
			return Ok(written);
		}

		for annotation in &self.declaration.annotations {
			let Some(plugin_id) = self.plugin_id(annotation, sink) else {
				continue;
			};
			match self.write(&plugin_id) {
				Ok(descriptor) => {
					info!(
						plugin_id = %descriptor.plugin_id,
						path = %descriptor.path.display(),
						"wrote plugin descriptor"
					);
					written.push(descriptor);
				}
				Err(err) => {
					error!(plugin_id = %plugin_id, error = %err, "aborting descriptor generation");
					sink.add_fatal_error(
						format!("failed to write the plugin descriptor for '{plugin_id}'"),
						&err,
					);
					return Err(err);
				}
			}
		}
		Ok(written)
	}

	/// Reports every violated rule, not just the first.
	fn check_eligibility(&self, sink: &mut dyn DiagnosticSink) -> bool {
		let declaration = self.declaration;
		let position = declaration.report_position();
		let mut eligible = true;

		if !declaration.is_public() {
			sink.add_error(
				format!(
					"Illegal annotation location: Only public implementations may be annotated with @{PLUGIN_ANNOTATION}"
				),
				position,
			);
			eligible = false;
		}

		if !declaration.is_concrete() {
			sink.add_error(
				format!(
					"Illegal annotation location: Only non-abstract classes may be annotated with @{PLUGIN_ANNOTATION}!"
				),
				position,
			);
			eligible = false;
		}

		if !declaration.implements(PLUGIN_INTERFACE) {
			sink.add_error(
				format!(
					"Illegal annotation location: Only subtypes of {PLUGIN_INTERFACE} may be annotated with @{PLUGIN_ANNOTATION}!"
				),
				position,
			);
			eligible = false;
		}

		eligible
	}

	fn plugin_id(&self, annotation: &IdentityAnnotation, sink: &mut dyn DiagnosticSink) -> Option<PluginId> {
		let Some(raw) = annotation.value.as_deref() else {
			sink.add_error(
				format!("annotation @{PLUGIN_ANNOTATION} is missing a default value for the element 'value'"),
				annotation.position,
			);
			return None;
		};

		match PluginId::parse(trim_control(raw)) {
			Ok(plugin_id) => {
				debug!(declaration = %self.declaration.name, plugin_id = %plugin_id, "accepted plugin id");
				Some(plugin_id)
			}
			Err(invalid) => {
				sink.add_error(invalid.to_string(), annotation.position);
				None
			}
		}
	}

	fn write(&self, plugin_id: &PluginId) -> Result<WrittenDescriptor> {
		let charset = Charset::for_name(&self.config.source_encoding)?;
		let content = writer::render(&self.config.generator, self.clock.now(), &self.declaration.name);
		let path = writer::write_descriptor(&self.config.descriptor_dir(), plugin_id, &content, charset)?;
		Ok(WrittenDescriptor {
			plugin_id: plugin_id.clone(),
			implementation_class: self.declaration.name.clone(),
			path,
		})
	}
}

/// Strips leading and trailing characters up to and including U+0020.
/// Unicode spaces such as U+00A0 are kept.
fn trim_control(raw: &str) -> &str {
	raw.trim_matches(|c: char| c <= ' ')
}

#[cfg(test)]
mod tests;
