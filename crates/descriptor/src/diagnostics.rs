//! Diagnostic sink of a compilation unit.
//!
//! The host owns the sink and reads it after the pass. Recoverable entries
//! never change control flow; a fatal entry is always paired with a
//! [`DescriptorError`] returned to the caller.

use std::fmt;

use crate::error::DescriptorError;
use crate::model::SourcePosition;

/// Whether a diagnostic lets the pass continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
	Recoverable,
	Fatal,
}

/// A reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	pub severity: Severity,
	pub message: String,
	/// Source location; fatal diagnostics have none.
	pub position: Option<SourcePosition>,
}

impl Diagnostic {
	pub fn is_fatal(&self) -> bool {
		self.severity == Severity::Fatal
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match (self.severity, self.position) {
			(Severity::Fatal, _) => write!(f, "fatal: {}", self.message),
			(Severity::Recoverable, Some(pos)) => {
				write!(f, "{}:{}: error: {}", pos.line, pos.column, self.message)
			}
			(Severity::Recoverable, None) => write!(f, "error: {}", self.message),
		}
	}
}

/// Receives the diagnostics of a pass.
pub trait DiagnosticSink {
	/// Records a recoverable problem at `position`; processing continues.
	fn add_error(&mut self, message: String, position: SourcePosition);

	/// Records the failure that aborts the pass.
	fn add_fatal_error(&mut self, message: String, cause: &DescriptorError);
}

/// Append-only diagnostic collector.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
	entries: Vec<Diagnostic>,
}

impl Diagnostics {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Recoverable diagnostics in report order.
	pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
		self.entries.iter().filter(|d| !d.is_fatal())
	}

	pub fn fatal(&self) -> Option<&Diagnostic> {
		self.entries.iter().find(|d| d.is_fatal())
	}

	pub fn has_fatal(&self) -> bool {
		self.fatal().is_some()
	}

	pub fn into_vec(self) -> Vec<Diagnostic> {
		self.entries
	}
}

impl DiagnosticSink for Diagnostics {
	fn add_error(&mut self, message: String, position: SourcePosition) {
		self.entries.push(Diagnostic {
			severity: Severity::Recoverable,
			message,
			position: Some(position),
		});
	}

	fn add_fatal_error(&mut self, message: String, cause: &DescriptorError) {
		self.entries.push(Diagnostic {
			severity: Severity::Fatal,
			message: format!("{message}: {cause}"),
			position: None,
		});
	}
}

impl<'a> IntoIterator for &'a Diagnostics {
	type Item = &'a Diagnostic;
	type IntoIter = std::slice::Iter<'a, Diagnostic>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn renders_position_and_severity() {
		let mut diagnostics = Diagnostics::new();
		diagnostics.add_error("bad id".into(), SourcePosition::new(3, 5));
		diagnostics.add_fatal_error(
			"failed to write the plugin descriptor for 'a.b'".into(),
			&DescriptorError::UnsupportedCharset("EBCDIC".into()),
		);

		let rendered: Vec<String> = diagnostics.iter().map(ToString::to_string).collect();
		assert_eq!(
			rendered,
			[
				"3:5: error: bad id",
				"fatal: failed to write the plugin descriptor for 'a.b': unsupported source encoding 'EBCDIC'",
			]
		);
	}

	#[test]
	fn splits_recoverable_from_fatal() {
		let mut diagnostics = Diagnostics::new();
		assert!(diagnostics.is_empty());
		assert!(!diagnostics.has_fatal());

		diagnostics.add_error("one".into(), SourcePosition::new(1, 1));
		diagnostics.add_error("two".into(), SourcePosition::new(2, 1));
		assert_eq!(diagnostics.errors().count(), 2);
		assert!(diagnostics.fatal().is_none());

		diagnostics.add_fatal_error("boom".into(), &DescriptorError::UnsupportedCharset("x".into()));
		assert_eq!(diagnostics.len(), 3);
		assert_eq!(diagnostics.errors().count(), 2);
		assert!(diagnostics.has_fatal());
	}
}
