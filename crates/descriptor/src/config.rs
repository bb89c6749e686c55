//! Host-supplied settings of a generation pass.

use std::fmt;
use std::path::{Path, PathBuf};

use gpdgen_common::DESCRIPTOR_DIR;

/// Encoding used when the host does not configure one.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Generator name used when the host does not configure one.
pub const DEFAULT_GENERATOR: &str = "gpdgen";

/// Name shown in the descriptor banner, with an optional version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorLabel {
	pub name: String,
	pub version: Option<String>,
}

impl GeneratorLabel {
	/// Label without a version.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			version: None,
		}
	}

	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = Some(version.into());
		self
	}

	pub fn without_version(mut self) -> Self {
		self.version = None;
		self
	}
}

impl Default for GeneratorLabel {
	/// [`DEFAULT_GENERATOR`], versioned at build time.
	fn default() -> Self {
		Self::new(DEFAULT_GENERATOR).with_version(env!("CARGO_PKG_VERSION"))
	}
}

impl fmt::Display for GeneratorLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		if let Some(version) = &self.version {
			write!(f, " (version: {version})")?;
		}
		Ok(())
	}
}

/// Settings shared by every declaration of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
	/// Compiler output directory; descriptors go below `META-INF/gradle-plugins`.
	pub output_root: PathBuf,
	/// Charset name the descriptors are encoded with, see [`crate::Charset`].
	pub source_encoding: String,
	pub generator: GeneratorLabel,
}

impl GeneratorConfig {
	pub fn new(output_root: impl Into<PathBuf>) -> Self {
		Self {
			output_root: output_root.into(),
			source_encoding: DEFAULT_ENCODING.to_string(),
			generator: GeneratorLabel::default(),
		}
	}

	pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
		self.source_encoding = encoding.into();
		self
	}

	pub fn with_generator(mut self, generator: GeneratorLabel) -> Self {
		self.generator = generator;
		self
	}

	/// `<output_root>/META-INF/gradle-plugins`
	pub fn descriptor_dir(&self) -> PathBuf {
		self.output_root.join(Path::new(DESCRIPTOR_DIR))
	}
}
