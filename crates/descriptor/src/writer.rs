//! Descriptor rendering and persistence.
//!
//! A descriptor is rendered in memory, encoded, written to a temporary file
//! next to its target and renamed over `<id>.properties`. A failed write
//! leaves no truncated descriptor behind, and an existing descriptor with the
//! same id is replaced.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use gpdgen_common::PluginId;
use tempfile::NamedTempFile;

use crate::charset::Charset;
use crate::config::GeneratorLabel;
use crate::error::{DescriptorError, Result};

/// Source of the `# Generated on` timestamp.
pub trait Clock {
	fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<FixedOffset> {
		Local::now().fixed_offset()
	}
}

/// A descriptor that has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDescriptor {
	pub plugin_id: PluginId,
	pub implementation_class: String,
	pub path: PathBuf,
}

/// Renders the three descriptor lines.
pub fn render(
	generator: &GeneratorLabel,
	generated_on: DateTime<FixedOffset>,
	implementation_class: &str,
) -> String {
	format!(
		"# Generated by {generator}\n# Generated on {}\nimplementation-class = {implementation_class}\n",
		generated_on.to_rfc3339_opts(SecondsFormat::Millis, false)
	)
}

/// Writes `content` as `<dir>/<id>.properties`, creating `dir` if needed.
pub fn write_descriptor(dir: &Path, plugin_id: &PluginId, content: &str, charset: Charset) -> Result<PathBuf> {
	fs::create_dir_all(dir).map_err(|error| DescriptorError::CreateDir {
		path: dir.to_path_buf(),
		error,
	})?;

	let path = dir.join(plugin_id.file_name());
	match persist(dir, &path, &charset.encode(content)) {
		Ok(()) => Ok(path),
		Err(error) => Err(DescriptorError::Write { path, error }),
	}
}

fn persist(dir: &Path, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
	let mut file = NamedTempFile::new_in(dir)?;
	file.write_all(bytes)?;
	file.flush()?;
	file.as_file().sync_all()?;
	file.persist(path).map_err(|e| e.error)?;
	Ok(())
}
