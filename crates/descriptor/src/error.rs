//! Fatal errors of a descriptor generation pass.
//!
//! Only environment failures live here. Problems with the annotated code are
//! recoverable diagnostics, see [`crate::diagnostics`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort the remaining descriptor generation of a pass.
#[derive(Debug, Error)]
pub enum DescriptorError {
	/// The descriptor directory could not be created.
	#[error("failed to create directory {path}: {error}")]
	CreateDir {
		/// Directory that could not be created.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A descriptor file could not be written.
	#[error("failed to write {path}: {error}")]
	Write {
		/// Descriptor file that could not be written.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The host-supplied source encoding is not one the writer can produce.
	#[error("unsupported source encoding '{0}'")]
	UnsupportedCharset(String),
}

/// Result type for descriptor generation.
pub type Result<T> = std::result::Result<T, DescriptorError>;
