//! TOML manifests describing the resolved declarations of a compilation unit.
//!
//! A manifest stands in for the compiler's declaration model: it lists the
//! type declarations of one unit with everything the generator needs, already
//! resolved. Unknown keys are rejected.
//!
//! ```toml
//! [[declaration]]
//! name = "com.example.GreetingPlugin"
//! visibility = "public"
//! kind = "class"
//! implements = ["org.gradle.api.Plugin"]
//! position = { line = 4, column = 1 }
//!
//! [[declaration.annotation]]
//! value = "com.example.greeting"
//! position = { line = 3, column = 1 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use gpdgen_descriptor::Declaration;
use serde::Deserialize;
use thiserror::Error;

/// Errors loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
	/// Error reading a manifest file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the manifest.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A manifest is not valid TOML or does not match the declaration schema.
	#[error("invalid manifest {path}: {error}")]
	Parse {
		/// Path to the manifest.
		path: PathBuf,
		/// The TOML deserialization error.
		error: toml::de::Error,
	},
}

/// Declarations of one compilation unit, in source order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
	#[serde(default, rename = "declaration")]
	pub declarations: Vec<Declaration>,
}

impl Manifest {
	pub fn parse(input: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(input)
	}

	pub fn load(path: &Path) -> Result<Self, ManifestError> {
		let input = fs::read_to_string(path).map_err(|error| ManifestError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&input).map_err(|error| ManifestError::Parse {
			path: path.to_path_buf(),
			error,
		})
	}
}
