//! Gradle plugin id validation.
//!
//! A plugin id is valid when it:
//!
//! - contains only **lower-case** alphanumeric characters, `.` and `-`
//! - contains at least one `.`
//! - does not start or end with `.`
//! - contains no consecutive dots (`..`)
//!
//! All four rules collapse into one: two or more non-empty `[-0-9a-z]`
//! segments joined by single dots.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static PLUGIN_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[-0-9a-z]+\.[-0-9a-z]+(?:\.[-0-9a-z]+)*$").expect("plugin id pattern is valid")
});

/// Returns `true` if `candidate` is a valid Gradle plugin id.
///
/// Absent and empty candidates are never valid.
pub fn is_valid(candidate: Option<&str>) -> bool {
	candidate.is_some_and(|id| PLUGIN_ID_PATTERN.is_match(id))
}

/// A plugin id that has passed [`is_valid`].
///
/// Doubles as the base name of the descriptor file, so it never contains a
/// path separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginId(String);

impl PluginId {
	/// Validates `candidate` as-is (no trimming).
	pub fn parse(candidate: &str) -> Result<Self, InvalidPluginId> {
		if is_valid(Some(candidate)) {
			Ok(Self(candidate.to_owned()))
		} else {
			Err(InvalidPluginId(candidate.to_owned()))
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Descriptor file name for this id, e.g. `com.example.greeting.properties`.
	pub fn file_name(&self) -> String {
		format!("{}.{}", self.0, crate::DESCRIPTOR_EXTENSION)
	}
}

impl fmt::Display for PluginId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for PluginId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl std::str::FromStr for PluginId {
	type Err = InvalidPluginId;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

/// Rejected plugin id candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the plugin id '{0}' is not a valid Gradle plugin id")]
pub struct InvalidPluginId(pub String);
