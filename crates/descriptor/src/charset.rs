//! Text encodings a descriptor can be written in.

use std::fmt;
use std::str::FromStr;

use crate::error::DescriptorError;

/// Replacement byte for characters the charset cannot represent.
const REPLACEMENT: u8 = b'?';

/// Resolved host charset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
	Utf8,
	UsAscii,
	Latin1,
	Utf16Be,
	Utf16Le,
	/// Big-endian with a leading byte-order mark.
	Utf16,
}

impl Charset {
	/// Resolves a charset name, ignoring case and treating `_` like `-`.
	pub fn for_name(name: &str) -> Result<Self, DescriptorError> {
		let normalized = name.trim().to_ascii_uppercase().replace('_', "-");
		let charset = match normalized.as_str() {
			"UTF-8" | "UTF8" => Self::Utf8,
			"US-ASCII" | "ASCII" => Self::UsAscii,
			"ISO-8859-1" | "ISO8859-1" | "LATIN1" => Self::Latin1,
			"UTF-16BE" | "UTF16BE" => Self::Utf16Be,
			"UTF-16LE" | "UTF16LE" => Self::Utf16Le,
			"UTF-16" | "UTF16" => Self::Utf16,
			_ => return Err(DescriptorError::UnsupportedCharset(name.to_string())),
		};
		Ok(charset)
	}

	/// Canonical name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Utf8 => "UTF-8",
			Self::UsAscii => "US-ASCII",
			Self::Latin1 => "ISO-8859-1",
			Self::Utf16Be => "UTF-16BE",
			Self::Utf16Le => "UTF-16LE",
			Self::Utf16 => "UTF-16",
		}
	}

	/// Encodes `text`, replacing unmappable characters with `?`.
	pub fn encode(self, text: &str) -> Vec<u8> {
		match self {
			Self::Utf8 => text.as_bytes().to_vec(),
			Self::UsAscii => encode_single_byte(text, 0x80),
			Self::Latin1 => encode_single_byte(text, 0x100),
			Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
			Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
			Self::Utf16 => [0xFE, 0xFF]
				.into_iter()
				.chain(text.encode_utf16().flat_map(u16::to_be_bytes))
				.collect(),
		}
	}
}

fn encode_single_byte(text: &str, limit: u32) -> Vec<u8> {
	text.chars()
		.map(|c| {
			let code = u32::from(c);
			if code < limit { code as u8 } else { REPLACEMENT }
		})
		.collect()
}

impl FromStr for Charset {
	type Err = DescriptorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::for_name(s)
	}
}

impl fmt::Display for Charset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
