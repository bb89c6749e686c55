//! Resolved declaration snapshots handed over by the front-end.
//!
//! Nothing here parses source code. The front-end (a compiler integration or
//! the `gpdgen` manifest loader) fills these in, including the transitively
//! resolved set of implemented interfaces.

use serde::Deserialize;

/// 1-based position in a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcePosition {
	pub line: u32,
	pub column: u32,
}

impl SourcePosition {
	pub const fn new(line: u32, column: u32) -> Self {
		Self { line, column }
	}
}

/// Access modifier of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
	Public,
	Protected,
	/// No modifier.
	#[default]
	Package,
	Private,
}

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
	#[default]
	Class,
	Interface,
	Enum,
}

/// One occurrence of the `@GradlePlugin` marker on a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityAnnotation {
	/// Raw text of the `value` element, untrimmed. `None` if the element is missing.
	#[serde(default)]
	pub value: Option<String>,
	#[serde(default)]
	pub position: SourcePosition,
}

impl IdentityAnnotation {
	/// Annotation carrying `value`.
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: Some(value.into()),
			position: SourcePosition::default(),
		}
	}

	/// Annotation without a `value` element.
	pub fn missing_value() -> Self {
		Self::default()
	}

	pub fn at(mut self, line: u32, column: u32) -> Self {
		self.position = SourcePosition::new(line, column);
		self
	}
}

/// A type declaration of the compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
	/// Fully-qualified name, e.g. `com.example.GreetingPlugin`.
	pub name: String,
	#[serde(default)]
	pub visibility: Visibility,
	#[serde(default)]
	pub kind: DeclarationKind,
	#[serde(default, rename = "abstract")]
	pub is_abstract: bool,
	/// Fully-qualified names of all implemented interfaces, inherited ones included.
	#[serde(default)]
	pub implements: Vec<String>,
	/// Fully-qualified name of the enclosing declaration, if nested.
	#[serde(default)]
	pub enclosing: Option<String>,
	/// Identity annotations in declaration order.
	#[serde(default, rename = "annotation")]
	pub annotations: Vec<IdentityAnnotation>,
	#[serde(default)]
	pub position: SourcePosition,
}

impl Declaration {
	/// A package-private, concrete class with no interfaces and no annotations.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	pub fn with_visibility(mut self, visibility: Visibility) -> Self {
		self.visibility = visibility;
		self
	}

	pub fn with_kind(mut self, kind: DeclarationKind) -> Self {
		self.kind = kind;
		self
	}

	pub fn with_abstract(mut self, is_abstract: bool) -> Self {
		self.is_abstract = is_abstract;
		self
	}

	pub fn implementing(mut self, interface: impl Into<String>) -> Self {
		self.implements.push(interface.into());
		self
	}

	pub fn nested_in(mut self, enclosing: impl Into<String>) -> Self {
		self.enclosing = Some(enclosing.into());
		self
	}

	pub fn annotated(mut self, annotation: IdentityAnnotation) -> Self {
		self.annotations.push(annotation);
		self
	}

	pub fn at(mut self, line: u32, column: u32) -> Self {
		self.position = SourcePosition::new(line, column);
		self
	}

	pub fn is_public(&self) -> bool {
		self.visibility == Visibility::Public
	}

	/// `false` for abstract classes, interfaces and enums.
	pub fn is_concrete(&self) -> bool {
		!self.is_abstract && self.kind == DeclarationKind::Class
	}

	pub fn implements(&self, interface: &str) -> bool {
		self.implements.iter().any(|name| name == interface)
	}

	pub fn is_nested(&self) -> bool {
		self.enclosing.is_some()
	}

	/// Where declaration-level diagnostics are reported: the first identity
	/// annotation, or the declaration itself if it carries none.
	pub fn report_position(&self) -> SourcePosition {
		self.annotations
			.first()
			.map_or(self.position, |annotation| annotation.position)
	}
}
