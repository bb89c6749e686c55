use std::fs;

use chrono::{DateTime, FixedOffset, TimeZone};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

use super::DescriptorService;
use crate::config::{GeneratorConfig, GeneratorLabel};
use crate::diagnostics::{Diagnostics, Severity};
use crate::error::DescriptorError;
use crate::model::{Declaration, DeclarationKind, IdentityAnnotation, SourcePosition, Visibility};
use crate::writer::Clock;

struct FixedClock;

impl Clock for FixedClock {
	fn now(&self) -> DateTime<FixedOffset> {
		FixedOffset::east_opt(0)
			.unwrap()
			.with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
			.unwrap()
	}
}

fn plugin(name: &str) -> Declaration {
	Declaration::new(name)
		.with_visibility(Visibility::Public)
		.implementing("org.gradle.api.Plugin")
}

fn setup() -> (TempDir, GeneratorConfig) {
	let root = tempfile::tempdir().unwrap();
	let config = GeneratorConfig::new(root.path()).with_generator(GeneratorLabel::new("gpdgen"));
	(root, config)
}

fn messages(diagnostics: &Diagnostics) -> Vec<&str> {
	diagnostics.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn writes_descriptor_for_valid_plugin() {
	let (root, config) = setup();
	let declaration = plugin("com.example.GreetingPlugin").annotated(IdentityAnnotation::new("com.example.greeting"));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config)
		.with_clock(&FixedClock)
		.process(&mut diagnostics)
		.unwrap();

	assert!(diagnostics.is_empty());
	assert_eq!(written.len(), 1);
	let path = root.path().join("META-INF/gradle-plugins/com.example.greeting.properties");
	assert_eq!(written[0].path, path);
	assert_eq!(
		fs::read_to_string(path).unwrap(),
		"# Generated by gpdgen\n\
		 # Generated on 2026-01-02T03:04:05.000+00:00\n\
		 implementation-class = com.example.GreetingPlugin\n"
	);
}

#[test]
fn trims_value_before_validation() {
	let (root, config) = setup();
	let declaration = plugin("a.Plugin").annotated(IdentityAnnotation::new("  a.b\t"));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap();

	assert!(diagnostics.is_empty());
	assert_eq!(written[0].plugin_id.as_str(), "a.b");
	assert!(root.path().join("META-INF/gradle-plugins/a.b.properties").is_file());
}

#[rstest]
#[case::not_public(
	plugin("a.P").with_visibility(Visibility::Package),
	"Illegal annotation location: Only public implementations may be annotated with @GradlePlugin"
)]
#[case::abstract_class(
	plugin("a.P").with_abstract(true),
	"Illegal annotation location: Only non-abstract classes may be annotated with @GradlePlugin!"
)]
#[case::interface(
	plugin("a.P").with_kind(DeclarationKind::Interface),
	"Illegal annotation location: Only non-abstract classes may be annotated with @GradlePlugin!"
)]
#[case::enumeration(
	plugin("a.P").with_kind(DeclarationKind::Enum),
	"Illegal annotation location: Only non-abstract classes may be annotated with @GradlePlugin!"
)]
#[case::no_contract(
	Declaration::new("a.P").with_visibility(Visibility::Public),
	"Illegal annotation location: Only subtypes of org.gradle.api.Plugin may be annotated with @GradlePlugin!"
)]
fn single_eligibility_violation(#[case] declaration: Declaration, #[case] expected: &str) {
	let (root, config) = setup();
	let declaration = declaration
		.annotated(IdentityAnnotation::new("a.b").at(4, 1))
		.annotated(IdentityAnnotation::new("c.d").at(5, 1));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap();

	assert!(written.is_empty());
	assert_eq!(messages(&diagnostics), [expected]);
	let diagnostic = diagnostics.iter().next().unwrap();
	assert_eq!(diagnostic.severity, Severity::Recoverable);
	assert_eq!(diagnostic.position, Some(SourcePosition::new(4, 1)));
	assert!(!root.path().join("META-INF").exists());
}

#[test]
fn reports_every_eligibility_violation() {
	let (_root, config) = setup();
	let declaration = Declaration::new("a.P")
		.with_visibility(Visibility::Private)
		.with_abstract(true)
		.annotated(IdentityAnnotation::new("a.b"));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap();

	assert!(written.is_empty());
	assert_eq!(diagnostics.errors().count(), 3);
	assert!(!diagnostics.has_fatal());
}

#[test]
fn invalid_annotation_does_not_block_siblings() {
	let (root, config) = setup();
	let declaration = plugin("a.P")
		.annotated(IdentityAnnotation::new("A.B").at(2, 1))
		.annotated(IdentityAnnotation::missing_value().at(3, 1))
		.annotated(IdentityAnnotation::new("a.b").at(4, 1));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap();

	assert_eq!(written.len(), 1);
	assert_eq!(written[0].plugin_id.as_str(), "a.b");
	assert_eq!(
		messages(&diagnostics),
		[
			"the plugin id 'A.B' is not a valid Gradle plugin id",
			"annotation @GradlePlugin is missing a default value for the element 'value'",
		]
	);
	let positions: Vec<_> = diagnostics.iter().map(|d| d.position).collect();
	assert_eq!(
		positions,
		[Some(SourcePosition::new(2, 1)), Some(SourcePosition::new(3, 1))]
	);
	let dir = root.path().join("META-INF/gradle-plugins");
	assert_eq!(fs::read_dir(dir).unwrap().count(), 1);
}

#[test]
fn unsupported_encoding_is_fatal() {
	let (_root, config) = setup();
	let config = config.with_encoding("EBCDIC");
	let declaration = plugin("a.P")
		.annotated(IdentityAnnotation::new("a.b"))
		.annotated(IdentityAnnotation::new("c.d"));
	let mut diagnostics = Diagnostics::new();

	let err = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap_err();

	assert!(matches!(err, DescriptorError::UnsupportedCharset(_)));
	assert_eq!(diagnostics.len(), 1);
	let fatal = diagnostics.fatal().unwrap();
	assert_eq!(
		fatal.message,
		"failed to write the plugin descriptor for 'a.b': unsupported source encoding 'EBCDIC'"
	);
}

#[test]
fn unsupported_encoding_is_irrelevant_without_valid_ids() {
	let (_root, config) = setup();
	let config = config.with_encoding("EBCDIC");
	let declaration = plugin("a.P").annotated(IdentityAnnotation::new("nope"));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap();

	assert!(written.is_empty());
	assert_eq!(diagnostics.errors().count(), 1);
	assert!(!diagnostics.has_fatal());
}

#[test]
fn trims_control_characters_but_not_unicode_spaces() {
	let (root, config) = setup();
	let declaration = plugin("a.P")
		.annotated(IdentityAnnotation::new("\u{1}a.b\u{1f}").at(2, 1))
		.annotated(IdentityAnnotation::new("c.d\u{a0}").at(3, 1));
	let mut diagnostics = Diagnostics::new();

	let written = DescriptorService::new(&declaration, &config).process(&mut diagnostics).unwrap();

	let ids: Vec<&str> = written.iter().map(|w| w.plugin_id.as_str()).collect();
	assert_eq!(ids, ["a.b"]);
	assert_eq!(
		messages(&diagnostics),
		["the plugin id 'c.d\u{a0}' is not a valid Gradle plugin id"]
	);
	assert_eq!(
		diagnostics.iter().next().unwrap().position,
		Some(SourcePosition::new(3, 1))
	);
	assert!(!root.path().join("META-INF/gradle-plugins/c.d.properties").exists());
}
