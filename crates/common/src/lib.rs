//! Shared vocabulary of the Gradle plugin descriptor generators.
//!
//! Holds the plugin id grammar ([`is_valid`], [`PluginId`]) and the names the
//! platform fixes at build time: the identity annotation a plugin class is
//! marked with and the capability contract it must implement.

/// Plugin id grammar and the validated id newtype.
pub mod plugin_id;

pub use plugin_id::{InvalidPluginId, PluginId, is_valid};

/// Simple name of the repeatable identity annotation, as written in source.
pub const PLUGIN_ANNOTATION: &str = "GradlePlugin";

/// Interface every annotated class must implement to be a Gradle plugin.
pub const PLUGIN_INTERFACE: &str = "org.gradle.api.Plugin";

/// Directory below the output root that receives the descriptor files.
pub const DESCRIPTOR_DIR: &str = "META-INF/gradle-plugins";

/// File extension of a descriptor, without the leading dot.
pub const DESCRIPTOR_EXTENSION: &str = "properties";
