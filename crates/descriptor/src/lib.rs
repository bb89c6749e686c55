//! Gradle plugin descriptor generation.
//!
//! Runs over the already-resolved declarations of one compilation unit. Every
//! top-level declaration carrying at least one `@GradlePlugin("some.id")`
//! annotation is checked for being a legal plugin implementation, each of its
//! ids is validated, and one descriptor is written per valid id:
//!
//! ```text
//! <output root>/META-INF/gradle-plugins/<id>.properties
//!
//! # Generated by gpdgen (version: 0.1.0)
//! # Generated on 2026-10-16T10:15:30.123+02:00
//! implementation-class = com.example.GreetingPlugin
//! ```
//!
//! # Diagnostics
//!
//! Problems with the user's code are recoverable: they are appended to a
//! [`DiagnosticSink`] and processing continues with the next annotation or
//! declaration. Failing to write a descriptor is fatal: it is reported to the
//! sink once and returned as a [`DescriptorError`], which stops the pass.
//!
//! ```no_run
//! use gpdgen_descriptor::{Declaration, Diagnostics, GeneratorConfig, ScanDriver};
//!
//! # fn load() -> Vec<Declaration> { Vec::new() }
//! let declarations = load();
//! let config = GeneratorConfig::new("build/classes");
//! let mut diagnostics = Diagnostics::new();
//! let report = ScanDriver::new(&config).run(&declarations, &mut diagnostics);
//! for diagnostic in diagnostics.iter() {
//! 	eprintln!("{diagnostic}");
//! }
//! # let _ = report;
//! ```

pub mod charset;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod error;
pub mod model;
pub mod service;
pub mod writer;

pub use charset::Charset;
pub use config::{GeneratorConfig, GeneratorLabel};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, Severity};
pub use driver::{PassReport, ScanDriver, is_candidate};
pub use error::{DescriptorError, Result};
pub use gpdgen_common::{PLUGIN_ANNOTATION, PLUGIN_INTERFACE, PluginId};
pub use model::{Declaration, DeclarationKind, IdentityAnnotation, SourcePosition, Visibility};
pub use service::DescriptorService;
pub use writer::{Clock, SystemClock, WrittenDescriptor};
