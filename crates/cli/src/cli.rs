use std::path::PathBuf;

use clap::Parser;
use gpdgen_descriptor::{GeneratorConfig, GeneratorLabel};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "gpdgen")]
#[command(about = "Writes Gradle plugin descriptors for @GradlePlugin annotated classes")]
#[command(version)]
pub struct Cli {
	/// Compilation unit manifests, processed in order
	#[arg(required = true, value_name = "MANIFEST")]
	pub manifests: Vec<PathBuf>,

	/// Compiler output directory receiving META-INF/gradle-plugins
	#[arg(long, short = 'o', value_name = "DIR")]
	pub output_dir: PathBuf,

	/// Charset the descriptors are written in
	#[arg(long, short = 'e', default_value = gpdgen_descriptor::config::DEFAULT_ENCODING)]
	pub encoding: String,

	/// Generator name written into the descriptor banner
	#[arg(long, value_name = "LABEL")]
	pub generator: Option<String>,

	/// Leave the version out of the descriptor banner
	#[arg(long)]
	pub no_version: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	pub fn generator_config(&self) -> GeneratorConfig {
		let mut label = match &self.generator {
			Some(name) => GeneratorLabel::new(name).with_version(env!("CARGO_PKG_VERSION")),
			None => GeneratorLabel::default(),
		};
		if self.no_version {
			label = label.without_version();
		}
		GeneratorConfig::new(&self.output_dir)
			.with_encoding(&self.encoding)
			.with_generator(label)
	}
}
