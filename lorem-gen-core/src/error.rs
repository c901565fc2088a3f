use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing a generator.
///
/// Generation itself never fails: once a `LoremGenerator` exists, every
/// request produces text. Errors only come from loading the word corpus and
/// from validating user-supplied settings.
#[derive(Debug, Error)]
pub enum GeneratorError {
	/// The corpus file could not be read.
	#[error("failed to read word corpus {}: {source}", .path.display())]
	CorpusIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The corpus contains no usable word.
	#[error("word corpus '{0}' contains no words")]
	EmptyCorpus(String),

	/// One or more settings are out of range.
	#[error("invalid settings: {}", .0.join("; "))]
	InvalidSettings(Vec<String>),
}
