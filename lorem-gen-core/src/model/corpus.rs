use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::GeneratorError;
use crate::io::{read_file, split_lines};
use crate::model::random::RandomSource;

/// Word list shipped with the crate, one word per line.
const EMBEDDED_WORDS: &str = include_str!("../../resources/lorem-ipsum.txt");

/// The embedded corpus, parsed on first use and shared afterwards.
static EMBEDDED_CORPUS: LazyLock<Option<Arc<WordCorpus>>> = LazyLock::new(|| {
	let corpus = WordCorpus::from_text(EMBEDDED_WORDS).ok()?;
	log::info!("Loaded embedded word corpus ({} words)", corpus.len());
	Some(Arc::new(corpus))
});

/// Ordered list of words random text is drawn from.
///
/// A corpus is built once and never mutated afterwards; generators share it
/// through an `Arc`.
///
/// ## Invariants
/// - The corpus holds at least one word
/// - Words carry no surrounding whitespace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCorpus {
	words: Vec<String>,
}

impl WordCorpus {
	/// Builds a corpus from an ordered sequence of words.
	///
	/// Entries are trimmed and blank entries are dropped.
	///
	/// # Errors
	/// Returns `GeneratorError::EmptyCorpus` if no word remains.
	pub fn from_words<I, S>(words: I) -> Result<Self, GeneratorError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words: Vec<String> = words
			.into_iter()
			.map(|word| word.as_ref().trim().to_owned())
			.filter(|word| !word.is_empty())
			.collect();

		if words.is_empty() {
			return Err(GeneratorError::EmptyCorpus("in-memory".to_owned()));
		}
		Ok(Self { words })
	}

	/// Builds a corpus from a block of text holding one word per line.
	pub fn from_text(text: &str) -> Result<Self, GeneratorError> {
		Self::from_words(split_lines(text))
	}

	/// Loads a corpus from a file holding one word per line.
	///
	/// # Errors
	/// - `GeneratorError::CorpusIo` if the file cannot be read.
	/// - `GeneratorError::EmptyCorpus` if it contains no word.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, GeneratorError> {
		let path = filepath.as_ref();
		let lines = read_file(path).map_err(|source| GeneratorError::CorpusIo {
			path: path.to_path_buf(),
			source,
		})?;

		let corpus = Self::from_words(lines)
			.map_err(|_| GeneratorError::EmptyCorpus(path.display().to_string()))?;
		log::info!("Loaded word corpus {} ({} words)", path.display(), corpus.len());
		Ok(corpus)
	}

	/// Returns the corpus embedded in the crate.
	///
	/// The first call parses the word list; later calls share the same
	/// instance.
	pub fn embedded() -> Result<Arc<Self>, GeneratorError> {
		EMBEDDED_CORPUS
			.clone()
			.ok_or_else(|| GeneratorError::EmptyCorpus("embedded".to_owned()))
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always `false`: an empty corpus cannot be constructed.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Draws one word uniformly at random.
	///
	/// A source breaking the `next_below` contract (index past the end) gets
	/// the first word.
	pub fn random_word<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &str {
		let index = rng.next_below(self.words.len());
		self.words.get(index).unwrap_or(&self.words[0])
	}

	/// Draws `count` words uniformly at random, with replacement.
	pub fn random_words<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<String> {
		(0..count).map(|_| self.random_word(rng).to_owned()).collect()
	}
}
