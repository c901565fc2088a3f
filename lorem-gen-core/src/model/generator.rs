use std::sync::Arc;

use crate::error::GeneratorError;
use crate::model::corpus::WordCorpus;
use crate::model::random::RandomSource;
use crate::model::request::{GenerationRequest, TextMode};
use crate::model::sentence::{create_sentences, iconic_text};

/// Separator between two paragraphs or two bullets.
pub const UNIT_SEPARATOR: &str = "\n\n";
pub const WORDS_SEPARATOR: &str = " ";
pub const BULLET_SYMBOL: &str = "-";

/// Lorem Ipsum generator over a shared word corpus.
///
/// # Responsibilities
/// - Dispatch a `GenerationRequest` to the word, paragraph or bullet builder
/// - Sample unit sizes within the requested bounds
/// - Seed the first unit with the fixed phrase when asked
///
/// The generator holds no mutable state: one instance can serve any number
/// of threads.
#[derive(Clone, Debug)]
pub struct LoremGenerator {
	corpus: Arc<WordCorpus>,
}

impl LoremGenerator {
	pub fn new(corpus: Arc<WordCorpus>) -> Self {
		Self { corpus }
	}

	/// Creates a generator over the corpus embedded in the crate.
	///
	/// # Errors
	/// Returns an error if the embedded word list holds no word.
	pub fn with_embedded_corpus() -> Result<Self, GeneratorError> {
		Ok(Self::new(WordCorpus::embedded()?))
	}

	pub fn corpus(&self) -> &WordCorpus {
		&self.corpus
	}

	/// Generates text using the thread-local secure random generator.
	pub fn generate(&self, request: &GenerationRequest) -> String {
		self.generate_with(request, &mut rand::rng())
	}

	/// Generates text drawing every random decision from `rng`.
	///
	/// # Notes
	/// - Never fails; bounds are used as given.
	/// - `item_count == 0` yields an empty string.
	pub fn generate_with<R: RandomSource + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> String {
		let text = match request.mode {
			TextMode::Words => self.generate_words(request, rng),
			TextMode::Paragraphs => self.generate_paragraphs(request, rng),
			TextMode::Bullets => self.generate_bullets(request, rng),
		};

		log::debug!(
			"Generated {} {} ({} bytes)",
			request.item_count,
			request.mode,
			text.len()
		);
		text
	}

	/// Exactly `item_count` words, optionally starting with the bare fixed phrase.
	fn generate_words<R: RandomSource + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> String {
		let mut words = if request.start_with_fixed_phrase {
			iconic_text(request.item_count, false)
		} else {
			Vec::new()
		};

		if words.len() < request.item_count {
			let missing = request.item_count - words.len();
			words.extend(self.corpus.random_words(missing, rng));
		}

		words.join(WORDS_SEPARATOR)
	}

	/// Paragraph sizes are drawn from the closed range `[min_words, max_words]`.
	fn generate_paragraphs<R: RandomSource + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> String {
		(0..request.item_count)
			.map(|paragraph_index| {
				let total_words = rng.next_between(request.min_words, request.max_words.saturating_add(1));
				let initial_words = self.initial_words(request, paragraph_index, total_words);
				create_sentences(&self.corpus, initial_words, total_words, rng).join(WORDS_SEPARATOR)
			})
			.collect::<Vec<_>>()
			.join(UNIT_SEPARATOR)
	}

	/// Bullet sizes are drawn from the half-open range `[min_words, max_words)`,
	/// or are `min_words` when the range is empty.
	fn generate_bullets<R: RandomSource + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> String {
		(0..request.item_count)
			.map(|bullet_index| {
				let total_words = rng.next_between(request.min_words, request.max_words);
				let initial_words = self.initial_words(request, bullet_index, total_words);
				let text = create_sentences(&self.corpus, initial_words, total_words, rng).join(WORDS_SEPARATOR);
				format!("{BULLET_SYMBOL} {text}")
			})
			.collect::<Vec<_>>()
			.join(UNIT_SEPARATOR)
	}

	/// The fixed phrase as a sentence for the first unit, nothing otherwise.
	fn initial_words(&self, request: &GenerationRequest, unit_index: usize, total_words: usize) -> Vec<String> {
		if unit_index == 0 && request.start_with_fixed_phrase {
			iconic_text(total_words, true)
		} else {
			Vec::new()
		}
	}
}
