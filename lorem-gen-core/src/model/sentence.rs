use std::cmp::{max, min};
use std::collections::HashSet;

use super::corpus::WordCorpus;
use super::random::RandomSource;

/// The iconic opening of Lorem Ipsum texts.
pub const FIXED_PHRASE: [&str; 8] = ["lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit"];

/// Index of the fixed phrase word followed by a comma ("amet,").
const FIXED_PHRASE_COMMA_INDEX: usize = 4;

pub(crate) const MIN_SENTENCE_WORDS: usize = 3;
pub(crate) const MAX_SENTENCE_WORDS: usize = 40;

/// Size of the word windows used to place commas.
pub(crate) const TEXT_FRAGMENT_LENGTH: usize = 8;

/// Returns the first `at_most_words` words of the fixed phrase.
///
/// As a sentence, the first word is capitalised, the last one gets a full
/// stop, and "amet" gets a comma when at least one word follows it
/// (more than five words). Otherwise the words are returned untouched.
pub(crate) fn iconic_text(at_most_words: usize, is_sentence: bool) -> Vec<String> {
	let mut words: Vec<String> = FIXED_PHRASE
		.iter()
		.take(at_most_words)
		.map(|word| (*word).to_owned())
		.collect();

	if is_sentence && !words.is_empty() {
		if words.len() > FIXED_PHRASE_COMMA_INDEX + 1 {
			words[FIXED_PHRASE_COMMA_INDEX].push(',');
		}
		words[0] = capitalize(&words[0]);
		if let Some(last) = words.last_mut() {
			last.push('.');
		}
	}

	words
}

/// Turns a sequence of raw words into a punctuated sentence.
///
/// The words are split into fragments of `TEXT_FRAGMENT_LENGTH`; every
/// fragment but the last complete one is eligible for a comma. Each eligible
/// fragment gets one with a 2/3 chance, placed after a word other than the
/// fragment's first. The first word is capitalised and the last one ends
/// with a full stop.
///
/// # Notes
/// - Punctuation is appended to the words, never inserted as a token.
/// - A comma can never land on the last word: the last eligible fragment
///   ends at least one full fragment before it.
pub(crate) fn create_sentence<R: RandomSource + ?Sized>(words: Vec<String>, rng: &mut R) -> Vec<String> {
	let fragments = (words.len() / TEXT_FRAGMENT_LENGTH).saturating_sub(1);

	// All acceptance draws happen first, then one offset per kept fragment.
	let kept: Vec<usize> = (0..fragments).filter(|_| rng.next_between(1, 4) != 3).collect();
	let comma_indices: HashSet<usize> = kept
		.into_iter()
		.map(|fragment| TEXT_FRAGMENT_LENGTH * fragment + rng.next_between(1, TEXT_FRAGMENT_LENGTH))
		.collect();

	let last = words.len().saturating_sub(1);
	words
		.into_iter()
		.enumerate()
		.map(|(i, mut word)| {
			if i == 0 {
				word = capitalize(&word);
			}
			if i == last {
				word.push('.');
			}
			if comma_indices.contains(&i) {
				word.push(',');
			}
			word
		})
		.collect()
}

/// Appends random sentences to `initial_words` until `total_words` is reached.
///
/// Each sentence holds between `MIN_SENTENCE_WORDS` and `MAX_SENTENCE_WORDS`
/// words and never more than what remains, except that it never drops below
/// `MIN_SENTENCE_WORDS`: the result may exceed `total_words` by up to two
/// words. Excess words are kept.
pub(crate) fn create_sentences<R: RandomSource + ?Sized>(
	corpus: &WordCorpus,
	initial_words: Vec<String>,
	total_words: usize,
	rng: &mut R,
) -> Vec<String> {
	let mut words = initial_words;

	while words.len() < total_words {
		let remaining = total_words - words.len();
		let min_sentence_words = max(min(MIN_SENTENCE_WORDS, remaining), MIN_SENTENCE_WORDS);
		let max_sentence_words = max(min(MAX_SENTENCE_WORDS, remaining), MIN_SENTENCE_WORDS);
		let sentence_words = if min_sentence_words == max_sentence_words {
			min_sentence_words
		} else {
			rng.next_between(min_sentence_words, max_sentence_words)
		};

		let sentence = create_sentence(corpus.random_words(sentence_words, rng), rng);
		words.extend(sentence);
	}

	words
}

/// Uppercases the first character of a word, keeping the rest as is.
fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
