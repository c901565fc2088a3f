use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Allowed range for every count a user can configure.
pub const VALUE_RANGE: RangeInclusive<usize> = 1..=999;

pub const DEFAULT_NUMBER_OF_VALUES: usize = 9;
pub const DEFAULT_MIN_PARAGRAPH_WORDS: usize = 20;
pub const DEFAULT_MAX_PARAGRAPH_WORDS: usize = 100;
pub const DEFAULT_MIN_BULLET_WORDS: usize = 10;
pub const DEFAULT_MAX_BULLET_WORDS: usize = 30;

/// Shape of the generated text.
///
/// Serialised in snake case; deserialised from its title in any case.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
	/// Blank-line separated paragraphs made of sentences.
	#[default]
	Paragraphs,
	/// A flat, space-separated list of words without punctuation.
	Words,
	/// Blank-line separated `- ` prefixed items made of sentences.
	Bullets,
}

impl TextMode {
	pub const ALL: [TextMode; 3] = [TextMode::Paragraphs, TextMode::Words, TextMode::Bullets];

	/// Human-readable name of the mode.
	pub fn title(self) -> &'static str {
		match self {
			TextMode::Paragraphs => "Paragraphs",
			TextMode::Words => "Words",
			TextMode::Bullets => "Bullets",
		}
	}
}

impl fmt::Display for TextMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.title())
	}
}

impl FromStr for TextMode {
	type Err = String;

	/// Parses a mode from its title, ignoring case.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TextMode::ALL
			.into_iter()
			.find(|mode| mode.title().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| format!("Unknown text mode '{s}', expected one of: Paragraphs, Words, Bullets"))
	}
}

impl<'de> Deserialize<'de> for TextMode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let title = String::deserialize(deserializer)?;
		title.parse().map_err(de::Error::custom)
	}
}

/// A single generation request.
///
/// `min_words`/`max_words` bound the size of one unit (a paragraph or a
/// bullet); they are ignored in `TextMode::Words`, where `item_count` is the
/// number of words.
///
/// The generator trusts these values: range checks belong to
/// `GeneratorSettings::validate`. Inconsistent bounds still yield
/// well-formed, if degenerate, text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	pub mode: TextMode,
	pub item_count: usize,
	pub min_words: usize,
	pub max_words: usize,
	pub start_with_fixed_phrase: bool,
}

impl GenerationRequest {
	/// A word list request; the unit bounds are unused and left at `0`.
	pub fn words(item_count: usize, start_with_fixed_phrase: bool) -> Self {
		Self {
			mode: TextMode::Words,
			item_count,
			min_words: 0,
			max_words: 0,
			start_with_fixed_phrase,
		}
	}

	pub fn paragraphs(item_count: usize, min_words: usize, max_words: usize, start_with_fixed_phrase: bool) -> Self {
		Self { mode: TextMode::Paragraphs, item_count, min_words, max_words, start_with_fixed_phrase }
	}

	pub fn bullets(item_count: usize, min_words: usize, max_words: usize, start_with_fixed_phrase: bool) -> Self {
		Self { mode: TextMode::Bullets, item_count, min_words, max_words, start_with_fixed_phrase }
	}
}

/// User-facing generator configuration.
///
/// Holds the bounds of every mode at once, so switching `text_mode` keeps
/// the values entered for the others. Every field has a default; a partial
/// document (query string, JSON) is completed from `Default`.
///
/// # Invariants
/// After a successful `validate`:
/// - every count lies in `VALUE_RANGE`
/// - each minimum is lower than or equal to its maximum
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorSettings {
	pub text_mode: TextMode,
	pub number_of_values: usize,
	pub min_words_in_paragraph: usize,
	pub max_words_in_paragraph: usize,
	pub min_words_in_bullet: usize,
	pub max_words_in_bullet: usize,
	pub start_with_lorem_ipsum: bool,
}

impl Default for GeneratorSettings {
	fn default() -> Self {
		Self {
			text_mode: TextMode::default(),
			number_of_values: DEFAULT_NUMBER_OF_VALUES,
			min_words_in_paragraph: DEFAULT_MIN_PARAGRAPH_WORDS,
			max_words_in_paragraph: DEFAULT_MAX_PARAGRAPH_WORDS,
			min_words_in_bullet: DEFAULT_MIN_BULLET_WORDS,
			max_words_in_bullet: DEFAULT_MAX_BULLET_WORDS,
			start_with_lorem_ipsum: true,
		}
	}
}

impl GeneratorSettings {
	/// Checks every count against `VALUE_RANGE` and each min/max pair.
	///
	/// # Errors
	/// Returns `GeneratorError::InvalidSettings` listing every violated rule.
	pub fn validate(&self) -> Result<(), GeneratorError> {
		let mut problems = Vec::new();

		let counts = [
			("number_of_values", self.number_of_values),
			("min_words_in_paragraph", self.min_words_in_paragraph),
			("max_words_in_paragraph", self.max_words_in_paragraph),
			("min_words_in_bullet", self.min_words_in_bullet),
			("max_words_in_bullet", self.max_words_in_bullet),
		];
		for (name, value) in counts {
			if !VALUE_RANGE.contains(&value) {
				problems.push(format!(
					"{name} must be between {} and {}, got {value}",
					VALUE_RANGE.start(),
					VALUE_RANGE.end()
				));
			}
		}

		if self.min_words_in_paragraph > self.max_words_in_paragraph {
			problems.push(format!(
				"min_words_in_paragraph ({}) must not be greater than max_words_in_paragraph ({})",
				self.min_words_in_paragraph, self.max_words_in_paragraph
			));
		}
		if self.min_words_in_bullet > self.max_words_in_bullet {
			problems.push(format!(
				"min_words_in_bullet ({}) must not be greater than max_words_in_bullet ({})",
				self.min_words_in_bullet, self.max_words_in_bullet
			));
		}

		if problems.is_empty() { Ok(()) } else { Err(GeneratorError::InvalidSettings(problems)) }
	}

	/// Builds the request matching the selected mode.
	///
	/// Does not validate; call `validate` first for untrusted input.
	pub fn to_request(&self) -> GenerationRequest {
		let (min_words, max_words) = match self.text_mode {
			TextMode::Bullets => (self.min_words_in_bullet, self.max_words_in_bullet),
			TextMode::Paragraphs | TextMode::Words => (self.min_words_in_paragraph, self.max_words_in_paragraph),
		};

		GenerationRequest {
			mode: self.text_mode,
			item_count: self.number_of_values,
			min_words,
			max_words,
			start_with_fixed_phrase: self.start_with_lorem_ipsum,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		let settings = GeneratorSettings::default();
		assert!(settings.validate().is_ok());
		assert_eq!(settings.text_mode, TextMode::Paragraphs);
		assert_eq!(settings.number_of_values, 9);
		assert!(settings.start_with_lorem_ipsum);
	}

	#[test]
	fn validate_collects_every_problem() {
		let settings = GeneratorSettings {
			number_of_values: 0,
			min_words_in_paragraph: 50,
			max_words_in_paragraph: 40,
			max_words_in_bullet: 1000,
			..GeneratorSettings::default()
		};

		match settings.validate() {
			Err(GeneratorError::InvalidSettings(problems)) => {
				assert_eq!(problems.len(), 3);
				assert!(problems[0].starts_with("number_of_values"));
				assert!(problems[1].starts_with("max_words_in_bullet"));
				assert!(problems[2].starts_with("min_words_in_paragraph (50)"));
			}
			other => panic!("expected invalid settings, got {other:?}"),
		}
	}

	#[test]
	fn equal_bounds_are_accepted() {
		let settings = GeneratorSettings {
			min_words_in_bullet: 12,
			max_words_in_bullet: 12,
			..GeneratorSettings::default()
		};
		assert!(settings.validate().is_ok());
	}

	#[test]
	fn to_request_picks_bounds_of_the_mode() {
		let mut settings = GeneratorSettings::default();
		let request = settings.to_request();
		assert_eq!((request.min_words, request.max_words), (20, 100));

		settings.text_mode = TextMode::Bullets;
		settings.start_with_lorem_ipsum = false;
		let request = settings.to_request();
		assert_eq!(request, GenerationRequest::bullets(9, 10, 30, false));
	}

	#[test]
	fn partial_document_is_completed_from_defaults() {
		let settings: GeneratorSettings =
			serde_json::from_str(r#"{"text_mode": "Bullets", "max_words_in_bullet": 12}"#).unwrap();
		assert_eq!(
			settings,
			GeneratorSettings {
				text_mode: TextMode::Bullets,
				max_words_in_bullet: 12,
				..GeneratorSettings::default()
			}
		);
	}

	#[test]
	fn text_mode_round_trips_through_json() {
		let json = serde_json::to_string(&GeneratorSettings::default()).unwrap();
		assert!(json.contains(r#""text_mode":"paragraphs""#));
		let settings: GeneratorSettings = serde_json::from_str(&json).unwrap();
		assert_eq!(settings, GeneratorSettings::default());
	}

	#[test]
	fn unknown_text_mode_fails_deserialization() {
		let err = serde_json::from_str::<GeneratorSettings>(r#"{"text_mode": "haiku"}"#).unwrap_err();
		assert!(err.to_string().contains("Unknown text mode 'haiku'"));
	}

	#[test]
	fn words_request_leaves_unit_bounds_unset() {
		let request = GenerationRequest::words(12, true);
		assert_eq!((request.min_words, request.max_words), (0, 0));
	}

	#[test]
	fn text_mode_parses_titles_case_insensitively() {
		assert_eq!("bullets".parse::<TextMode>(), Ok(TextMode::Bullets));
		assert_eq!(" WORDS ".parse::<TextMode>(), Ok(TextMode::Words));
		assert!("sonnets".parse::<TextMode>().is_err());
		assert_eq!(TextMode::Paragraphs.to_string(), "Paragraphs");
	}
}
