//! Procedural Lorem Ipsum text generation library.
//!
//! This crate provides a constrained random-text generator including:
//! - An immutable, shareable word corpus (embedded or loaded from disk)
//! - Word lists, paragraphs and bullet lists with word-count bounds
//! - Sentence assembly with capitalisation, commas and full stops
//! - A pluggable random source so generation can be made reproducible
//!
//! Only the high-level API is exposed publicly. Sentence assembly helpers
//! are kept internal to ensure consistency and prevent misuse.

/// Corpus, configuration and generation logic.
pub mod model;

/// Error type shared by the corpus loaders and settings validation.
pub mod error;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;
