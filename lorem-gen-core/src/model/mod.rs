//! Top-level module for the Lorem Ipsum generation system.
//!
//! This crate provides a procedural text generator, including:
//! - The shared word corpus (`WordCorpus`)
//! - A pluggable integer sampler (`RandomSource`)
//! - Request and user settings types (`GenerationRequest`, `GeneratorSettings`)
//! - Sentence assembly rules (internal)
//! - A high-level generation interface (`LoremGenerator`)

/// High-level interface producing words, paragraphs or bullet lists.
pub mod generator;

/// Immutable word list, loaded from memory, disk, or the embedded resource.
pub mod corpus;

/// Integer sampling abstraction used for every random decision.
pub mod random;

/// Generation request, text modes and validated user settings.
pub mod request;

/// Sentence punctuation and packing rules.
///
/// Only the fixed phrase is exposed; the assembly helpers stay internal.
pub mod sentence;
