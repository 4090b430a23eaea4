//! Top-level module for the Markov model.
//!
//! This module provides a character-level order-k model, including:
//! - Per-window successor statistics (`CharOccurrence`, `OccurrenceList`)
//! - The two-phase `Trainer` and the frozen `Table` it produces
//! - The generation loop
//! - The user-facing `LanguageModel`

/// Successor records of a window and the cumulative-probability sampler.
pub mod occurrence;

/// Immutable window → successors mapping.
pub mod table;

/// Counting phase and normalization of the training pass.
pub mod trainer;

/// Generation loop over a trained table.
///
/// Internal, reached through `LanguageModel`.
mod generator;

/// Trained table plus the random source it is sampled with.
pub mod language_model;

#[cfg(test)]
pub(crate) mod testing;
