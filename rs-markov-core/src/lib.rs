//! Character-level Markov text generation library.
//!
//! This crate provides an order-k Markov language model including:
//! - A two-phase trainer (count transitions, then normalize them)
//! - An immutable conditional-frequency table
//! - Cumulative-probability sampling with an owned random source
//! - A bounded generation loop seeded by an initial text
//!
//! Low-level helpers (file opening) are kept internal.

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// Model construction parameters (window length, optional seed).
pub mod config;

/// Core model types, training and generation logic.
pub mod model;

/// I/O utilities (training file loading).
///
/// Not exposed
pub(crate) mod io;

pub use config::ModelConfig;
pub use error::{MarkovError, Result};
pub use model::language_model::LanguageModel;
pub use model::occurrence::{CharOccurrence, OccurrenceList, FALLBACK_CHAR};
pub use model::table::Table;
pub use model::trainer::Trainer;
