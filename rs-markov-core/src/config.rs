use serde::{Deserialize, Serialize};

use crate::error::{MarkovError, Result};

/// Parameters used to build a `LanguageModel`.
///
/// # Invariants
/// - `window_length` is >= 1 once validated
/// - a `seed` selects a reproducible random source, `None` an OS-seeded one
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ModelConfig {
	/// Number of preceding characters used as context.
	pub window_length: usize,

	/// Optional seed for reproducible generation.
	pub seed: Option<u64>,
}

impl ModelConfig {
	/// Creates an unseeded configuration.
	pub fn new(window_length: usize) -> Self {
		Self { window_length, seed: None }
	}

	/// Sets the seed of the random source.
	#[must_use]
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	/// Checks the configuration before any training happens.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn validate(&self) -> Result<()> {
		if self.window_length == 0 {
			return Err(MarkovError::InvalidWindowLength(self.window_length));
		}
		Ok(())
	}
}
