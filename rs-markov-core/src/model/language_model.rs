use std::fmt;
use std::io::{BufReader, Read};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ModelConfig;
use crate::error::Result;
use crate::io::open_corpus;
use super::generator;
use super::table::Table;
use super::trainer::Trainer;

/// A trained character-level Markov model and its random source.
///
/// The table is immutable once built. The random source is owned by the
/// model and advanced by every draw made through `&mut self` methods.
/// `generate_with` takes a caller-owned source instead, so a single model can
/// serve several threads as long as each one brings its own source.
///
/// # Responsibilities
/// - Train a table from a text, a reader or a file
/// - Generate text from an initial window
/// - Pick random starting windows
#[derive(Debug)]
pub struct LanguageModel<R = StdRng> {
	table: Table,
	rng: R,
}

impl LanguageModel<StdRng> {
	/// Wraps a trained table with a standard random source.
	///
	/// A `seed` makes every generation reproducible, `None` seeds from the OS.
	pub fn new(table: Table, seed: Option<u64>) -> Self {
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		};
		Self::with_rng(table, rng)
	}

	/// Trains a model on every character of `reader`.
	///
	/// # Errors
	/// - `InvalidWindowLength` if the configuration is invalid
	/// - `InputTooShort` if the stream holds fewer characters than a window
	/// - `Io` if reading fails
	pub fn train<Rd: Read>(reader: Rd, config: &ModelConfig) -> Result<Self> {
		config.validate()?;
		let mut trainer = Trainer::new(config.window_length)?;
		trainer.feed_buffered(BufReader::new(reader), None)?;
		Ok(Self::new(trainer.finish()?, config.seed))
	}

	/// Trains a model on an in-memory text.
	pub fn train_str(text: &str, config: &ModelConfig) -> Result<Self> {
		config.validate()?;
		let mut trainer = Trainer::new(config.window_length)?;
		trainer.feed_str(text);
		Ok(Self::new(trainer.finish()?, config.seed))
	}

	/// Trains a model on the content of a text file.
	///
	/// IO errors carry the file path.
	pub fn from_file<P: AsRef<Path>>(filepath: P, config: &ModelConfig) -> Result<Self> {
		config.validate()?;
		let path = filepath.as_ref();
		let reader = open_corpus(path)?;
		let mut trainer = Trainer::new(config.window_length)?;
		trainer.feed_buffered(reader, Some(path))?;
		Ok(Self::new(trainer.finish()?, config.seed))
	}
}

impl<R: Rng> LanguageModel<R> {
	/// Wraps a trained table with any random source.
	pub fn with_rng(table: Table, rng: R) -> Self {
		Self { table, rng }
	}

	pub fn window_length(&self) -> usize {
		self.table.window_length()
	}

	/// Read-only view of the trained table.
	pub fn table(&self) -> &Table {
		&self.table
	}

	/// Generates up to `length` characters after `initial_text`, using the
	/// model's own random source.
	///
	/// Returns `initial_text` unchanged if its last window is unknown or if
	/// it is shorter than a window.
	pub fn generate(&mut self, initial_text: &str, length: usize) -> String {
		generator::generate(&self.table, &mut self.rng, initial_text, length)
	}

	/// Same as [`generate`](Self::generate) with a caller-owned random source.
	pub fn generate_with<G: Rng + ?Sized>(&self, rng: &mut G, initial_text: &str, length: usize) -> String {
		generator::generate(&self.table, rng, initial_text, length)
	}

	/// Samples one successor of `window`.
	///
	/// Returns `None` if the window was never seen during training.
	pub fn sample(&mut self, window: &str) -> Option<char> {
		Some(self.table.get(window)?.sample(&mut self.rng))
	}

	/// Returns a random window from the table, usable as an initial text.
	///
	/// Returns `None` if the table is empty.
	pub fn random_window(&mut self) -> Option<String> {
		self.table.random_window(&mut self.rng).map(str::to_owned)
	}
}

impl<R> fmt::Display for LanguageModel<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.table)
	}
}
