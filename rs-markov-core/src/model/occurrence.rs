use std::fmt;

use rand::Rng;

use serde::Serialize;

/// Character returned by [`OccurrenceList::sample`] when no cumulative
/// probability exceeds the draw.
///
/// The last cumulative probability of a list is 1.0 up to rounding, so this
/// only happens when the summed mass ends slightly below the draw.
pub const FALLBACK_CHAR: char = ' ';

/// One observed next-character outcome for a given window.
///
/// `count` accumulates during training; `probability` and
/// `cumulative_probability` stay at 0.0 until the list owning this entry is
/// frozen by [`OccurrenceList::from_counts`], and never change afterwards.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CharOccurrence {
	/// The character that followed the window.
	character: char,
	/// Number of times it was observed right after the window.
	count: usize,
	/// `count / total` over the owning list.
	probability: f64,
	/// Running sum of `probability` up to and including this entry.
	cumulative_probability: f64,
}

impl CharOccurrence {
	/// First observation of `character` after a window.
	pub(crate) fn new(character: char) -> Self {
		Self {
			character,
			count: 1,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}

	/// Records one more observation.
	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	pub fn character(&self) -> char {
		self.character
	}

	pub fn count(&self) -> usize {
		self.count
	}

	pub fn probability(&self) -> f64 {
		self.probability
	}

	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}
}

impl fmt::Display for CharOccurrence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({:?} {} {} {})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

/// Ordered outcomes observed after a single window.
///
/// Entries keep first-observed order: cumulative probabilities are computed
/// in that order and sampling scans in that same order.
///
/// # Invariants
/// - Never empty once built by the trainer
/// - `cumulative_probability` is non-decreasing and ends at 1.0 (within rounding)
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(transparent)]
pub struct OccurrenceList {
	entries: Vec<CharOccurrence>,
}

impl OccurrenceList {
	/// Freezes counted occurrences into a normalized list.
	///
	/// This is the second training phase: the total is only known once every
	/// occurrence of the window has been counted.
	pub(crate) fn from_counts(mut entries: Vec<CharOccurrence>) -> Self {
		let total: usize = entries.iter().map(CharOccurrence::count).sum();
		if total > 0 {
			let mut cumulative = 0.0;
			for entry in &mut entries {
				let probability = entry.count as f64 / total as f64;
				cumulative += probability;
				entry.probability = probability;
				entry.cumulative_probability = cumulative;
			}
		}
		Self { entries }
	}

	/// Returns the entries in first-observed order.
	pub fn entries(&self) -> &[CharOccurrence] {
		&self.entries
	}

	pub fn iter(&self) -> impl Iterator<Item = &CharOccurrence> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of times the window was followed by any character.
	pub fn total_count(&self) -> usize {
		self.entries.iter().map(CharOccurrence::count).sum()
	}

	/// Draws a character by cumulative-probability sampling.
	///
	/// Draws `r` uniformly from `[0, 1)` and returns the first entry whose
	/// cumulative probability is strictly greater than `r`, or
	/// [`FALLBACK_CHAR`] if there is none.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
		let r: f64 = rng.random();
		self.entries
			.iter()
			.find(|entry| entry.cumulative_probability > r)
			.map_or(FALLBACK_CHAR, CharOccurrence::character)
	}
}

impl fmt::Display for OccurrenceList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, entry) in self.entries.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{entry}")?;
		}
		Ok(())
	}
}
