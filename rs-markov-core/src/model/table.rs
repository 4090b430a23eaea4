use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

use serde::Serialize;

use super::occurrence::OccurrenceList;

/// Conditional-frequency table of a trained model.
///
/// Maps every window observed during training to the characters that
/// followed it. A `Table` is only produced by `Trainer::finish` and is
/// read-only afterwards, so it can be shared freely between generation calls.
///
/// # Invariants
/// - Every key is exactly `window_length` characters long
/// - Every `OccurrenceList` is non-empty and normalized
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Table {
	/// Number of characters in each window key
	window_length: usize,

	/// Mapping from a window to its observed successors, sorted by window
	windows: BTreeMap<String, OccurrenceList>,
}

impl Table {
	pub(crate) fn new(window_length: usize, windows: BTreeMap<String, OccurrenceList>) -> Self {
		Self { window_length, windows }
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Returns the successors of `window`, if it was seen during training.
	pub fn get(&self, window: &str) -> Option<&OccurrenceList> {
		self.windows.get(window)
	}

	pub fn contains_window(&self, window: &str) -> bool {
		self.windows.contains_key(window)
	}

	/// Number of distinct windows.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Iterates over `(window, successors)` pairs in window order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &OccurrenceList)> {
		self.windows.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Window keys in lexicographic order.
	pub fn sorted_windows(&self) -> Vec<&str> {
		self.windows.keys().map(String::as_str).collect()
	}

	/// Picks a window uniformly at random.
	///
	/// Keys are drawn from in sorted order so a seeded source always picks
	/// the same window. Returns `None` if the table is empty.
	pub fn random_window<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
		self.sorted_windows().choose(rng).copied()
	}
}

impl fmt::Display for Table {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (key, list) in &self.windows {
			writeln!(f, "{key:?} : {list}")?;
		}
		Ok(())
	}
}
