use std::collections::{BTreeMap, HashMap};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, info};

use crate::error::{MarkovError, Result};
use super::occurrence::{CharOccurrence, OccurrenceList};
use super::table::Table;

/// Builds a `Table` from a stream of characters.
///
/// Training happens in two phases:
/// - `feed_*` counts, for every window, how often each character follows it
/// - `finish` converts the counts into probabilities and freezes the table
///
/// No probability is computed while counting.
///
/// # Invariants
/// - `window` holds the last `window_length` characters once the first
///   `window_length` characters have been consumed
/// - Every occurrence list in `counts` is non-empty, in first-observed order
#[derive(Debug)]
pub struct Trainer {
	/// Number of characters per window (>= 1)
	window_length: usize,

	/// Current window, filled by the first `window_length` characters
	window: String,

	/// Counted successors of every window seen so far
	counts: HashMap<String, Vec<CharOccurrence>>,

	/// Total number of characters fed
	consumed: usize,
}

impl Trainer {
	/// Creates an empty trainer.
	///
	/// # Errors
	/// Returns `InvalidWindowLength` if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		if window_length == 0 {
			return Err(MarkovError::InvalidWindowLength(window_length));
		}
		debug!("training with window length {window_length}");
		Ok(Self {
			window_length,
			window: String::new(),
			counts: HashMap::new(),
			consumed: 0,
		})
	}

	/// Number of characters fed so far.
	pub fn consumed(&self) -> usize {
		self.consumed
	}

	/// Feeds a single character.
	///
	/// The first `window_length` characters only fill the initial window.
	/// Every following character is counted as a successor of the current
	/// window, which then slides forward by one character.
	pub fn feed_char(&mut self, c: char) {
		if self.consumed < self.window_length {
			self.window.push(c);
			self.consumed += 1;
			return;
		}
		self.consumed += 1;

		if let Some(occurrences) = self.counts.get_mut(&self.window) {
			match occurrences.iter_mut().find(|o| o.character() == c) {
				Some(occurrence) => occurrence.increment(),
				None => occurrences.push(CharOccurrence::new(c)),
			}
		} else {
			self.counts.insert(self.window.clone(), vec![CharOccurrence::new(c)]);
		}

		// Drop the first character (UTF-8 aware) and append the new one
		let first_len = self.window.chars().next().map_or(0, char::len_utf8);
		self.window.drain(..first_len);
		self.window.push(c);
	}

	/// Feeds every character of `text`.
	pub fn feed_str(&mut self, text: &str) {
		for c in text.chars() {
			self.feed_char(c);
		}
	}

	/// Feeds every character read from `reader` until end of stream.
	///
	/// # Errors
	/// Propagates read failures, including invalid UTF-8.
	pub fn feed_reader<R: Read>(&mut self, reader: R) -> Result<()> {
		self.feed_buffered(BufReader::new(reader), None)
	}

	/// Line-by-line ingestion. Line terminators are kept as characters.
	pub(crate) fn feed_buffered<B: BufRead>(&mut self, mut reader: B, path: Option<&Path>) -> Result<()> {
		let mut line = String::new();
		loop {
			line.clear();
			let read = reader
				.read_line(&mut line)
				.map_err(|e| MarkovError::io(e, path.map(Path::to_path_buf)))?;
			if read == 0 {
				return Ok(());
			}
			self.feed_str(&line);
		}
	}

	/// Normalizes every occurrence list and freezes the table.
	///
	/// # Errors
	/// Returns `InputTooShort` if fewer than `window_length` characters were
	/// fed. No partial table is returned.
	pub fn finish(self) -> Result<Table> {
		if self.consumed < self.window_length {
			return Err(MarkovError::InputTooShort {
				window_length: self.window_length,
				actual: self.consumed,
			});
		}

		let windows: BTreeMap<String, OccurrenceList> = self
			.counts
			.into_iter()
			.map(|(window, occurrences)| (window, OccurrenceList::from_counts(occurrences)))
			.collect();

		info!(
			"trained on {} characters: {} distinct windows of length {}",
			self.consumed,
			windows.len(),
			self.window_length
		);
		Ok(Table::new(self.window_length, windows))
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;
	use std::io;

	use super::*;

	const CORPUS: &str = "it was the best of times, it was the worst of times,\n\
		it was the age of wisdom, it was the age of foolishness";

	fn train(text: &str, window_length: usize) -> Table {
		let mut trainer = Trainer::new(window_length).unwrap();
		trainer.feed_str(text);
		trainer.finish().unwrap()
	}

	#[test]
	fn repeated_cycle_has_single_successors() {
		let table = train("abcabcabc", 3);
		assert_eq!(table.len(), 3);
		for (window, successor) in [("abc", 'a'), ("bca", 'b'), ("cab", 'c')] {
			let list = table.get(window).unwrap();
			assert_eq!(list.len(), 1);
			let entry = &list.entries()[0];
			assert_eq!(entry.character(), successor);
			assert_eq!(entry.count(), 2);
			assert_eq!(entry.probability(), 1.0);
			assert_eq!(entry.cumulative_probability(), 1.0);
		}
	}

	#[test]
	fn probabilities_are_normalized() {
		let table = train(CORPUS, 2);
		for (window, list) in table.iter() {
			assert!(!list.is_empty(), "empty list for {window:?}");
			let sum: f64 = list.iter().map(|o| o.probability()).sum();
			assert!((sum - 1.0).abs() < 1e-9, "{window:?} sums to {sum}");
			let mut previous = 0.0;
			for entry in list.iter() {
				assert!(entry.cumulative_probability() >= previous);
				assert!((0.0..=1.0).contains(&entry.probability()));
				previous = entry.cumulative_probability();
			}
			assert!((previous - sum).abs() < 1e-9);
		}
	}

	#[test]
	fn counts_match_window_occurrences() {
		let window_length = 3;
		let table = train(CORPUS, window_length);

		let chars: Vec<char> = CORPUS.chars().collect();
		let mut expected: HashMap<String, usize> = HashMap::new();
		for i in 0..chars.len() - window_length {
			let window: String = chars[i..i + window_length].iter().collect();
			*expected.entry(window).or_insert(0) += 1;
		}

		assert_eq!(table.len(), expected.len());
		for (window, count) in expected {
			assert_eq!(table.get(&window).unwrap().total_count(), count, "window {window:?}");
		}
	}

	#[test]
	fn successors_keep_first_seen_order() {
		let table = train("azabaaac", 1);
		let order: Vec<char> = table.get("a").unwrap().iter().map(|o| o.character()).collect();
		assert_eq!(order, vec!['z', 'b', 'a', 'c']);
	}

	#[test]
	fn keys_count_characters_not_bytes() {
		let table = train("héhéhé", 2);
		assert!(table.contains_window("hé"));
		assert!(table.contains_window("éh"));
		for (window, _) in table.iter() {
			assert_eq!(window.chars().count(), 2);
		}
	}

	#[test]
	fn identical_input_gives_identical_table() {
		assert_eq!(train(CORPUS, 4), train(CORPUS, 4));
	}

	#[test]
	fn exact_window_length_gives_empty_table() {
		let table = train("abcd", 4);
		assert!(table.is_empty());
		assert_eq!(table.window_length(), 4);
	}

	#[test]
	fn short_input_is_rejected() {
		let mut trainer = Trainer::new(5).unwrap();
		trainer.feed_str("abc");
		let err = trainer.finish().unwrap_err();
		assert!(matches!(err, MarkovError::InputTooShort { window_length: 5, actual: 3 }));
	}

	#[test]
	fn zero_window_is_rejected() {
		assert!(matches!(Trainer::new(0), Err(MarkovError::InvalidWindowLength(0))));
	}

	#[test]
	fn reader_keeps_line_breaks() {
		let mut trainer = Trainer::new(1).unwrap();
		trainer.feed_reader("a\nb\n".as_bytes()).unwrap();
		assert_eq!(trainer.consumed(), 4);
		let table = trainer.finish().unwrap();
		assert_eq!(table.get("a").unwrap().entries()[0].character(), '\n');
		assert_eq!(table.get("\n").unwrap().entries()[0].character(), 'b');
	}

	#[test]
	fn reader_errors_are_propagated() {
		struct Broken;
		impl Read for Broken {
			fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
				Err(io::Error::other("disk on fire"))
			}
		}

		let mut trainer = Trainer::new(2).unwrap();
		let err = trainer.feed_reader(Broken).unwrap_err();
		assert!(matches!(err, MarkovError::Io { path: None, .. }));
	}

	#[test]
	fn invalid_utf8_is_an_io_error() {
		let mut trainer = Trainer::new(1).unwrap();
		let err = trainer.feed_reader(&[0x61, 0xff, 0x62][..]).unwrap_err();
		assert!(matches!(err, MarkovError::Io { .. }));
	}
}
