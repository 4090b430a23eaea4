use log::debug;
use rand::Rng;

use super::table::Table;

/// Returns the last `n` characters of a string.
///
/// If `n` is greater than the number of characters in `s`, the entire string
/// is returned.
///
/// # Notes
/// - Handles UTF-8 correctly (multibyte characters).
/// - Walks backwards from the end, so the cost depends on `n` only.
fn last_n_chars(s: &str, n: usize) -> &str {
	if n == 0 {
		return "";
	}
	let start = s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
	&s[start..]
}

/// Extends `initial_text` by up to `length` characters sampled from `table`.
///
/// # Behavior
/// - If `initial_text` is shorter than a window, or its last window is
///   unknown, it is returned unchanged.
/// - Otherwise each step samples a successor of the current window, appends
///   it and slides the window to the last `window_length` characters.
/// - Stops early, keeping everything generated so far, when the window was
///   never seen during training.
///
/// # Notes
/// - `initial_text` is always a prefix of the result.
/// - Lengths are counted in characters, not bytes.
pub(crate) fn generate<R: Rng + ?Sized>(table: &Table, rng: &mut R, initial_text: &str, length: usize) -> String {
	let window_length = table.window_length();
	if initial_text.chars().count() < window_length {
		debug!("initial text shorter than window length {window_length}, nothing generated");
		return initial_text.to_owned();
	}
	if !table.contains_window(last_n_chars(initial_text, window_length)) {
		debug!("unknown initial window, nothing generated");
		return initial_text.to_owned();
	}

	let mut generated = String::with_capacity(initial_text.len() + length);
	generated.push_str(initial_text);

	for appended in 0..length {
		let window = last_n_chars(&generated, window_length);
		let Some(occurrences) = table.get(window) else {
			debug!("unknown window {window:?} after {appended} character(s), stopping");
			break;
		};
		let c = occurrences.sample(rng);
		generated.push(c);
	}

	generated
}
