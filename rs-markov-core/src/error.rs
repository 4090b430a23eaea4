//! Error handling utilities shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type used throughout the crate.
pub type Result<T, E = MarkovError> = std::result::Result<T, E>;

/// Failures raised while configuring or training a model.
///
/// Reaching an unknown window during generation is not an error: generation
/// simply stops and returns the text produced so far.
#[derive(Debug, Error)]
pub enum MarkovError {
	/// The window length must be at least one character.
	#[error("invalid window length {0}: must be >= 1")]
	InvalidWindowLength(usize),
	/// The training stream ended before a full window could be read.
	#[error("training input too short: {actual} character(s) read, window length is {window_length}")]
	InputTooShort {
		/// Configured window length.
		window_length: usize,
		/// Number of characters actually available.
		actual: usize,
	},
	/// Reading the training stream failed.
	#[error("io error while reading {}: {source}", source_label(.path))]
	Io {
		/// Underlying IO error returned by the standard library.
		source: std::io::Error,
		/// Source path, when the stream came from a file.
		path: Option<PathBuf>,
	},
}

/// Names the stream an IO error came from.
fn source_label(path: &Option<PathBuf>) -> String {
	match path {
		Some(path) => path.display().to_string(),
		None => "input stream".to_owned(),
	}
}

impl MarkovError {
	/// Wraps an IO error, attaching the path it relates to if known.
	pub fn io(source: std::io::Error, path: Option<PathBuf>) -> Self {
		Self::Io { source, path }
	}
}

impl From<std::io::Error> for MarkovError {
	fn from(source: std::io::Error) -> Self {
		Self::io(source, None)
	}
}
