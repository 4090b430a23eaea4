use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{MarkovError, Result};

/// Opens a training corpus for buffered reading.
///
/// Failures carry the offending path.
pub(crate) fn open_corpus<P: AsRef<Path>>(filename: P) -> Result<BufReader<File>> {
	let path = filename.as_ref();
	let file = File::open(path).map_err(|e| MarkovError::io(e, Some(path.to_path_buf())))?;
	Ok(BufReader::new(file))
}
