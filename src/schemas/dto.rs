//! Directory listing results.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::fs::Dirent;
use crate::error::FsError;

/// One listed directory entry: either the entry or the reason it could not
/// be read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirentResult {
	/// The entry, when it could be read.
	pub data: Option<Dirent>,
	/// Why the entry could not be read.
	pub error: Option<String>,
}

impl From<fs::DirEntry> for DirentResult {
	fn from(entry: fs::DirEntry) -> Self {
		Self {
			data: Some(entry.into()),
			error: None,
		}
	}
}

impl From<io::Error> for DirentResult {
	fn from(err: io::Error) -> Self {
		Self {
			data: None,
			error: Some(err.to_string()),
		}
	}
}

impl From<io::Result<fs::DirEntry>> for DirentResult {
	fn from(result: io::Result<fs::DirEntry>) -> Self {
		match result {
			Ok(entry) => entry.into(),
			Err(err) => err.into(),
		}
	}
}

/// List the entries of the directory at `path`.
pub fn read_dir(path: impl AsRef<Path>) -> Result<Vec<DirentResult>, FsError> {
	let path = path.as_ref();
	let entries = fs::read_dir(path).map_err(|source| FsError::ReadDir {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(entries.map(DirentResult::from).collect())
}
