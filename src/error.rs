//! Error types shared by the pages and the file-system schemas.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A query parameter that could not be interpreted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
	/// `n` is not a non-negative integer.
	#[error("invalid node count `{0}`: expected a non-negative integer")]
	InvalidSize(String),

	/// `n` exceeds the largest tree the pages will generate.
	#[error("node count {size} is above the limit of {max}")]
	SizeTooLarge {
		/// Requested node count.
		size: usize,
		/// Largest accepted node count.
		max: usize,
	},

	/// A boolean parameter has an unrecognised value.
	#[error("invalid value `{value}` for `{key}`: expected true or false")]
	InvalidFlag {
		/// Query key.
		key: String,
		/// Raw value as found in the query.
		value: String,
	},

	/// `shape` names no known widget convention.
	#[error("unknown graph shape `{0}`: expected `force` or `relation`")]
	UnknownShape(String),
}

/// Failure to read something from the file system.
#[derive(Error, Debug)]
pub enum FsError {
	/// The directory could not be opened for listing.
	#[error("Could not retrieve directory: {source}.")]
	ReadDir {
		/// Directory that was requested.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},

	/// The file could not be resolved or read.
	#[error("Could not retrieve file: {source}.")]
	ReadFile {
		/// File that was requested.
		path: PathBuf,
		/// Underlying I/O failure.
		#[source]
		source: io::Error,
	},
}

impl FsError {
	/// Path the failed operation was given.
	pub fn path(&self) -> &PathBuf {
		match self {
			FsError::ReadDir { path, .. } | FsError::ReadFile { path, .. } => path,
		}
	}
}
