//! Files, directory entries and their metadata.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use log::{error, warn};
use serde::{Deserialize, Serialize};

use crate::error::FsError;

/// File name used when a path has no final component.
pub const UNKNOWN_FILE_NAME: &str = "Unknown";

fn os_to_string(s: &OsStr) -> String {
	s.to_string_lossy().into_owned()
}

/// Kind of a file-system entry. Symbolic links are reported as links, not
/// as what they point at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileType {
	/// Regular file.
	File,
	/// Directory.
	Directory,
	/// Symbolic link.
	Symlink,
	/// Anything else (sockets, devices, ...).
	Unsupported,
}

impl From<fs::FileType> for FileType {
	fn from(ft: fs::FileType) -> Self {
		if ft.is_dir() {
			FileType::Directory
		} else if ft.is_file() {
			FileType::File
		} else if ft.is_symlink() {
			FileType::Symlink
		} else {
			FileType::Unsupported
		}
	}
}

/// File metadata. Times are seconds since the Unix epoch, `None` when the
/// platform does not record them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
	/// Kind of entry.
	pub file_type: FileType,
	/// Size in whole kibibytes, rounded down.
	#[serde(rename = "size_kb")]
	pub size_kb: u64,
	/// Whether the permissions forbid writing.
	pub read_only: bool,
	/// Last modification time.
	pub modified: Option<f64>,
	/// Last access time.
	pub accessed: Option<f64>,
	/// Creation time.
	pub created: Option<f64>,
}

fn epoch_secs(time: io::Result<SystemTime>) -> Option<f64> {
	let time = time.ok()?;
	match time.duration_since(UNIX_EPOCH) {
		Ok(d) => Some(d.as_secs_f64()),
		Err(e) => Some(-e.duration().as_secs_f64()),
	}
}

impl From<fs::Metadata> for FileMetadata {
	fn from(metadata: fs::Metadata) -> Self {
		Self {
			file_type: metadata.file_type().into(),
			size_kb: metadata.len() / 1024,
			read_only: metadata.permissions().readonly(),
			modified: epoch_secs(metadata.modified()),
			accessed: epoch_secs(metadata.accessed()),
			created: epoch_secs(metadata.created()),
		}
	}
}

fn metadata_or_log(result: io::Result<fs::Metadata>, path: &Path) -> Option<FileMetadata> {
	match result {
		Ok(m) => Some(m.into()),
		Err(err) => {
			error!("Error processing metadata for {}: {}", path.display(), err);
			None
		}
	}
}

/// A directory entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dirent {
	/// Path of the entry, as listed.
	pub path: String,
	/// Metadata of the entry itself; `None` when it could not be read.
	pub metadata: Option<FileMetadata>,
	/// Final path component.
	pub file_name: String,
}

impl From<fs::DirEntry> for Dirent {
	fn from(entry: fs::DirEntry) -> Self {
		let path = entry.path();
		Self {
			metadata: metadata_or_log(entry.metadata(), &path),
			file_name: os_to_string(&entry.file_name()),
			path: os_to_string(path.as_os_str()),
		}
	}
}

/// How [`File::contents`] is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileEncoding {
	/// Text as found on disk.
	#[default]
	Utf8,
	/// URL-safe base64 of the raw bytes.
	Base64,
}

/// A file's contents together with its metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
	/// Text, or base64 per [`File::encoding`].
	pub contents: String,
	/// Final path component, or `Unknown`.
	pub file_name: String,
	/// Metadata of the resolved file.
	pub metadata: Option<FileMetadata>,
	/// Canonical path.
	pub path: String,
	/// Encoding of `contents`.
	#[serde(default)]
	pub encoding: FileEncoding,
}

impl File {
	/// Read the file at `path`.
	///
	/// Text that is not valid UTF-8 is returned base64 encoded.
	pub fn read(path: impl AsRef<Path>) -> Result<Self, FsError> {
		let path = path.as_ref();
		let wrap = |source| FsError::ReadFile {
			path: path.to_path_buf(),
			source,
		};
		let full_path = fs::canonicalize(path).map_err(wrap)?;
		let bytes = fs::read(&full_path).map_err(wrap)?;

		let (contents, encoding) = match String::from_utf8(bytes) {
			Ok(text) => (text, FileEncoding::Utf8),
			Err(err) => {
				warn!("{} is not valid UTF-8, encoding as base64", full_path.display());
				(URL_SAFE.encode(err.into_bytes()), FileEncoding::Base64)
			}
		};

		let file_name = match full_path.file_name() {
			Some(name) => os_to_string(name),
			None => {
				warn!("Unable to retrieve file name for {}.", path.display());
				UNKNOWN_FILE_NAME.to_string()
			}
		};

		Ok(Self {
			contents,
			file_name,
			metadata: metadata_or_log(fs::metadata(&full_path), &full_path),
			path: os_to_string(full_path.as_os_str()),
			encoding,
		})
	}
}
